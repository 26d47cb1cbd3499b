//! Order lifecycle reporting to the UTMify attribution API.

mod time;
mod utmify;

pub use time::{TIMESTAMP_FORMAT, format_utc, local_to_utc, utc_now};
pub use utmify::{SendOutcome, TrackerConfig, UtmifyTracker};

use thiserror::Error;

/// Ошибка отправки заказа в UTMify.
///
/// Обе разновидности отказа возвращаются вызывающему как значение;
/// операции отчёта никогда не паникуют и не роняют обработчик платежа.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Удалённый API ответил статусом, отличным от 200.
    #[error("utmify rejected order: status {status}: {body}")]
    RemoteRejected { status: u16, body: String },

    /// Запрос не дошёл до ответа: таймаут, отказ соединения, битое тело.
    #[error("request failed: {0}")]
    Transport(String),

    /// Некорректная конфигурация трекера.
    #[error("invalid tracker config: {0}")]
    Config(String),
}

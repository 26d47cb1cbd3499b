//! HTTP client for the UTMify orders API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use crate::domain::{
    Commission, Customer, OrderEvent, OrderStatus, Plan, Product, TrackingParameters,
    gateway_fee_in_cents, price_in_cents, user_commission_in_cents,
};
use crate::storage::{AttributionStore, UserTracking};
use crate::tracking::{TrackingError, time};

/// Production UTMify orders endpoint.
const BASE_API_URL: &str = "https://api.utmify.com.br/api-credentials/orders";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default platform label reported with every order.
const DEFAULT_PLATFORM_NAME: &str = "NGKPay";

/// The only payment method the bot accepts.
const PAYMENT_METHOD: &str = "pix";

/// Commission currency.
const CURRENCY: &str = "BRL";

/// Result of a single send attempt: the parsed response body on HTTP 200,
/// or the classified failure. Exactly one outbound request per call, no
/// retries; duplicate-send protection is the caller's responsibility.
pub type SendOutcome = Result<serde_json::Value, TrackingError>;

/// Конфигурация UTMify трекера.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// URL эндпоинта заказов.
    pub base_url: String,
    /// Секретный API токен (заголовок x-api-token).
    pub api_token: String,
    /// Метка платформы в отправляемых документах.
    pub platform_name: String,
}

impl TrackerConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: BASE_API_URL.to_string(),
            api_token: api_token.into(),
            platform_name: DEFAULT_PLATFORM_NAME.to_string(),
        }
    }

    pub fn with_platform_name(mut self, platform_name: impl Into<String>) -> Self {
        self.platform_name = platform_name.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// UtmifyTracker формирует и отправляет события жизненного цикла заказа.
///
/// Состояния между вызовами нет: каждый вызов независим, держатся только
/// конфигурация и HTTP клиент. Порядок между waiting_payment и paid для
/// одного заказа обеспечивает вызывающий.
pub struct UtmifyTracker {
    config: TrackerConfig,
    http_client: HttpClient,
    store: Arc<dyn AttributionStore>,
}

impl UtmifyTracker {
    /// Создаёт новый UtmifyTracker.
    pub fn new(
        config: TrackerConfig,
        store: Arc<dyn AttributionStore>,
    ) -> Result<Self, TrackingError> {
        if config.api_token.is_empty() {
            return Err(TrackingError::Config("api_token is required".into()));
        }

        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                TrackingError::Config(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
            store,
        })
    }

    /// Создаёт трекер из настроек приложения.
    pub fn from_config(
        config: &crate::config::Config,
        store: Arc<dyn AttributionStore>,
    ) -> Result<Self, TrackingError> {
        let mut tracker_config = TrackerConfig::new(config.utmify.api_token.clone());
        if let Some(ref platform_name) = config.utmify.platform_name {
            tracker_config = tracker_config.with_platform_name(platform_name);
        }
        if let Some(ref base_url) = config.utmify.base_url {
            tracker_config = tracker_config.with_base_url(base_url);
        }
        Self::new(tracker_config, store)
    }

    /// Создаёт заказ со статусом waiting_payment (PIX сгенерирован).
    ///
    /// `createdAt` ставится в текущее UTC время. Вызывающий фиксирует
    /// момент создания счёта у себя и передаёт его в [`update_to_paid`].
    pub async fn create_waiting_payment(
        &self,
        user_id: &str,
        bot_id: &str,
        plan: &Plan,
        order_id: &str,
    ) -> SendOutcome {
        let tracking = self.lookup_tracking(user_id, bot_id).await;
        let order = self.build_order(
            OrderStatus::WaitingPayment,
            user_id,
            bot_id,
            plan,
            order_id,
            time::utc_now(),
            None,
            &tracking,
        );
        self.send_order(&order).await
    }

    /// Обновляет заказ до статуса paid.
    ///
    /// `created_at` — исходное значение из waiting_payment, передаётся в
    /// документ без изменений; `approvedDate` ставится в текущее UTC время.
    pub async fn update_to_paid(
        &self,
        user_id: &str,
        bot_id: &str,
        plan: &Plan,
        order_id: &str,
        created_at: &str,
    ) -> SendOutcome {
        let tracking = self.lookup_tracking(user_id, bot_id).await;
        let order = self.build_order(
            OrderStatus::Paid,
            user_id,
            bot_id,
            plan,
            order_id,
            created_at.to_string(),
            Some(time::utc_now()),
            &tracking,
        );
        self.send_order(&order).await
    }

    /// Читает атрибуцию из хранилища. Отсутствие записи и ошибки
    /// хранилища деградируют до пустой атрибуции, не ломая отчёт.
    async fn lookup_tracking(&self, user_id: &str, bot_id: &str) -> UserTracking {
        match self.store.get_user_tracking(user_id, bot_id).await {
            Ok(Some(tracking)) => tracking,
            Ok(None) => UserTracking::default(),
            Err(e) => {
                warn!(
                    error = %e,
                    user_id = %user_id,
                    bot_id = %bot_id,
                    "Attribution lookup failed, reporting without UTM data"
                );
                UserTracking::default()
            }
        }
    }

    /// Собирает полный документ заказа.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn build_order(
        &self,
        status: OrderStatus,
        user_id: &str,
        bot_id: &str,
        plan: &Plan,
        order_id: &str,
        created_at: String,
        approved_date: Option<String>,
        tracking: &UserTracking,
    ) -> OrderEvent {
        OrderEvent {
            order_id: order_id.to_string(),
            platform: self.config.platform_name.clone(),
            payment_method: PAYMENT_METHOD.to_string(),
            status,
            created_at,
            approved_date,
            refunded_at: None,
            customer: Customer::synthetic(user_id, tracking.ip_address.clone()),
            products: vec![Product {
                id: format!("plan_{}", bot_id),
                name: plan.display_name().to_string(),
                plan_id: None,
                plan_name: None,
                quantity: 1,
                price_in_cents: price_in_cents(plan.value),
            }],
            tracking_parameters: TrackingParameters {
                src: tracking.src.clone(),
                sck: tracking.sck.clone(),
                utm_source: tracking.utm_source.clone(),
                utm_campaign: tracking.utm_campaign.clone(),
                utm_medium: tracking.utm_medium.clone(),
                utm_content: tracking.utm_content.clone(),
                utm_term: tracking.utm_term.clone(),
            },
            commission: Commission {
                total_price_in_cents: price_in_cents(plan.value),
                gateway_fee_in_cents: gateway_fee_in_cents(plan.value),
                user_commission_in_cents: user_commission_in_cents(plan.value),
                currency: CURRENCY.to_string(),
            },
            is_test: false,
        }
    }

    /// Отправляет заказ в UTMify. Один запрос, без повторов.
    pub async fn send_order(&self, order: &OrderEvent) -> SendOutcome {
        debug!(
            order_id = %order.order_id,
            status = ?order.status,
            "Sending order to UTMify"
        );

        let response = self
            .http_client
            .post(&self.config.base_url)
            .header("x-api-token", &self.config.api_token)
            .json(order)
            .send()
            .await
            .map_err(|e| TrackingError::Transport(e.to_string()))?;

        let status = response.status();

        // API подтверждает приём только статусом 200
        if status == StatusCode::OK {
            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| TrackingError::Transport(e.to_string()))
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            warn!(
                status = status.as_u16(),
                body = %body,
                order_id = %order.order_id,
                "UTMify rejected order"
            );

            Err(TrackingError::RemoteRejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

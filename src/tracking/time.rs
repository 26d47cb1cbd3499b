#![allow(dead_code)]

//! Conversion from Brasília wall-clock time to the UTC timestamp strings
//! the UTMify API expects.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Wire format: second precision, no timezone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// América/São Paulo offset in seconds. Brazil abolished DST in 2019,
/// so a fixed UTC-3 holds year-round.
const SAO_PAULO_OFFSET_SECS: i32 = -3 * 3600;

fn sao_paulo() -> FixedOffset {
    FixedOffset::east_opt(SAO_PAULO_OFFSET_SECS).expect("offset within bounds")
}

/// Renders an offset-aware instant as a UTC timestamp string.
pub fn format_utc<Tz: TimeZone>(dt: DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format(TIMESTAMP_FORMAT).to_string()
}

/// Current instant as a UTC timestamp string.
pub fn utc_now() -> String {
    format_utc(Utc::now())
}

/// Interprets a naive wall-clock time as Brasília local time and renders
/// it as a UTC timestamp string.
pub fn local_to_utc(naive: NaiveDateTime) -> String {
    let dt = naive
        .and_local_timezone(sao_paulo())
        .single()
        .expect("fixed offsets are never ambiguous");
    format_utc(dt)
}

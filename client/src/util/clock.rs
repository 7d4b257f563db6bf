//! Wall-clock access for token expiry checks and local timestamps.
//!
//! The browser build reads `Date.now()`; native builds (SSR, tests) read the
//! system clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as i64)
    }
}

/// Format epoch milliseconds as an RFC 3339 UTC timestamp.
pub fn rfc3339_from_ms(ms: i64) -> Option<String> {
    let nanos = i128::from(ms) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()?
        .format(&Rfc3339)
        .ok()
}

/// Current time as an RFC 3339 UTC timestamp.
pub fn now_rfc3339() -> Option<String> {
    rfc3339_from_ms(now_ms())
}

/// Short `YYYY-MM-DD HH:MM` rendering of a backend timestamp for tables.
///
/// Anything that does not look like an ISO-8601 date-time is shown as-is.
pub fn display_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_owned();
    };
    match (raw.get(..10), raw.get(10..11), raw.get(11..16)) {
        (Some(date), Some("T" | " "), Some(clock)) => format!("{date} {clock}"),
        _ => raw.to_owned(),
    }
}

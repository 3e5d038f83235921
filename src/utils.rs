//! Small helpers shared by the widgets: timestamp formatting for message
//! metadata and a timer that works on every target.

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, TimeZone};

/// Formats a timestamp as a short calendar date, e.g. `Oct 18, 2026`.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%b %-d, %Y").to_string()
}

/// Formats the wall-clock time of a timestamp, e.g. `14:05`.
pub fn format_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%H:%M").to_string()
}

/// Describes `then` relative to `now`: `just now`, `5m ago`, `3h ago`,
/// `yesterday`, `4d ago`, and the calendar date beyond a week.
///
/// Timestamps in the future (clock skew between sender and viewer) read as
/// `just now`.
pub fn format_relative<Tz: TimeZone, Tz2: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz2>) -> String
where
    Tz::Offset: Display,
{
    let elapsed = now.clone().signed_duration_since(then.clone());
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if minutes < 1 {
        "just now".to_string()
    } else if hours < 1 {
        format!("{minutes}m ago")
    } else if days < 1 {
        format!("{hours}h ago")
    } else if days < 2 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format_date(then)
    }
}

/// Waits for `duration` using the tokio timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Waits for `duration` using `setTimeout`, since tokio's timer has no driver
/// in the browser.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

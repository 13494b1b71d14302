//! Wall-clock formatting and blocking sleep.

use std::time::Duration;

use chrono::Utc;

/// Current time in the HTTP date wire format (RFC 7231 IMF-fixdate),
/// e.g. `Tue, 10 Nov 2026 23:00:00 GMT`.
pub fn get_date_utc_string() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Block the calling thread for the given number of milliseconds.
///
/// Zero and negative durations return immediately.
pub fn sleep(millis: i64) {
    let Ok(millis) = u64::try_from(millis) else {
        return;
    };
    std::thread::sleep(Duration::from_millis(millis));
}

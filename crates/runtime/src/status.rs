//! HTTP status class checks.
//!
//! Each check tests a single 100-wide band. No bounds validation: codes
//! outside 100–599 simply fail every bucket.

/// Whether a status code is a success (2xx).
pub fn is_2xx(code: i32) -> bool {
    (200..300).contains(&code)
}

/// Whether a status code is a redirect (3xx).
pub fn is_3xx(code: i32) -> bool {
    (300..400).contains(&code)
}

/// Whether a status code is a client error (4xx).
pub fn is_4xx(code: i32) -> bool {
    (400..500).contains(&code)
}

/// Whether a status code is a server error (5xx).
pub fn is_5xx(code: i32) -> bool {
    (500..600).contains(&code)
}

//! Per-call nonce generation.
//!
//! A nonce is a 128-bit value rendered as 32 hex characters, hashed from
//! the process start time, the calling thread, the current time, a
//! strictly increasing per-process sequence number, and a random 63-bit
//! integer. The sequence number guarantees uniqueness within a process
//! even when two calls share a timestamp and a thread.

use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;

use chrono::Utc;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

static PROCESS_START_MS: Lazy<i64> = Lazy::new(now_millis);

// The only persistent state in the library.
static SEQUENCE: AtomicI64 = AtomicI64::new(0);

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate a unique request nonce.
pub fn get_nonce() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1;
    let entropy = rand::random::<u64>() >> 1;
    let message = format!(
        "{}-{:?}-{}-{}-{}",
        *PROCESS_START_MS,
        thread::current().id(),
        now_millis(),
        seq,
        entropy,
    );

    let digest = Sha256::digest(message.as_bytes());
    hex::encode(&digest[..16])
}

//! Per-request runtime options.
//!
//! `RuntimeOptions` is the configuration record generated clients hand to
//! the transport layer. This library carries the record and its wire form;
//! it never interprets the fields. Every field is optional: an absent
//! field is observably distinct from one set to its default value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RuntimeResult;
use crate::validate::Validate;

/// Transport-layer options attached to a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeOptions {
    pub autoretry: Option<bool>,
    #[serde(rename = "ignoreSSL")]
    pub ignore_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    pub max_attempts: Option<i32>,
    pub backoff_policy: Option<String>,
    /// Backoff period in seconds.
    pub backoff_period: Option<i32>,
    /// Read timeout in milliseconds.
    pub read_timeout: Option<i32>,
    /// Connect timeout in milliseconds.
    pub connect_timeout: Option<i32>,
    pub local_addr: Option<String>,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
    pub max_idle_conns: Option<i32>,
    pub socks5_proxy: Option<String>,
    pub socks5_net_work: Option<String>,
    pub keep_alive: Option<bool>,
}

impl RuntimeOptions {
    /// Create an options record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Fluent setters ====================
    //
    // Each setter replaces the field with a freshly owned value and
    // returns the updated record.

    pub fn with_autoretry(mut self, v: bool) -> Self {
        self.autoretry = Some(v);
        self
    }

    pub fn with_ignore_ssl(mut self, v: bool) -> Self {
        self.ignore_ssl = Some(v);
        self
    }

    pub fn with_key(mut self, v: impl Into<String>) -> Self {
        self.key = Some(v.into());
        self
    }

    pub fn with_cert(mut self, v: impl Into<String>) -> Self {
        self.cert = Some(v.into());
        self
    }

    pub fn with_ca(mut self, v: impl Into<String>) -> Self {
        self.ca = Some(v.into());
        self
    }

    pub fn with_max_attempts(mut self, v: i32) -> Self {
        self.max_attempts = Some(v);
        self
    }

    pub fn with_backoff_policy(mut self, v: impl Into<String>) -> Self {
        self.backoff_policy = Some(v.into());
        self
    }

    pub fn with_backoff_period(mut self, v: i32) -> Self {
        self.backoff_period = Some(v);
        self
    }

    pub fn with_read_timeout(mut self, v: i32) -> Self {
        self.read_timeout = Some(v);
        self
    }

    pub fn with_connect_timeout(mut self, v: i32) -> Self {
        self.connect_timeout = Some(v);
        self
    }

    pub fn with_local_addr(mut self, v: impl Into<String>) -> Self {
        self.local_addr = Some(v.into());
        self
    }

    pub fn with_http_proxy(mut self, v: impl Into<String>) -> Self {
        self.http_proxy = Some(v.into());
        self
    }

    pub fn with_https_proxy(mut self, v: impl Into<String>) -> Self {
        self.https_proxy = Some(v.into());
        self
    }

    pub fn with_no_proxy(mut self, v: impl Into<String>) -> Self {
        self.no_proxy = Some(v.into());
        self
    }

    pub fn with_max_idle_conns(mut self, v: i32) -> Self {
        self.max_idle_conns = Some(v);
        self
    }

    pub fn with_socks5_proxy(mut self, v: impl Into<String>) -> Self {
        self.socks5_proxy = Some(v.into());
        self
    }

    pub fn with_socks5_net_work(mut self, v: impl Into<String>) -> Self {
        self.socks5_net_work = Some(v.into());
        self
    }

    pub fn with_keep_alive(mut self, v: bool) -> Self {
        self.keep_alive = Some(v);
        self
    }
}

// Pretty-printed JSON, for diagnostics.
impl fmt::Display for RuntimeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => f.write_str("{}"),
        }
    }
}

impl Validate for RuntimeOptions {
    // All fields optional, no cross-field constraints.
    fn validate(&self) -> RuntimeResult<()> {
        Ok(())
    }
}

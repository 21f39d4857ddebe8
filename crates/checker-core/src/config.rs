//! Client Configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// What to do with a response whose request has since been superseded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponses {
    /// Whichever response settles last writes the display
    #[default]
    Apply,

    /// Only the most recently issued request of each handler may write
    Discard,
}

/// Payment endpoint configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Origin the payment path is resolved against. `None` means the page
    /// origin, filled in by the host.
    #[serde(default)]
    pub base: Option<String>,

    /// Path of the payment-creation endpoint
    #[serde(default = "default_payment_path")]
    pub path: String,

    /// Top-up amount, sent as the `amount` query parameter
    #[serde(default = "default_amount")]
    pub amount: Decimal,
}

fn default_payment_path() -> String {
    "/paypal/makePayment".into()
}

fn default_amount() -> Decimal {
    dec!(1.00)
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base: None,
            path: default_payment_path(),
            amount: default_amount(),
        }
    }
}

impl PaymentConfig {
    /// Amount as it appears on the wire, always two decimals
    pub fn amount_param(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// Full payment-creation URL, query string included
    pub fn url(&self) -> String {
        let base = self.base.as_deref().unwrap_or("").trim_end_matches('/');
        format!("{}{}?amount={}", base, self.path, self.amount_param())
    }
}

/// Configuration for the syntax checker client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the check/stats service
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default)]
    pub payment: PaymentConfig,

    #[serde(default)]
    pub stale_responses: StaleResponses,

    /// Expose the quota reset control
    #[serde(default)]
    pub allow_reset: bool,
}

fn default_api_base() -> String {
    "http://localhost:2424/api".into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            payment: PaymentConfig::default(),
            stale_responses: StaleResponses::default(),
            allow_reset: false,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_payment_base(mut self, base: impl Into<String>) -> Self {
        self.payment.base = Some(base.into());
        self
    }

    pub const fn with_amount(mut self, amount: Decimal) -> Self {
        self.payment.amount = amount;
        self
    }

    pub const fn with_stale_responses(mut self, policy: StaleResponses) -> Self {
        self.stale_responses = policy;
        self
    }

    pub const fn with_reset(mut self, allow: bool) -> Self {
        self.allow_reset = allow;
        self
    }

    /// Build from a key/value source. Unknown or absent keys keep defaults.
    ///
    /// Keys: `CHECKER_API_BASE`, `CHECKER_PAYMENT_BASE`,
    /// `CHECKER_PAYMENT_PATH`, `CHECKER_PAYMENT_AMOUNT`,
    /// `CHECKER_DISCARD_STALE`, `CHECKER_ALLOW_RESET`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup("CHECKER_API_BASE") {
            config.api_base = base;
        }
        if let Some(base) = lookup("CHECKER_PAYMENT_BASE") {
            config.payment.base = Some(base);
        }
        if let Some(path) = lookup("CHECKER_PAYMENT_PATH") {
            config.payment.path = path;
        }
        if let Some(amount) = lookup("CHECKER_PAYMENT_AMOUNT") {
            config.payment.amount = amount
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid payment amount: {amount}")))?;
        }
        if lookup("CHECKER_DISCARD_STALE").is_some_and(|v| is_truthy(&v)) {
            config.stale_responses = StaleResponses::Discard;
        }
        config.allow_reset = lookup("CHECKER_ALLOW_RESET").is_some_and(|v| is_truthy(&v));

        config.validate()?;
        Ok(config)
    }

    /// Create from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "api base must be an absolute http(s) URL: {}",
                self.api_base
            )));
        }
        if !self.payment.path.starts_with('/') {
            return Err(ClientError::Config(format!(
                "payment path must start with '/': {}",
                self.payment.path
            )));
        }
        if self.payment.amount <= Decimal::ZERO {
            return Err(ClientError::Config(format!(
                "payment amount must be positive: {}",
                self.payment.amount
            )));
        }
        Ok(())
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), name)
    }

    pub fn check_url(&self) -> String {
        self.endpoint("check")
    }

    pub fn stats_url(&self) -> String {
        self.endpoint("stats")
    }

    pub fn reset_url(&self) -> String {
        self.endpoint("reset")
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

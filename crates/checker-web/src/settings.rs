//! Build-time Configuration
//!
//! The browser has no process environment, so settings are baked in at
//! compile time through `CHECKER_*` variables. The payment endpoint falls
//! back to the page origin.

use checker_core::ClientConfig;

/// Resolve the client configuration for this page
pub fn load() -> ClientConfig {
    let config = ClientConfig::from_lookup(build_var).unwrap_or_else(|e| {
        tracing::error!("Invalid build configuration, using defaults: {}", e);
        ClientConfig::default()
    });

    if config.payment.base.is_some() {
        return config;
    }
    match page_origin() {
        Some(origin) => config.with_payment_base(origin),
        None => config,
    }
}

/// Compile-time value of a configuration key
fn build_var(key: &str) -> Option<String> {
    let value = match key {
        "CHECKER_API_BASE" => option_env!("CHECKER_API_BASE"),
        "CHECKER_PAYMENT_BASE" => option_env!("CHECKER_PAYMENT_BASE"),
        "CHECKER_PAYMENT_PATH" => option_env!("CHECKER_PAYMENT_PATH"),
        "CHECKER_PAYMENT_AMOUNT" => option_env!("CHECKER_PAYMENT_AMOUNT"),
        "CHECKER_DISCARD_STALE" => option_env!("CHECKER_DISCARD_STALE"),
        "CHECKER_ALLOW_RESET" => option_env!("CHECKER_ALLOW_RESET"),
        _ => None,
    };
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

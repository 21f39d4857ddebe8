//! # checker-client
//!
//! HTTP implementation of [`CheckerApi`] on top of `reqwest`, usable from
//! the browser (WASM) and from native code.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checker_client::HttpCheckerApi;
//! use checker_core::{ClientConfig, CodeSubmission, CheckerApi};
//!
//! let api = HttpCheckerApi::new(ClientConfig::default())?;
//! let verdict = api.check(&CodeSubmission::new("int a = 5;")).await?;
//! ```

pub mod http;

pub use http::HttpCheckerApi;

// Re-export core types for convenience
pub use checker_core::{
    CheckResult, CheckerApi, ClientConfig, ClientError, CodeSubmission, PaymentReply,
    QuotaSnapshot, Result,
};

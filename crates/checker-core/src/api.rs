//! Remote Service Strategy
//!
//! One trait over the three remote collaborators (syntax check, quota
//! status, payment creation) so the workflow runs the same against the
//! real HTTP client and the scripted test double.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checker_core::{CheckerApi, CodeSubmission};
//!
//! let api = HttpCheckerApi::new(config)?;
//! let verdict = api.check(&CodeSubmission::new("int a = 5;")).await?;
//! ```

use async_trait::async_trait;

use crate::config::PaymentConfig;
use crate::error::Result;
use crate::model::{CheckResult, CodeSubmission, PaymentReply, QuotaSnapshot};

/// Remote endpoints consumed by the client
///
/// Futures are not `Send`: the browser host is single-threaded.
#[async_trait(?Send)]
pub trait CheckerApi {
    /// `POST {api_base}/check`. A non-success status with a `message` body
    /// is a server verdict, returned as [`CheckResult::Rejected`].
    async fn check(&self, submission: &CodeSubmission) -> Result<CheckResult>;

    /// `GET {api_base}/stats`. Any non-success status is an error.
    async fn stats(&self) -> Result<QuotaSnapshot>;

    /// `POST {payment.path}?amount=...` with an empty body. The reply is
    /// returned whatever its status; only transport failures are errors.
    async fn create_payment(&self, payment: &PaymentConfig) -> Result<PaymentReply>;

    /// `POST {api_base}/reset`
    async fn reset_quota(&self) -> Result<()>;
}

//! HTTP Service Client
//!
//! Talks to the check/stats service and the payment endpoint. A response
//! body that does not match the expected JSON shape is a decode error; the
//! caller decides which fixed message that becomes.

use async_trait::async_trait;
use checker_core::{
    CheckResult, CheckerApi, ClientConfig, ClientError, CodeSubmission, PaymentReply,
    QuotaSnapshot, Result,
    config::PaymentConfig,
    model::{RejectionBody, VerdictBody},
};
use reqwest::{Client, header::CONTENT_TYPE};

/// `reqwest`-backed service client
#[derive(Clone)]
pub struct HttpCheckerApi {
    client: Client,
    config: ClientConfig,
}

impl HttpCheckerApi {
    /// Create with a fresh `reqwest` client
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_client(Client::new(), config)
    }

    /// Create around an existing `reqwest` client
    pub fn with_client(client: Client, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[allow(clippy::needless_pass_by_value)]
fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl CheckerApi for HttpCheckerApi {
    async fn check(&self, submission: &CodeSubmission) -> Result<CheckResult> {
        let response = self
            .client
            .post(self.config.check_url())
            .json(submission)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if status.is_success() {
            let verdict: VerdictBody = serde_json::from_str(&body)?;
            Ok(CheckResult::Verdict(verdict.result))
        } else {
            tracing::debug!("Check rejected with status {}", status);
            let rejection: RejectionBody = serde_json::from_str(&body)?;
            Ok(CheckResult::Rejected(rejection.message))
        }
    }

    async fn stats(&self) -> Result<QuotaSnapshot> {
        let response = self
            .client
            .get(self.config.stats_url())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_payment(&self, payment: &PaymentConfig) -> Result<PaymentReply> {
        let response = self
            .client
            .post(payment.url())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok(PaymentReply::new(status, body))
    }

    async fn reset_quota(&self) -> Result<()> {
        let response = self
            .client
            .post(self.config.reset_url())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(status.as_u16()))
        }
    }
}

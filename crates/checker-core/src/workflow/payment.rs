//! Payment Initiator

use crate::api::CheckerApi;
use crate::error::Operation;
use crate::host::{Browser, ViewStore};
use crate::model::PaymentApproval;

use super::Workflow;

/// What a "buy more calls" click ended in
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Browser was sent to the approval URL
    Redirected(String),

    /// No navigation; this message was alerted
    Alerted(&'static str),
}

impl<A, S, B> Workflow<A, S, B>
where
    A: CheckerApi,
    S: ViewStore,
    B: Browser,
{
    /// Request an approval URL and hand the page over to it.
    ///
    /// The page state is not touched, so the user can click again.
    pub async fn buy_calls(&self) -> PaymentOutcome {
        let approval = self
            .api
            .create_payment(&self.config.payment)
            .await
            .inspect(|reply| {
                tracing::debug!("Payment endpoint answered {}: {}", reply.status, reply.body);
            })
            .and_then(PaymentApproval::from_reply)
            .and_then(|approval| {
                self.browser.navigate(approval.url())?;
                Ok(approval)
            });

        match approval {
            Ok(approval) => {
                tracing::info!("Redirecting to payment approval");
                PaymentOutcome::Redirected(approval.into_url())
            }
            Err(e) => {
                tracing::error!("Payment initiation failed: {}", e);
                let message = e.user_message(Operation::Payment);
                self.browser.alert(message);
                PaymentOutcome::Alerted(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal_macros::dec;

    use crate::config::ClientConfig;
    use crate::error::{ClientError, PAYMENT_ERROR, PAYMENT_FAILED};
    use crate::mock::{ApiCall, RecordingBrowser, ScriptedApi};
    use crate::model::PaymentReply;
    use crate::state::ViewState;

    use super::*;

    fn workflow(api: ScriptedApi) -> Workflow<ScriptedApi, RefCell<ViewState>, RecordingBrowser> {
        Workflow::new(
            api,
            RefCell::new(ViewState::new()),
            RecordingBrowser::default(),
            ClientConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_approval_url_navigates_exactly() {
        let api = ScriptedApi::new()
            .with_payment(Ok(PaymentReply::new(200, "https://pay.example/approve/abc")));
        let wf = workflow(api);

        let outcome = wf.buy_calls().await;

        assert_eq!(
            outcome,
            PaymentOutcome::Redirected("https://pay.example/approve/abc".into())
        );
        assert_eq!(
            wf.browser().location(),
            Some("https://pay.example/approve/abc".to_string())
        );
        assert!(wf.browser().alerts().is_empty());
        assert_eq!(wf.api().calls(), vec![ApiCall::Payment("1.00".into())]);
    }

    #[tokio::test]
    async fn test_non_url_body_alerts_without_navigation() {
        let wf = workflow(ScriptedApi::new().with_payment(Ok(PaymentReply::new(200, "error: declined"))));

        let outcome = wf.buy_calls().await;

        assert_eq!(outcome, PaymentOutcome::Alerted(PAYMENT_FAILED));
        assert_eq!(wf.browser().location(), None);
        assert_eq!(wf.browser().alerts(), vec![PAYMENT_FAILED.to_string()]);
        assert_eq!(wf.store().read(), ViewState::new());
    }

    #[tokio::test]
    async fn test_error_status_alerts_even_with_url_body() {
        let wf = workflow(
            ScriptedApi::new().with_payment(Ok(PaymentReply::new(502, "https://pay.example/x"))),
        );
        assert_eq!(wf.buy_calls().await, PaymentOutcome::Alerted(PAYMENT_FAILED));
        assert_eq!(wf.browser().location(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_alerts_generic_message() {
        let wf = workflow(
            ScriptedApi::new().with_payment(Err(ClientError::Transport("offline".into()))),
        );
        assert_eq!(wf.buy_calls().await, PaymentOutcome::Alerted(PAYMENT_ERROR));
        assert_eq!(wf.browser().alerts(), vec![PAYMENT_ERROR.to_string()]);
    }

    #[tokio::test]
    async fn test_navigation_refused_alerts_generic_message() {
        let wf = Workflow::new(
            ScriptedApi::new().with_payment(Ok(PaymentReply::new(200, "https://pay.example/a"))),
            RefCell::new(ViewState::new()),
            RecordingBrowser::refusing(),
            ClientConfig::default(),
        );
        assert_eq!(wf.buy_calls().await, PaymentOutcome::Alerted(PAYMENT_ERROR));
    }

    #[tokio::test]
    async fn test_retry_after_failure_and_configured_amount() {
        let api = ScriptedApi::new().with_payment(Ok(PaymentReply::new(200, "declined")));
        let wf = Workflow::new(
            api,
            RefCell::new(ViewState::new()),
            RecordingBrowser::default(),
            ClientConfig::default().with_amount(dec!(5)),
        );

        wf.buy_calls().await;
        wf.api().set_payment(Ok(PaymentReply::new(200, "https://pay.example/approve/xyz")));
        wf.buy_calls().await;

        assert_eq!(
            wf.api().calls(),
            vec![ApiCall::Payment("5.00".into()), ApiCall::Payment("5.00".into())]
        );
        assert_eq!(
            wf.browser().location(),
            Some("https://pay.example/approve/xyz".to_string())
        );
    }
}

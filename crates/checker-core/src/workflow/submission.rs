//! Submission Controller

use crate::api::CheckerApi;
use crate::host::{Browser, DefaultAction, ViewStore};
use crate::model::CodeSubmission;
use crate::state::ViewState;

use super::Workflow;

impl<A, S, B> Workflow<A, S, B>
where
    A: CheckerApi,
    S: ViewStore,
    B: Browser,
{
    /// Synchronous part of a submit event: suppress the default action
    /// first, then capture the trimmed input.
    pub fn accept(&self, event: &impl DefaultAction, raw: &str) -> CodeSubmission {
        event.prevent_default();
        CodeSubmission::new(raw)
    }

    /// Run one check and then exactly one quota refresh.
    ///
    /// Empty input is answered locally: no request and no refresh.
    pub async fn submit(&self, submission: CodeSubmission) {
        let ticket = self.store.update(ViewState::begin_check);

        if submission.is_empty() {
            self.store.update(ViewState::reject_empty);
            return;
        }

        tracing::debug!("Checking {} bytes of code", submission.as_str().len());
        let outcome = self.api.check(&submission).await;
        if let Err(ref e) = outcome {
            tracing::error!("Check request failed: {}", e);
        }

        let policy = self.config.stale_responses;
        if !self
            .store
            .update(|state| state.apply_check(ticket, &outcome, policy))
        {
            tracing::debug!("Discarded superseded check result (ticket {})", ticket.value());
        }

        self.refresh_quota().await;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::mock::{ApiCall, Flag, RecordingBrowser, ScriptedApi};
    use crate::model::{CheckResult, QuotaSnapshot};
    use crate::state::{StatsView, ViewState};

    use super::*;

    type TestWorkflow = Workflow<ScriptedApi, RefCell<ViewState>, RecordingBrowser>;

    fn workflow(api: ScriptedApi) -> TestWorkflow {
        Workflow::new(
            api,
            RefCell::new(ViewState::new()),
            RecordingBrowser::default(),
            ClientConfig::default(),
        )
    }

    #[test]
    fn test_accept_prevents_default_before_any_work() {
        let wf = workflow(ScriptedApi::new());
        let event = Flag::default();

        let submission = wf.accept(&event, "  int a = 5;  ");
        assert!(event.is_set());
        assert_eq!(submission.as_str(), "int a = 5;");
        assert!(wf.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_request() {
        for raw in ["", "   ", "\n\t  \n"] {
            let wf = workflow(ScriptedApi::new());
            wf.submit(CodeSubmission::new(raw)).await;

            assert_eq!(wf.store().read().result, "Please enter some code.");
            assert!(wf.api().calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_verdict_is_labelled_then_quota_refreshed() {
        let api = ScriptedApi::new()
            .with_check(Ok(CheckResult::Verdict("OK".into())))
            .with_stats(Ok(QuotaSnapshot::new(5, 3)));
        let wf = workflow(api);

        wf.submit(CodeSubmission::new("int a = 5;")).await;

        let state = wf.store().read();
        assert_eq!(state.result, "Syntax Check Result: OK");
        assert_eq!(state.stats, StatsView::Summary(QuotaSnapshot::new(5, 3)));
        assert_eq!(
            wf.api().calls(),
            vec![ApiCall::Check("int a = 5;".into()), ApiCall::Stats]
        );
    }

    #[tokio::test]
    async fn test_server_message_shown_verbatim() {
        let api = ScriptedApi::new()
            .with_check(Ok(CheckResult::Rejected("bad token".into())))
            .with_stats(Ok(QuotaSnapshot::new(6, 4)));
        let wf = workflow(api);

        wf.submit(CodeSubmission::new("int a 5;")).await;

        assert_eq!(wf.store().read().result, "bad token");
        assert_eq!(wf.api().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_still_refreshes_quota() {
        let api = ScriptedApi::new()
            .with_check(Err(ClientError::Transport("connection refused".into())))
            .with_stats(Err(ClientError::Transport("connection refused".into())));
        let wf = workflow(api);

        wf.submit(CodeSubmission::new("x = 1;")).await;

        let state = wf.store().read();
        assert_eq!(state.result, "An error occurred while connecting to the server.");
        assert_eq!(state.stats, StatsView::Unavailable);
        assert_eq!(
            wf.api().calls(),
            vec![ApiCall::Check("x = 1;".into()), ApiCall::Stats]
        );
    }

    #[tokio::test]
    async fn test_exhausted_quota_after_check_shows_affordance() {
        let api = ScriptedApi::new()
            .with_check(Ok(CheckResult::Rejected(
                "You have used up all your API calls. Please purchase more API calls.".into(),
            )))
            .with_stats(Ok(QuotaSnapshot::new(10, 0)));
        let wf = workflow(api);

        wf.submit(CodeSubmission::new("int a = 5;")).await;
        assert!(wf.store().read().pay_visible);
    }

    #[tokio::test]
    async fn test_check_is_never_gated_on_quota() {
        let api = ScriptedApi::new()
            .with_check(Ok(CheckResult::Verdict("Valid".into())))
            .with_stats(Ok(QuotaSnapshot::new(10, 0)));
        let wf = workflow(api);

        wf.refresh_quota().await;
        assert!(wf.store().read().pay_visible);

        wf.submit(CodeSubmission::new("int a = 5;")).await;
        assert!(wf.api().calls().contains(&ApiCall::Check("int a = 5;".into())));
    }
}

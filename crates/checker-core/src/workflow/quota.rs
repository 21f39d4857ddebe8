//! Quota Monitor

use crate::api::CheckerApi;
use crate::host::{Browser, ViewStore};
use crate::state::ViewState;

use super::Workflow;

impl<A, S, B> Workflow<A, S, B>
where
    A: CheckerApi,
    S: ViewStore,
    B: Browser,
{
    /// Re-read the server counters and re-render them.
    ///
    /// Idempotent, and never fails: any error becomes the "unavailable"
    /// summary with the payment affordance left as it was.
    pub async fn refresh_quota(&self) {
        let ticket = self.store.update(ViewState::begin_quota);

        let outcome = self.api.stats().await;
        match outcome {
            Ok(ref snapshot) => tracing::debug!(
                "Quota: {} used, {} remaining",
                snapshot.total_calls,
                snapshot.remaining_calls
            ),
            Err(ref e) => tracing::warn!("Could not fetch stats: {}", e),
        }

        let policy = self.config.stale_responses;
        if !self
            .store
            .update(|state| state.apply_quota(ticket, &outcome, policy))
        {
            tracing::debug!("Discarded superseded quota snapshot (ticket {})", ticket.value());
        }
    }

    /// Ask the quota service to reset the call window, then refresh once.
    pub async fn reset_quota(&self) {
        if let Err(e) = self.api.reset_quota().await {
            tracing::warn!("Quota reset failed: {}", e);
        }
        self.refresh_quota().await;
    }
}

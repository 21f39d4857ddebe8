//! Application State
//!
//! The whole visible state of the page: result text, quota summary and
//! payment affordance visibility. Handlers change it only through the pure
//! methods below; the host renders whatever it holds.

use crate::config::StaleResponses;
use crate::error::{ClientError, EMPTY_INPUT, Operation, STATS_UNAVAILABLE};
use crate::model::{CheckResult, QuotaSnapshot};

/// Request token, increasing per handler kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Content of the quota region
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatsView {
    #[default]
    Blank,
    Summary(QuotaSnapshot),
    Unavailable,
}

impl StatsView {
    /// Lines to render, top to bottom
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Blank => Vec::new(),
            Self::Summary(snapshot) => snapshot.summary_lines().to_vec(),
            Self::Unavailable => vec![STATS_UNAVAILABLE.to_string()],
        }
    }
}

/// Everything the page displays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Result region text
    pub result: String,

    /// Quota region
    pub stats: StatsView,

    /// Whether the "buy more calls" affordance is shown
    pub pay_visible: bool,

    last_check: Ticket,
    last_quota: Ticket,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission: clear both regions and issue a check ticket.
    pub fn begin_check(&mut self) -> Ticket {
        self.result.clear();
        self.stats = StatsView::Blank;
        self.last_check = self.last_check.next();
        self.last_check
    }

    /// Empty input short-circuit
    pub fn reject_empty(&mut self) {
        self.result = EMPTY_INPUT.to_string();
    }

    /// Record a check outcome. Returns `false` if the write was discarded.
    ///
    /// A transport failure also marks the quota region unavailable.
    pub fn apply_check(
        &mut self,
        ticket: Ticket,
        outcome: &Result<CheckResult, ClientError>,
        policy: StaleResponses,
    ) -> bool {
        if is_stale(ticket, self.last_check, policy) {
            return false;
        }
        match outcome {
            Ok(result) => self.result = result.display(),
            Err(err) => {
                self.result = err.user_message(Operation::Check).to_string();
                self.stats = StatsView::Unavailable;
            }
        }
        true
    }

    /// Issue a quota ticket
    pub fn begin_quota(&mut self) -> Ticket {
        self.last_quota = self.last_quota.next();
        self.last_quota
    }

    /// Record a quota outcome. Returns `false` if the write was discarded.
    ///
    /// On failure the affordance flag keeps whatever value it had. A stats
    /// outage therefore neither shows nor hides the payment control.
    pub fn apply_quota(
        &mut self,
        ticket: Ticket,
        outcome: &Result<QuotaSnapshot, ClientError>,
        policy: StaleResponses,
    ) -> bool {
        if is_stale(ticket, self.last_quota, policy) {
            return false;
        }
        match outcome {
            Ok(snapshot) => {
                self.stats = StatsView::Summary(*snapshot);
                self.pay_visible = snapshot.is_exhausted();
            }
            Err(_) => self.stats = StatsView::Unavailable,
        }
        true
    }
}

fn is_stale(ticket: Ticket, latest: Ticket, policy: StaleResponses) -> bool {
    policy == StaleResponses::Discard && ticket != latest
}

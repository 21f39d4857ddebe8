//! Scripted Collaborators
//!
//! In-memory stand-ins for the remote services and the browser, for tests
//! and offline demos. Replies are scripted up front and every call is
//! recorded in order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::CheckerApi;
use crate::config::PaymentConfig;
use crate::error::{ClientError, Result};
use crate::host::{Browser, DefaultAction};
use crate::model::{CheckResult, CodeSubmission, PaymentReply, QuotaSnapshot};

/// A call observed by [`ScriptedApi`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Check(String),
    Stats,
    /// Carries the amount parameter as sent
    Payment(String),
    Reset,
}

/// Remote services with scripted replies
///
/// Check replies are consumed in order; stats, payment and reset replies
/// stay in place until replaced, like unchanged server state.
pub struct ScriptedApi {
    checks: RefCell<VecDeque<Result<CheckResult>>>,
    stats: RefCell<Result<QuotaSnapshot>>,
    payment: RefCell<Result<PaymentReply>>,
    reset: RefCell<Result<()>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedApi {
    pub fn new() -> Self {
        let unscripted = || ClientError::Transport("no scripted reply".into());
        Self {
            checks: RefCell::new(VecDeque::new()),
            stats: RefCell::new(Err(unscripted())),
            payment: RefCell::new(Err(unscripted())),
            reset: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Queue a check reply
    pub fn with_check(self, reply: Result<CheckResult>) -> Self {
        self.checks.borrow_mut().push_back(reply);
        self
    }

    pub fn with_stats(self, reply: Result<QuotaSnapshot>) -> Self {
        self.set_stats(reply);
        self
    }

    pub fn with_payment(self, reply: Result<PaymentReply>) -> Self {
        self.set_payment(reply);
        self
    }

    pub fn set_stats(&self, reply: Result<QuotaSnapshot>) {
        *self.stats.borrow_mut() = reply;
    }

    pub fn set_payment(&self, reply: Result<PaymentReply>) {
        *self.payment.borrow_mut() = reply;
    }

    pub fn set_reset(&self, reply: Result<()>) {
        *self.reset.borrow_mut() = reply;
    }

    /// Every call so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl CheckerApi for ScriptedApi {
    async fn check(&self, submission: &CodeSubmission) -> Result<CheckResult> {
        self.record(ApiCall::Check(submission.as_str().to_string()));
        self.checks
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted reply".into())))
    }

    async fn stats(&self) -> Result<QuotaSnapshot> {
        self.record(ApiCall::Stats);
        self.stats.borrow().clone()
    }

    async fn create_payment(&self, payment: &PaymentConfig) -> Result<PaymentReply> {
        self.record(ApiCall::Payment(payment.amount_param()));
        self.payment.borrow().clone()
    }

    async fn reset_quota(&self) -> Result<()> {
        self.record(ApiCall::Reset);
        self.reset.borrow().clone()
    }
}

/// Browser that records alerts and navigation instead of performing them
#[derive(Default)]
pub struct RecordingBrowser {
    alerts: RefCell<Vec<String>>,
    location: RefCell<Option<String>>,
    refuse_navigation: bool,
}

impl RecordingBrowser {
    /// A browser whose navigation always fails
    pub fn refusing() -> Self {
        Self {
            refuse_navigation: true,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Last navigation target, if any
    pub fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, url: &str) -> Result<()> {
        if self.refuse_navigation {
            return Err(ClientError::Navigation(format!("blocked: {url}")));
        }
        *self.location.borrow_mut() = Some(url.to_string());
        Ok(())
    }
}

/// Event stand-in that remembers whether its default was prevented
#[derive(Default)]
pub struct Flag(Cell<bool>);

impl Flag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

impl DefaultAction for Flag {
    fn prevent_default(&self) {
        self.0.set(true);
    }
}

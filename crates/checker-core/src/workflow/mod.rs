//! Request Workflow
//!
//! The three user-facing handlers, one file each:
//!
//! - [`submission`]: check syntax, then refresh the quota
//! - [`quota`]: fetch counters, render summary and affordance
//! - [`payment`]: obtain an approval URL and leave the page
//!
//! Each handler is a single attempt with no retry and no cancellation. Every
//! failure is caught here and turned into display state or an alert.

mod payment;
mod quota;
mod submission;

pub use payment::PaymentOutcome;

use crate::api::CheckerApi;
use crate::config::ClientConfig;
use crate::host::{Browser, ViewStore};

/// Handlers bound to one API, one state store and one browser
pub struct Workflow<A, S, B> {
    api: A,
    store: S,
    browser: B,
    config: ClientConfig,
}

impl<A, S, B> Workflow<A, S, B>
where
    A: CheckerApi,
    S: ViewStore,
    B: Browser,
{
    pub const fn new(api: A, store: S, browser: B, config: ClientConfig) -> Self {
        Self {
            api,
            store,
            browser,
            config,
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn browser(&self) -> &B {
        &self.browser
    }
}

//! # checker-core
//!
//! Quota-aware syntax check workflow, independent of any display surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Workflow                              │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │ Submission  │──│   Quota     │  │   Payment           │  │
//! │  │ Controller  │  │   Monitor   │  │   Initiator         │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! │         │                │                   │               │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │ CheckerApi  │  │  ViewStore  │  │   Browser           │  │
//! │  │ (Strategy)  │  │ (ViewState) │  │ (alert / navigate)  │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never write to the screen directly. They apply pure updates to a
//! [`ViewState`] held by a [`ViewStore`], and the host renders that state.
//! Every failure is converted to a user-facing message at the handler
//! boundary, so nothing escapes to the host's uncaught-error path.

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod mock;
pub mod model;
pub mod state;
pub mod workflow;

pub use api::CheckerApi;
pub use config::{ClientConfig, PaymentConfig, StaleResponses};
pub use error::{ClientError, Operation, Result};
pub use host::{Browser, DefaultAction, ViewStore};
pub use model::{CheckResult, CodeSubmission, PaymentApproval, PaymentReply, QuotaSnapshot};
pub use state::{StatsView, Ticket, ViewState};
pub use workflow::{PaymentOutcome, Workflow};

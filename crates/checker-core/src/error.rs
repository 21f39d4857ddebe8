//! Error Types
//!
//! Every failure a handler can observe, plus the single mapping from a
//! failure to the text the user sees.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Shown when the trimmed input is empty.
pub const EMPTY_INPUT: &str = "Please enter some code.";

/// Prefix for a successful verdict.
pub const RESULT_LABEL: &str = "Syntax Check Result: ";

/// Check request could not be completed or its body could not be read.
pub const CHECK_UNREACHABLE: &str = "An error occurred while connecting to the server.";

/// Quota status could not be fetched.
pub const STATS_UNAVAILABLE: &str = "Could not fetch stats.";

/// Payment endpoint answered, but not with an approval URL.
pub const PAYMENT_FAILED: &str = "Payment creation failed. Please try again.";

/// Payment request never produced an answer.
pub const PAYMENT_ERROR: &str = "An error occurred while initiating the payment.";

/// Quota reset did not go through.
pub const RESET_FAILED: &str = "Could not reset API calls.";

/// The handler a failure happened in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Check,
    Stats,
    Payment,
    Reset,
}

/// Client error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Nothing left after trimming the input
    #[error("Empty input")]
    EmptyInput,

    /// Request could not be sent or no response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Non-success status without a usable body
    #[error("Unexpected status {0}")]
    Status(u16),

    /// Payment endpoint did not return an approval URL
    #[error("Payment rejected (status {status}): {body}")]
    PaymentRejected { status: u16, body: String },

    /// Browser refused to change location
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Check if the user can reasonably try again
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status(_) | Self::PaymentRejected { .. }
        )
    }

    /// Convert to the fixed message shown for this failure in `op`.
    ///
    /// Server verdicts never pass through here: a rejected check carries its
    /// own message and is displayed verbatim.
    pub const fn user_message(&self, op: Operation) -> &'static str {
        match (self, op) {
            (Self::EmptyInput, _) => EMPTY_INPUT,
            (Self::PaymentRejected { .. }, _) => PAYMENT_FAILED,
            (_, Operation::Check) => CHECK_UNREACHABLE,
            (_, Operation::Stats) => STATS_UNAVAILABLE,
            (_, Operation::Payment) => PAYMENT_ERROR,
            (_, Operation::Reset) => RESET_FAILED,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

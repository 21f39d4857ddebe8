//! Domain Models

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, RESULT_LABEL, Result};

/// Source text to validate, already trimmed
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeSubmission {
    code: String,
}

impl CodeSubmission {
    /// Build from raw text-field content
    pub fn new(raw: &str) -> Self {
        Self {
            code: raw.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }
}

/// Outcome of a check request that reached the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckResult {
    /// Success status, `result` field
    Verdict(String),

    /// Non-success status, `message` field
    Rejected(String),
}

impl CheckResult {
    /// Text for the result region
    pub fn display(&self) -> String {
        match self {
            Self::Verdict(verdict) => format!("{RESULT_LABEL}{verdict}"),
            Self::Rejected(message) => message.clone(),
        }
    }
}

/// Success body of the check endpoint
#[derive(Debug, Deserialize)]
pub struct VerdictBody {
    pub result: String,
}

/// Error body of the check endpoint
#[derive(Debug, Deserialize)]
pub struct RejectionBody {
    pub message: String,
}

/// Server-side usage counters, read-only on the client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSnapshot {
    pub total_calls: u32,
    pub remaining_calls: u32,
}

impl QuotaSnapshot {
    pub const fn new(total_calls: u32, remaining_calls: u32) -> Self {
        Self {
            total_calls,
            remaining_calls,
        }
    }

    /// Exactly zero calls left. Not a threshold.
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_calls == 0
    }

    /// The two-line quota summary
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Total API Calls: {}", self.total_calls),
            format!("Remaining Calls: {}", self.remaining_calls),
        ]
    }
}

/// Raw answer of the payment endpoint, body read as plain text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentReply {
    pub status: u16,
    pub body: String,
}

impl PaymentReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Approval URL issued by the payment endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentApproval {
    url: String,
}

impl PaymentApproval {
    /// Accept a reply only if the status is a success and the body looks
    /// like an absolute URL.
    pub fn from_reply(reply: PaymentReply) -> Result<Self> {
        if reply.is_success() && reply.body.starts_with("http") {
            Ok(Self { url: reply.body })
        } else {
            Err(ClientError::PaymentRejected {
                status: reply.status,
                body: reply.body,
            })
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

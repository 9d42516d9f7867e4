// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::recurrence::UnknownRecurrence;

/// Failure talking to the backend. Every variant renders to a single
/// human readable message; callers do not branch on the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("Network response was not ok ({status}) from {url}")]
    Status { url: String, status: u16 },
    #[error("invalid JSON from {url}: {message}")]
    Parse { url: String, message: String },
}

impl ClientError {
    pub fn transport(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ClientError::Transport {
            url: url.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ClientError::Parse {
            url: url.into(),
            message: err.to_string(),
        }
    }
}

/// Rejected form input, or a failed submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be zero or more")]
    Negative { field: &'static str },
    #[error("{field} takes at most two decimal places")]
    TooPrecise { field: &'static str },
    #[error("{field}: invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("no savings account named '{0}'")]
    UnknownAccount(String),
    #[error(transparent)]
    Recurrence(#[from] UnknownRecurrence),
    #[error("{0}")]
    TransactionType(String),
    #[error(transparent)]
    Submit(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page is still loading")]
    Loading,
    #[error("page failed to load: {0}")]
    Failed(String),
    #[error("page has been unmounted")]
    Unmounted,
}

/// Anything a page operation can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Page(#[from] PageError),
}

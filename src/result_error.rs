// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT

use tokio::time::error::Elapsed;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A structured error for cases where a plain string is insufficient.
/// Using it is a convention; the error slot of `Result` accepts any type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("code: {code}, reason: {reason}")]
pub struct ResultError {
    /// A numeric code signifying the type of error, defined by the application
    pub code: i32,
    /// An internal, technical description of the error
    pub reason: String,
    /// A user-friendly description of the error
    pub message: String,
}

impl ResultError {
    pub fn new(code: i32, reason: impl Into<String>, message: impl Into<String>) -> Self {
        ResultError {
            code,
            reason: reason.into(),
            message: message.into(),
        }
    }

    fn general(category: &str, value: String) -> Self {
        ResultError {
            code: -1,
            reason: format!("{category}: {value}"),
            message: value,
        }
    }
}

impl From<String> for ResultError {
    fn from(value: String) -> Self {
        ResultError::general("GeneralError", value)
    }
}

impl From<&str> for ResultError {
    fn from(value: &str) -> Self {
        ResultError::from(value.to_string())
    }
}

impl From<std::io::Error> for ResultError {
    fn from(value: std::io::Error) -> Self {
        ResultError::general("IO Error", value.to_string())
    }
}

impl From<Elapsed> for ResultError {
    fn from(value: Elapsed) -> Self {
        ResultError::general("Operation timeout", value.to_string())
    }
}

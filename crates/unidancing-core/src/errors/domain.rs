// ABOUTME: Domain parsing errors for CMS-sourced exercise content
// ABOUTME: Names the offending field and value so callers can report invalid content precisely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised while turning external content into domain types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string did not match any value of an enumerated domain type
    #[error("invalid {field} value: '{value}'")]
    InvalidValue {
        /// Domain field being parsed (e.g. `personal`, `difficulty`)
        field: &'static str,
        /// The rejected input
        value: String,
    },

    /// A media payload was not an object with a discriminant
    #[error("invalid media payload: {reason}")]
    InvalidMedia {
        /// What was wrong with the payload
        reason: String,
    },

    /// Structured content could not be deserialized
    #[error("failed to deserialize {entity}: {reason}")]
    Deserialization {
        /// Entity being decoded (exercise, catalog, ...)
        entity: &'static str,
        /// Decoder message
        reason: String,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidValue`]
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        let code = match &error {
            DomainError::InvalidValue { .. } => ErrorCode::InvalidInput,
            DomainError::InvalidMedia { .. } | DomainError::Deserialization { .. } => {
                ErrorCode::InvalidFormat
            }
        };
        Self::new(code, error.to_string())
    }
}

/// Result alias for domain parsing
pub type DomainResult<T> = Result<T, DomainError>;

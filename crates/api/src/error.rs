// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use galley_order::{CoreError, StoreError};
use galley_order_domain::DomainError;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The order is not ready to be exported or submitted.
    ValidationFailed {
        /// The field that failed validation.
        field: String,
        /// The message shown to the user.
        message: String,
    },
    /// The catalog document could not be loaded.
    CatalogUnavailable {
        /// Why the catalog could not be loaded.
        reason: String,
    },
    /// The order submission collaborator rejected the order.
    SubmissionFailed {
        /// Why the submission failed.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ValidationFailed { message, .. } => write!(f, "{message}"),
            Self::CatalogUnavailable { reason } => {
                write!(f, "Catalog unavailable: {reason}")
            }
            Self::SubmissionFailed { reason } => {
                write!(f, "Failed to submit order: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidCategory(_) => ApiError::InvalidInput {
            field: String::from("category"),
            message,
        },
        DomainError::InvalidLineItemId(_) => ApiError::InvalidInput {
            field: String::from("id"),
            message,
        },
        DomainError::UnknownCustomerField(_) | DomainError::UnknownItemField(_) => {
            ApiError::InvalidInput {
                field: String::from("field"),
                message,
            }
        }
        DomainError::CategoryNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Category"),
            message,
        },
        DomainError::CatalogPositionNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Catalog row"),
            message,
        },
        DomainError::CategoryMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("line_category"),
            message,
        },
        DomainError::QuantityOutOfRange { .. } => ApiError::ValidationFailed {
            field: String::from("quantity"),
            message,
        },
        DomainError::CommentTooLong { field, .. } => ApiError::ValidationFailed {
            field: field.to_string(),
            message,
        },
        DomainError::MissingCustomerField { label } => ApiError::ValidationFailed {
            field: label.to_string(),
            message,
        },
        DomainError::EmptyOrder => ApiError::ValidationFailed {
            field: String::from("items"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates the outcome of a store mutation.
///
/// A persistence failure leaves the in-memory order updated, so it is logged
/// and the request still succeeds.
///
/// # Errors
///
/// Returns the translated core error when the command was rejected.
pub fn absorb_persistence_failure<T>(result: Result<T, StoreError>) -> Result<(), ApiError> {
    match result {
        Ok(_) => Ok(()),
        Err(StoreError::Core(err)) => Err(translate_core_error(err)),
        Err(StoreError::Persistence(msg)) => {
            error!(error = %msg, "Order state kept in memory only");
            Ok(())
        }
    }
}

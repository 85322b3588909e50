pub mod dashboard_service;
pub mod role_service;
pub mod user_service;

pub use dashboard_service::*;
pub use role_service::*;
pub use user_service::*;

use crate::domain::errors::DomainError;
use crate::view::forms::FieldErrors;
use thiserror::Error;

/// Why a save was rejected: the form failed validation (no data-service call
/// was issued) or the data service itself failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Operator's answer to the delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and was removed.
    Deleted,
    /// No record with that id; nothing changed.
    Missing,
    /// The operator declined the prompt; no data-service call was issued.
    Declined,
}

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers (CLI, web handlers) decoupled from storage details.
//! - Emit one metadata-only log event per write.

use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::{RecordKind, RepoError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_service;
pub mod post_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for author/post use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A field value was rejected; the message is safe to show to users.
    Validation(ValidationError),
    /// Target record does not exist.
    NotFound { kind: RecordKind, id: RecordId },
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Repo(other),
        }
    }
}

impl ServiceError {
    /// Short code for log lines.
    pub(crate) fn log_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.code(),
            Self::NotFound { .. } => "not_found",
            Self::Repo(err) => err.code(),
            Self::InconsistentState(_) => "inconsistent_state",
        }
    }
}

/// Logs the outcome of one write use-case without field values.
pub(crate) fn log_write_outcome<T>(
    event: &str,
    result: &ServiceResult<T>,
    id_of: impl Fn(&T) -> Option<RecordId>,
) {
    match result {
        Ok(record) => match id_of(record) {
            Some(id) => info!("event={event} module=service status=ok id={id}"),
            None => info!("event={event} module=service status=ok"),
        },
        Err(err @ ServiceError::Validation(_)) => {
            warn!("event={event} module=service {}", failure_fields(err))
        }
        Err(err) => error!("event={event} module=service {}", failure_fields(err)),
    }
}

/// Status and error code only; error messages may echo field values.
fn failure_fields(err: &ServiceError) -> String {
    let status = match err {
        ServiceError::Validation(_) => "rejected",
        _ => "error",
    };
    format!("status={status} error_code={}", err.log_code())
}

//! Unified error handling for the support orchestrator.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::nlu::NluError;

/// Failures that abort processing of a single message.
///
/// Local absences (unknown user, unknown order, no FAQ match) never appear
/// here - they resolve into response text. Only collaborator failures
/// surface to the caller, which owns user-facing error messaging.
#[derive(Debug, Error)]
pub enum SupportError {
    /// Record store operation failed.
    #[error("record store error: {0}")]
    Store(#[from] RepositoryError),

    /// Language service call failed.
    #[error("language service error: {0}")]
    Nlu(#[from] NluError),
}

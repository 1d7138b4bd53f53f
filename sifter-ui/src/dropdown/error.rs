use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by an option query.
///
/// A valid zero-result response is *not* an error: it resolves to an empty
/// list so the views can render "no results" instead of an error affordance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("option source failed: {0}")]
    Source(String),
    #[error("option query timed out after {0:?}")]
    TimedOut(Duration),
}

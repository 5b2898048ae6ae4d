//! Error types for simulation runs.

use thiserror::Error;

use crate::scheduler::Policy;
use crate::validation::ValidationErrors;

/// Errors returned by simulators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The process set failed validation; nothing was simulated.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),
    /// A simulator produced an inconsistent outcome. Always a bug.
    #[error("{policy} invariant violated: {detail}")]
    InvariantViolation {
        /// Policy whose run failed the check.
        policy: Policy,
        /// What was inconsistent.
        detail: String,
    },
}

impl SimError {
    pub(crate) fn invariant(policy: Policy, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            policy,
            detail: detail.into(),
        }
    }
}

/// Error parsing a policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling policy: '{0}'")]
pub struct ParsePolicyError(pub String);

/// Result alias for simulation runs.
pub type Result<T> = std::result::Result<T, SimError>;

//! Input validation for process sets.
//!
//! Checks structural integrity of the process descriptors before any
//! simulator runs. Detects:
//! - Empty input
//! - Empty or duplicate IDs
//! - Non-positive bursts
//! - Negative arrivals
//! - Workloads whose schedule would run past the tick range
//!
//! Every problem is reported, not just the first one found.

use crate::models::{Process, Ticks};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, when the error concerns one.
    pub process_id: Option<String>,
    /// Human-readable description naming the offending field.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// `burst` is zero or negative.
    NonPositiveBurst,
    /// `arrival` is negative.
    NegativeArrival,
    /// The latest arrival plus the total burst exceeds `Ticks::MAX`.
    TickOverflow,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        process_id: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id: process_id.map(str::to_owned),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// All errors found in one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Iterates over the collected errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no error was collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any error has the given kind.
    pub fn has_kind(&self, kind: &ValidationErrorKind) -> bool {
        self.0.iter().any(|e| &e.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-empty
/// 3. No duplicate IDs
/// 4. `burst > 0`
/// 5. `arrival >= 0`
/// 6. Latest arrival plus total burst fits in `Ticks`
///
/// Every clock value a simulator reaches is bounded by check 6, so
/// simulation arithmetic cannot overflow on accepted input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            None,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                None,
                format!("Process with arrival={} burst={} has an empty id", p.arrival, p.burst),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                Some(p.id.as_str()),
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                Some(p.id.as_str()),
                format!("Process '{}' has non-positive burst: {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                Some(p.id.as_str()),
                format!("Process '{}' has negative arrival: {}", p.id, p.arrival),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TickOverflow,
            None,
            format!(
                "Latest arrival {latest_arrival} plus total burst exceeds the tick range ({})",
                Ticks::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 6),
            Process::new("P2", 2, 8),
            Process::new("P3", 4, 7),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert!(errors.has_kind(&ValidationErrorKind::EmptyInput));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P1", 1, 4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.has_kind(&ValidationErrorKind::DuplicateId));
        assert_eq!(errors.0[0].process_id.as_deref(), Some("P1"));
    }

    #[test]
    fn test_empty_id() {
        let errors = validate_processes(&[Process::new("", 0, 3)]).unwrap_err();
        assert!(errors.has_kind(&ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
        assert!(errors.0[0].message.contains("burst"));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("P1", -1, 3)]).unwrap_err();
        assert!(errors.has_kind(&ValidationErrorKind::NegativeArrival));
        assert!(errors.0[0].message.contains("arrival"));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("P1", -2, 0), // Negative arrival + zero burst
            Process::new("P1", 0, 1),  // Duplicate
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_tick_overflow() {
        let errors = validate_processes(&[Process::new("A", Ticks::MAX - 2, 5)]).unwrap_err();
        assert!(errors.has_kind(&ValidationErrorKind::TickOverflow));
        assert_eq!(errors.len(), 1);

        // Total burst overflows on its own
        let half = Ticks::MAX / 2 + 1;
        let processes = vec![Process::new("A", 0, half), Process::new("B", 0, half)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.has_kind(&ValidationErrorKind::TickOverflow));
    }

    #[test]
    fn test_tick_range_boundary_accepted() {
        assert!(validate_processes(&[Process::new("A", Ticks::MAX - 5, 5)]).is_ok());
        let processes = vec![Process::new("A", 0, Ticks::MAX - 2), Process::new("B", 1, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_display_joins_messages() {
        let processes = vec![Process::new("P1", -1, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        let text = errors.to_string();
        assert!(text.contains("non-positive burst"));
        assert!(text.contains("negative arrival"));
        assert!(text.contains("; "));
    }
}

//! Rule engine for sequential multi-rule dispatching.
//!
//! Composes selection rules in priority order; a later rule is consulted
//! only when every earlier rule ties. Process IDs break the remaining ties,
//! so the order is total.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::Process;

/// A composable rule engine for ready-set selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_rule(rules::HighestResponseRatio);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (ID order only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Total order used for selection.
    pub fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b, context))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best(&self, ready: &[&Process], context: &DispatchContext) -> Option<usize> {
        (0..ready.len()).min_by(|&a, &b| self.compare(ready[a], ready[b], context))
    }

    /// Scores from each rule for one process, in rule order.
    pub fn evaluate(&self, process: &Process, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.score(process, context))
            .collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

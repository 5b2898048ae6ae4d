//! Built-in selection rules.
//!
//! - **SPN**: shortest total burst first
//! - **HRRN**: highest response ratio first
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Stallings (2018), "Operating Systems", Ch. 9.2
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use std::cmp::Ordering;
use std::fmt;

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::{Process, Ticks};

/// Shortest Process Next.
///
/// Prioritizes processes with a shorter total burst. Minimizes average
/// waiting time among non-preemptive policies, at the risk of starving
/// long processes.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn compare(&self, a: &Process, b: &Process, _context: &DispatchContext) -> Ordering {
        a.burst.cmp(&b.burst)
    }

    fn score(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst as f64
    }
}

/// Highest Response Ratio Next.
///
/// `ratio = (waiting + burst) / burst` with `waiting = clock - arrival`.
/// Ratios are compared exactly, so equal ratios fall through to the
/// tie-breaker rather than depending on float rounding.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl SelectionRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        let ra = ResponseRatio::of(a, context.clock);
        let rb = ResponseRatio::of(b, context.clock);
        // Higher ratio = higher priority
        rb.cmp(&ra)
    }

    fn score(&self, process: &Process, context: &DispatchContext) -> RuleScore {
        -ResponseRatio::of(process, context.clock).as_f64()
    }
}

/// Exact response ratio `(waiting + burst) / burst`.
///
/// Ordered by cross-multiplication in `i128`. Requires `burst > 0`, which
/// validation guarantees.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRatio {
    numerator: Ticks,
    denominator: Ticks,
}

impl ResponseRatio {
    /// Response ratio of `process` at `clock`.
    pub fn of(process: &Process, clock: Ticks) -> Self {
        Self {
            numerator: process.waited_at(clock) + process.burst,
            denominator: process.burst,
        }
    }

    /// Lossy value for reporting.
    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialEq for ResponseRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseRatio {}

impl Ord for ResponseRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for ResponseRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ResponseRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

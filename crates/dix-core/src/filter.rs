//! Priority filtering over held insight collections.
//!
//! Filtering is purely presentational: it narrows what is displayed without
//! touching the held [`DecisionResult`](crate::types::DecisionResult) and
//! never triggers a network call.

use crate::types::{Insight, Priority};

/// The user-selected priority subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Show every insight, in server order.
    #[default]
    All,
    Critical,
    High,
    Medium,
    Low,
}

impl FilterMode {
    /// All modes, in display order.
    pub const ALL: [FilterMode; 5] = [
        FilterMode::All,
        FilterMode::Critical,
        FilterMode::High,
        FilterMode::Medium,
        FilterMode::Low,
    ];

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Critical => "critical",
            FilterMode::High => "high",
            FilterMode::Medium => "medium",
            FilterMode::Low => "low",
        }
    }

    /// Whether an insight with the given priority is shown under this mode.
    ///
    /// Named modes match by exact equality on the canonical stored form, so
    /// [`Priority::Other`] values only ever show under `All`.
    pub fn matches(&self, priority: &Priority) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Critical => *priority == Priority::Critical,
            FilterMode::High => *priority == Priority::High,
            FilterMode::Medium => *priority == Priority::Medium,
            FilterMode::Low => *priority == Priority::Low,
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "critical" => Ok(FilterMode::Critical),
            "high" => Ok(FilterMode::High),
            "medium" => Ok(FilterMode::Medium),
            "low" => Ok(FilterMode::Low),
            other => Err(format!(
                "unknown filter mode '{other}' (expected all, critical, high, medium or low)"
            )),
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the ordered subsequence of `insights` visible under `mode`.
///
/// `All` yields the input unchanged. The function is idempotent and preserves
/// the relative order of the input; it never mutates it.
pub fn filter_insights(insights: &[Insight], mode: FilterMode) -> Vec<Insight> {
    insights
        .iter()
        .filter(|i| mode.matches(&i.priority))
        .cloned()
        .collect()
}

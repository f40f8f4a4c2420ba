//! Shared types for dix-core.
//!
//! Wire-level data model for the decision service. Field names mirror the
//! service's JSON exactly; deserialization must accept any payload the
//! service emits today, including enum values added server-side later.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Priority assigned to an insight by the decision service.
///
/// The named tiers are the only ones the service documents. Anything else
/// lands in `Other` and passes through filtering without matching any named
/// filter mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    #[serde(untagged)]
    Other(String),
}

impl Priority {
    /// Canonical wire form.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(raw) => raw,
        }
    }
}

/// Kind of action an insight recommends.
///
/// Unrecognized values are preserved verbatim so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionType {
    Reorder,
    Discontinue,
    Promote,
    Review,
    #[serde(untagged)]
    Other(String),
}

impl DecisionType {
    /// Human-readable label. Unknown types fall back to the raw wire value.
    pub fn label(&self) -> &str {
        match self {
            DecisionType::Reorder => "Reorder",
            DecisionType::Discontinue => "Discontinue",
            DecisionType::Promote => "Promote",
            DecisionType::Review => "Review",
            DecisionType::Other(raw) => raw,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entity Types
// ─────────────────────────────────────────────────────────────────────────────

/// One recommended decision for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub product_id: String,
    pub product_name: String,
    pub priority: Priority,
    pub decision_type: DecisionType,
    pub summary: String,
    pub reasoning: String,
    pub recommended_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_impact: Option<String>,
}

/// Full response of one generation request.
///
/// `insights` keeps the order the service produced; the client never reorders
/// it, only filters. `total_insights` comes from the wire but display code
/// derives the unfiltered total from `insights.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub timestamp: String,
    #[serde(default)]
    pub total_insights: u32,
    pub critical_actions: u32,
    pub insights: Vec<Insight>,
}

/// Risk breakdown inside [`SummaryStats`].
///
/// `total` is not necessarily `critical + high`; medium and low tiers also
/// contribute to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRisks {
    pub critical: u32,
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
    pub total: u32,
}

/// Aggregate counters fetched from the summary endpoint.
///
/// Sourced independently of [`DecisionResult`]; its numbers are never
/// reconciled against `critical_actions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_products: u32,
    pub inventory_risks: InventoryRisks,
    pub slow_moving_products: u32,
    pub reorder_recommendations: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Input Types
// ─────────────────────────────────────────────────────────────────────────────

/// Input for one generation workflow.
///
/// Consumed by exactly one request; the CSV bytes move into the request body
/// and are not retained afterwards.
#[derive(Debug, Clone)]
pub enum UploadPayload {
    /// User-supplied transaction data.
    Csv { filename: String, bytes: Vec<u8> },
    /// Regenerate from data the service already holds.
    Cached,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_roundtrip() {
        let p: Priority = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(p, Priority::Critical);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"critical\"");
    }

    #[test]
    fn test_priority_unknown_value_preserved() {
        let p: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(p, Priority::Other("urgent".to_string()));
        assert_eq!(p.as_str(), "urgent");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"urgent\"");
    }

    #[test]
    fn test_decision_type_labels() {
        assert_eq!(DecisionType::Reorder.label(), "Reorder");
        assert_eq!(DecisionType::Discontinue.label(), "Discontinue");
        assert_eq!(DecisionType::Promote.label(), "Promote");
        assert_eq!(DecisionType::Review.label(), "Review");
        assert_eq!(DecisionType::Other("liquidate".into()).label(), "liquidate");
    }

    #[test]
    fn test_decision_result_deserialization() {
        let json = r#"{
            "timestamp": "2024-01-15T10:30:00",
            "total_insights": 1,
            "critical_actions": 1,
            "insights": [{
                "product_id": "PROD001",
                "product_name": "Widget A",
                "priority": "critical",
                "decision_type": "reorder",
                "summary": "Stock critically low",
                "reasoning": "3 days of stock remaining",
                "recommended_action": "Reorder 50 units"
            }]
        }"#;
        let result: DecisionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.critical_actions, 1);
        assert_eq!(result.insights.len(), 1);
        assert_eq!(result.insights[0].priority, Priority::Critical);
        assert_eq!(result.insights[0].estimated_impact, None);
    }

    #[test]
    fn test_summary_stats_without_optional_tiers() {
        let json = r#"{
            "total_products": 12,
            "inventory_risks": {"critical": 2, "high": 3, "total": 7},
            "slow_moving_products": 4,
            "reorder_recommendations": 5
        }"#;
        let stats: SummaryStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.inventory_risks.medium, 0);
        assert_eq!(stats.inventory_risks.total, 7);
    }
}

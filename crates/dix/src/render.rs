//! Presentation views over the workflow state.
//!
//! Views are read-only: they take the held [`WorkflowState`] plus the current
//! filter mode and build terminal output. Changing the filter re-renders from
//! what is already held; nothing here touches the network.
//!
//! Render rules:
//! - error banner iff a generation error is held (stale results stay below it)
//! - summary block iff summary stats are held
//! - insight cards iff a decision result is held, with "{filtered} of {total}"
//!   counts and the critical badge taken from `critical_actions` as the
//!   service reported it, never recomputed from the filtered list

use chrono::NaiveDateTime;
use colored::Colorize;
use dix_core::types::{DecisionResult, Insight, Priority, SummaryStats};
use dix_core::{filter_insights, FilterMode, WorkflowState};

/// Render everything the held state calls for.
pub fn render(state: &WorkflowState, mode: FilterMode) -> String {
    let mut out = String::new();

    if let Some(message) = state.last_error() {
        out.push_str(&render_error_banner(message));
    }
    if let Some(summary) = state.summary() {
        out.push_str(&render_summary(summary));
    }
    if let Some(decisions) = state.decisions() {
        out.push_str(&render_insights(decisions, mode));
    }

    out
}

/// Error banner for a failed generation attempt.
pub fn render_error_banner(message: &str) -> String {
    format!("\n  {} {}\n", "Error:".red().bold(), message)
}

/// Aggregate summary block.
pub fn render_summary(summary: &SummaryStats) -> String {
    let mut out = String::from("\n");
    out.push_str(&format!("  {}\n", "Decision Summary".cyan().bold()));
    out.push_str(&format!("  {}\n", "────────────────".cyan()));
    out.push_str(&format!(
        "  Total Products:          {}\n",
        summary.total_products
    ));
    out.push_str(&format!(
        "  Critical Risks:          {}\n",
        summary.inventory_risks.critical.to_string().red().bold()
    ));
    out.push_str(&format!(
        "  High Risks:              {}\n",
        summary.inventory_risks.high.to_string().yellow()
    ));
    out.push_str(&format!(
        "  Slow-Moving Products:    {}\n",
        summary.slow_moving_products
    ));
    out.push_str(&format!(
        "  Reorder Recommendations: {}\n",
        summary.reorder_recommendations
    ));
    out.push_str(&format!(
        "  Total Inventory Risks:   {}\n",
        summary.inventory_risks.total
    ));
    out
}

/// Insight list under the given filter mode.
pub fn render_insights(decisions: &DecisionResult, mode: FilterMode) -> String {
    let filtered = filter_insights(&decisions.insights, mode);

    let mut out = String::from("\n");
    out.push_str(&format!("  {}\n", "Decision Insights".cyan().bold()));
    out.push_str(&format!(
        "  generated {}\n",
        format_timestamp(&decisions.timestamp).dimmed()
    ));

    let mut counts = format!("{} of {} insights", filtered.len(), decisions.insights.len());
    if decisions.critical_actions > 0 {
        // Count comes straight from the generation response.
        let badge = format!("{} critical", decisions.critical_actions);
        counts.push_str(&format!("  [{}]", badge.red().bold()));
    }
    out.push_str(&format!("  {counts}\n"));

    if filtered.is_empty() {
        out.push_str("\n  No insights match the selected filter.\n");
        return out;
    }

    for insight in &filtered {
        out.push_str(&render_card(insight));
    }
    out
}

fn render_card(insight: &Insight) -> String {
    let mut out = String::from("\n");
    out.push_str(&format!(
        "  {}  [{}] [{}]\n",
        insight.product_name.bold(),
        priority_badge(&insight.priority),
        insight.decision_type.label()
    ));
    out.push_str(&format!("  {}\n", insight.summary));
    out.push_str(&format!("    {} {}\n", "Reasoning:".bold(), insight.reasoning));
    out.push_str(&format!(
        "    {} {}\n",
        "Recommended Action:".bold(),
        insight.recommended_action
    ));
    if let Some(impact) = &insight.estimated_impact {
        out.push_str(&format!("    {} {}\n", "Estimated Impact:".bold(), impact));
    }
    out
}

fn priority_badge(priority: &Priority) -> String {
    let label = priority.as_str().to_uppercase();
    match priority {
        Priority::Critical => label.red().bold().to_string(),
        Priority::High => label.yellow().bold().to_string(),
        Priority::Medium => label.blue().to_string(),
        Priority::Low => label.green().to_string(),
        // Unknown tiers still display, uncolored.
        Priority::Other(_) => label,
    }
}

/// The service emits a naive ISO 8601 timestamp; show it compactly when it
/// parses, verbatim when it does not.
fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dix_core::types::DecisionType;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn insight(name: &str, priority: Priority) -> Insight {
        Insight {
            product_id: String::new(),
            product_name: name.to_string(),
            priority,
            decision_type: DecisionType::Reorder,
            summary: "Stock running low".to_string(),
            reasoning: "3 days of cover left".to_string(),
            recommended_action: "Reorder 50 units".to_string(),
            estimated_impact: None,
        }
    }

    fn decisions(insights: Vec<Insight>, critical_actions: u32) -> DecisionResult {
        DecisionResult {
            timestamp: "2024-01-15T10:30:00".to_string(),
            total_insights: insights.len() as u32,
            critical_actions,
            insights,
        }
    }

    #[test]
    fn test_counts_line_shows_filtered_and_total() {
        no_color();
        let d = decisions(
            vec![
                insight("a", Priority::Critical),
                insight("b", Priority::High),
                insight("c", Priority::High),
                insight("d", Priority::Low),
            ],
            0,
        );
        let out = render_insights(&d, FilterMode::High);
        assert!(out.contains("2 of 4 insights"), "{out}");
        assert!(out.contains("b"));
        assert!(out.contains("c"));
        assert!(!out.contains("No insights match"));
    }

    #[test]
    fn test_critical_badge_uses_reported_count() {
        no_color();
        // critical_actions disagrees with the visible list on purpose; the
        // reported number wins.
        let d = decisions(vec![insight("a", Priority::Low)], 3);
        let out = render_insights(&d, FilterMode::All);
        assert!(out.contains("1 of 1 insights"));
        assert!(out.contains("3 critical"));
    }

    #[test]
    fn test_empty_filter_renders_explicit_message() {
        no_color();
        let d = decisions(
            vec![insight("a", Priority::Medium), insight("b", Priority::Medium)],
            0,
        );
        let out = render_insights(&d, FilterMode::Critical);
        assert!(out.contains("0 of 2 insights"));
        assert!(out.contains("No insights match the selected filter."));
    }

    #[test]
    fn test_unknown_decision_type_rendered_verbatim() {
        no_color();
        let mut i = insight("a", Priority::High);
        i.decision_type = DecisionType::Other("liquidate".to_string());
        let out = render_card(&i);
        assert!(out.contains("[liquidate]"));
    }

    #[test]
    fn test_unknown_priority_badge_uses_raw_value() {
        no_color();
        let i = insight("a", Priority::Other("urgent".to_string()));
        assert!(render_card(&i).contains("[URGENT]"));
    }

    #[test]
    fn test_estimated_impact_block_omitted_when_absent() {
        no_color();
        let mut with = insight("a", Priority::High);
        with.estimated_impact = Some("$2,000 tied up".to_string());
        assert!(render_card(&with).contains("Estimated Impact: $2,000 tied up"));

        let without = insight("b", Priority::High);
        assert!(!render_card(&without).contains("Estimated Impact"));
    }

    #[test]
    fn test_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("2024-01-15T10:30:00"), "2024-01-15 10:30");
        assert_eq!(format_timestamp("not a date"), "not a date");
    }

    #[test]
    fn test_summary_block_contents() {
        no_color();
        let summary = SummaryStats {
            total_products: 12,
            inventory_risks: dix_core::types::InventoryRisks {
                critical: 2,
                high: 3,
                medium: 1,
                low: 0,
                total: 6,
            },
            slow_moving_products: 4,
            reorder_recommendations: 5,
        };
        let out = render_summary(&summary);
        assert!(out.contains("Total Products:          12"));
        assert!(out.contains("Critical Risks:          2"));
        assert!(out.contains("Total Inventory Risks:   6"));
    }

    #[test]
    fn test_error_banner_text() {
        no_color();
        let out = render_error_banner("bad csv");
        assert!(out.contains("Error: bad csv"));
    }
}

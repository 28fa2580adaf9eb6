use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::contacts::ImportReport;
use crate::scoring::{ResponseTally, ResponseTime, ScoreBreakdown, ScoringConfig, Strength};
use crate::wizard::{WizardState, WizardStep};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Strength label, colored by tier when colors are on
pub fn format_strength(strength: Strength, use_colors: bool) -> String {
    let label = strength.as_str();
    if !use_colors {
        return label.to_string();
    }
    match strength {
        Strength::Thick => label.green().bold().to_string(),
        Strength::Solid => label.cyan().to_string(),
        Strength::Growing => label.yellow().to_string(),
        Strength::Thin => label.red().to_string(),
    }
}

/// Format a score breakdown as a multi-line report. Each sub-score is
/// shown against the maximum configured in `scoring`:
///
/// ```text
/// Engagement   40.0 / 40   (+31 / 0)
/// Origin       20.0 / 30   (wizard)
/// Network       0.0 / 30
/// Total        60.0        solid
/// ```
pub fn format_breakdown(breakdown: &ScoreBreakdown, scoring: &ScoringConfig, use_colors: bool) -> String {
    let engagement = &breakdown.engagement.result;
    let origin = &breakdown.origin;
    let network = &breakdown.network.result;

    let mut lines = Vec::new();
    lines.push(format!(
        "Engagement  {:>5.1} / {}   (+{} / {})",
        engagement.score,
        scoring.engagement.max_score,
        engagement.positive_points,
        engagement.negative_points
    ));

    let mut origin_detail = origin.factors.source.to_string();
    if origin.factors.has_inviter {
        origin_detail.push_str(", invited");
    }
    lines.push(format!(
        "Origin      {:>5.1} / {}   ({})",
        origin.result.score, scoring.origin.max_score, origin_detail
    ));

    let mut network_parts = Vec::new();
    if network.inviter_bonus > 0.0 {
        network_parts.push(format!("inviter +{}", network.inviter_bonus));
    }
    if network.shared_connection_points > 0.0 {
        network_parts.push(format!("shared +{}", network.shared_connection_points));
    }
    if network.affiliation_points > 0.0 {
        network_parts.push(format!("affiliations +{}", network.affiliation_points));
    }
    if network.community_points > 0.0 {
        network_parts.push(format!("communities +{}", network.community_points));
    }
    if network_parts.is_empty() {
        lines.push(format!(
            "Network     {:>5.1} / {}",
            network.score, scoring.network.max_score
        ));
    } else {
        lines.push(format!(
            "Network     {:>5.1} / {}   ({})",
            network.score,
            scoring.network.max_score,
            network_parts.join(", ")
        ));
    }

    let total = format!("Total       {:>5.1}", breakdown.total);
    let strength = format_strength(breakdown.strength, use_colors);
    if use_colors {
        lines.push(format!("{}        {}", total.bold(), strength));
    } else {
        lines.push(format!("{}        {}", total, strength));
    }

    lines.join("\n")
}

/// One line per categorized response time, e.g. "36h  Normal  +2"
pub fn format_response_time(input: &str, response: &ResponseTime, use_colors: bool) -> String {
    let points = format!("{:+}", response.points);
    let points = if !use_colors {
        points
    } else if response.points > 0 {
        points.green().to_string()
    } else if response.points < 0 {
        points.red().to_string()
    } else {
        points.dimmed().to_string()
    };
    format!("{:<10} {:<10} {}", input, response.category.to_string(), points)
}

pub fn format_response_tally(tally: &ResponseTally) -> String {
    format!(
        "fast_responses: {}, ignored_notifications: {}, points: {:+}",
        tally.fast_responses, tally.ignored_notifications, tally.total_points
    )
}

/// Summary of an import batch followed by per-row problems.
pub fn format_import_report(report: &ImportReport, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let summary = format!(
        "Imported {} contacts ({} rejected, {} duplicates)",
        report.contacts.len(),
        report.rejected.len(),
        report.duplicates.len()
    );
    lines.push(if use_colors {
        summary.bold().to_string()
    } else {
        summary
    });

    for contact in &report.contacts {
        let channel = contact
            .email
            .as_deref()
            .or(contact.phone.as_deref())
            .unwrap_or("");
        lines.push(format!("  {} <{}> {}", contact.name, channel, &contact.duplicate_hash[..12]));
    }

    for row in &report.rejected {
        let line = format!("  row {}: {}", row.index + 1, row.errors.join("; "));
        lines.push(if use_colors { line.red().to_string() } else { line });
    }

    for row in &report.duplicates {
        let line = format!(
            "  row {}: duplicate of row {}",
            row.index + 1,
            row.duplicate_of + 1
        );
        lines.push(if use_colors {
            line.yellow().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

/// Wizard progress: current step plus what has been filled in so far.
pub fn format_wizard_state(state: &WizardState, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let header = format!(
        "Step {} of {}: {}",
        state.step.number(),
        WizardStep::ALL.len(),
        state.step
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    let unset = "(not set)";
    let draft = &state.draft;
    lines.push(format!("  Contact: {}", draft.contact.as_deref().unwrap_or(unset)));
    lines.push(format!(
        "  Trigger: {}",
        draft
            .trigger
            .map(|t| t.to_string())
            .unwrap_or_else(|| unset.to_string())
    ));
    lines.push(format!("  Message: {}", draft.message.as_deref().unwrap_or(unset)));
    lines.push(format!(
        "  Due:     {}",
        draft
            .due_at
            .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| unset.to_string())
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::{import_contacts, ImportConfig, RawContact};
    use crate::scoring::{
        calculate_connection_strength, calculate_connection_strength_with, categorize_response_time,
        ContactSource, EngagementFactors, NetworkFactors, OriginFactors,
    };
    use crate::wizard::TriggerKind;

    #[test]
    fn test_format_strength_plain() {
        assert_eq!(format_strength(Strength::Thick, false), "thick");
        assert_eq!(format_strength(Strength::Thin, false), "thin");
    }

    #[test]
    fn test_format_strength_colored_contains_label() {
        let colored = format_strength(Strength::Solid, true);
        assert!(colored.contains("solid"));
        assert_ne!(colored, "solid");
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = calculate_connection_strength(
            &EngagementFactors {
                calendar_accepts: 2,
                fast_responses: 1,
                recent_engagement: true,
                ..Default::default()
            },
            &OriginFactors {
                source: ContactSource::Wizard,
                ..Default::default()
            },
            &NetworkFactors {
                shared_connections: 2,
                ..Default::default()
            },
        );
        let output = format_breakdown(&breakdown, &ScoringConfig::default(), false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Engagement   40.0 / 40   (+31 / 0)");
        assert_eq!(lines[1], "Origin       20.0 / 30   (wizard)");
        assert_eq!(lines[2], "Network       4.0 / 30   (shared +4)");
        assert_eq!(lines[3], "Total        64.0        solid");
    }

    #[test]
    fn test_format_breakdown_uses_configured_max() {
        let mut scoring = ScoringConfig::default();
        scoring.engagement.max_score = 50.0;
        scoring.origin.max_score = 25.0;
        scoring.network.max_score = 20.0;
        let breakdown = calculate_connection_strength_with(
            &EngagementFactors::default(),
            &OriginFactors::default(),
            &NetworkFactors::default(),
            &scoring,
        );
        let output = format_breakdown(&breakdown, &scoring, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Engagement   25.0 / 50   (+0 / 0)");
        assert_eq!(lines[1], "Origin        5.0 / 25   (unknown)");
        assert_eq!(lines[2], "Network       0.0 / 20");
    }

    #[test]
    fn test_format_single_response_tally() {
        let tally = ResponseTally::from_hours(&[0.5]);
        assert_eq!(
            format_response_tally(&tally),
            "fast_responses: 1, ignored_notifications: 0, points: +5"
        );
    }

    #[test]
    fn test_format_response_time() {
        let line = format_response_time("36h", &categorize_response_time(36.0), false);
        assert!(line.starts_with("36h"));
        assert!(line.contains("Normal"));
        assert!(line.ends_with("+2"));
    }

    #[test]
    fn test_format_import_report() {
        let report = import_contacts(
            vec![
                RawContact {
                    name: Some("ada lovelace".to_string()),
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
                RawContact {
                    name: Some("Nobody".to_string()),
                    ..Default::default()
                },
            ],
            &ImportConfig::default(),
        );
        let output = format_import_report(&report, false);
        assert!(output.starts_with("Imported 1 contacts (1 rejected, 0 duplicates)"));
        assert!(output.contains("Ada Lovelace <ada@example.com>"));
        assert!(output.contains("row 2: contact: email or phone required"));
    }

    #[test]
    fn test_format_wizard_state() {
        let mut state = WizardState::new();
        state.set_contact("contact-9".to_string());
        state.advance().unwrap();
        state.set_trigger(TriggerKind::FollowUp);

        let output = format_wizard_state(&state, false);
        assert!(output.starts_with("Step 2 of 5: Choose trigger"));
        assert!(output.contains("Contact: contact-9"));
        assert!(output.contains("Trigger: follow-up"));
        assert!(output.contains("Message: (not set)"));
    }
}

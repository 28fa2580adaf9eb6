use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // NaN slips past every ordering check below, so reject it up front
    for (path, value) in all_values(config) {
        if !value.is_finite() {
            errors.push(format!("scoring.{}: must be a finite number", path));
        }
    }

    let e = &config.engagement;
    let positive = [
        ("calendar_accept", e.calendar_accept),
        ("fast_response", e.fast_response),
        ("completed_outreach", e.completed_outreach),
        ("warm_interaction", e.warm_interaction),
        ("recent_engagement", e.recent_engagement),
    ];
    for (name, weight) in positive {
        if weight < 0.0 {
            errors.push(format!("scoring.engagement.{}: must be non-negative", name));
        }
    }

    let negative = [
        ("calendar_decline", e.calendar_decline),
        ("ignored_notification", e.ignored_notification),
        ("overdue_outreach", e.overdue_outreach),
        ("long_contact_gap", e.long_contact_gap),
        ("cold_interaction", e.cold_interaction),
        ("cancelled_meeting", e.cancelled_meeting),
    ];
    for (name, weight) in negative {
        if weight > 0.0 {
            errors.push(format!(
                "scoring.engagement.{}: must be zero or negative (got {})",
                name, weight
            ));
        }
    }

    if e.raw_scale <= 0.0 {
        errors.push("scoring.engagement.raw_scale: must be positive".to_string());
    }
    if e.max_score <= 0.0 {
        errors.push("scoring.engagement.max_score: must be positive".to_string());
    }

    let o = &config.origin;
    let origin = [
        ("invite", o.invite),
        ("wizard", o.wizard),
        ("manual", o.manual),
        ("import", o.import),
        ("unknown", o.unknown),
        ("inviter_bonus", o.inviter_bonus),
        ("max_score", o.max_score),
    ];
    for (name, weight) in origin {
        if weight < 0.0 {
            errors.push(format!("scoring.origin.{}: must be non-negative", name));
        }
    }

    let n = &config.network;
    let network = [
        ("inviter_thick", n.inviter_thick),
        ("inviter_solid", n.inviter_solid),
        ("inviter_growing", n.inviter_growing),
        ("inviter_thin", n.inviter_thin),
        ("per_shared_connection", n.per_shared_connection),
        ("shared_connections_cap", n.shared_connections_cap),
        ("affiliations_cap", n.affiliations_cap),
        ("community_overlap_cap", n.community_overlap_cap),
        ("max_score", n.max_score),
    ];
    for (name, weight) in network {
        if weight < 0.0 {
            errors.push(format!("scoring.network.{}: must be non-negative", name));
        }
    }

    let t = &config.thresholds;
    if t.growing <= 0.0 {
        errors.push("scoring.thresholds.growing: must be positive".to_string());
    }
    if t.solid <= t.growing {
        errors.push(format!(
            "scoring.thresholds.solid: must be greater than growing ({} <= {})",
            t.solid, t.growing
        ));
    }
    if t.thick <= t.solid {
        errors.push(format!(
            "scoring.thresholds.thick: must be greater than solid ({} <= {})",
            t.thick, t.solid
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn all_values(config: &ScoringConfig) -> Vec<(&'static str, f64)> {
    let e = &config.engagement;
    let o = &config.origin;
    let n = &config.network;
    let t = &config.thresholds;
    vec![
        ("engagement.calendar_accept", e.calendar_accept),
        ("engagement.fast_response", e.fast_response),
        ("engagement.completed_outreach", e.completed_outreach),
        ("engagement.warm_interaction", e.warm_interaction),
        ("engagement.recent_engagement", e.recent_engagement),
        ("engagement.calendar_decline", e.calendar_decline),
        ("engagement.ignored_notification", e.ignored_notification),
        ("engagement.overdue_outreach", e.overdue_outreach),
        ("engagement.long_contact_gap", e.long_contact_gap),
        ("engagement.cold_interaction", e.cold_interaction),
        ("engagement.cancelled_meeting", e.cancelled_meeting),
        ("engagement.raw_scale", e.raw_scale),
        ("engagement.max_score", e.max_score),
        ("origin.invite", o.invite),
        ("origin.wizard", o.wizard),
        ("origin.manual", o.manual),
        ("origin.import", o.import),
        ("origin.unknown", o.unknown),
        ("origin.inviter_bonus", o.inviter_bonus),
        ("origin.max_score", o.max_score),
        ("network.inviter_thick", n.inviter_thick),
        ("network.inviter_solid", n.inviter_solid),
        ("network.inviter_growing", n.inviter_growing),
        ("network.inviter_thin", n.inviter_thin),
        ("network.per_shared_connection", n.per_shared_connection),
        ("network.shared_connections_cap", n.shared_connections_cap),
        ("network.affiliations_cap", n.affiliations_cap),
        ("network.community_overlap_cap", n.community_overlap_cap),
        ("network.max_score", n.max_score),
        ("thresholds.thick", t.thick),
        ("thresholds.solid", t.solid),
        ("thresholds.growing", t.growing),
    ]
}

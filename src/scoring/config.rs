use serde::{Deserialize, Serialize};

/// Scoring configuration.
///
/// Every weight, cap and threshold used by the connection-strength scorer.
/// The defaults are the standard model; a config file may override any
/// subset of them.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   engagement:
///     calendar_accept: 10
///     ignored_notification: -4
///   thresholds:
///     thick: 80
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub engagement: EngagementWeights,
    pub origin: OriginWeights,
    pub network: NetworkWeights,
    pub thresholds: StrengthThresholds,
}

/// Per-event points for the engagement sub-score.
///
/// Negative weights are stored with their sign, so the negative points are
/// the plain weighted sum.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngagementWeights {
    pub calendar_accept: f64,
    pub fast_response: f64,
    pub completed_outreach: f64,
    pub warm_interaction: f64,
    pub recent_engagement: f64,

    pub calendar_decline: f64,
    pub ignored_notification: f64,
    pub overdue_outreach: f64,
    pub long_contact_gap: f64,
    pub cold_interaction: f64,
    pub cancelled_meeting: f64,

    /// Raw points that move the normalized score by `max_score`.
    /// A raw score of 0 lands on `max_score / 2`.
    pub raw_scale: f64,
    pub max_score: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            calendar_accept: 8.0,
            fast_response: 5.0,
            completed_outreach: 6.0,
            warm_interaction: 4.0,
            recent_engagement: 10.0,
            calendar_decline: -6.0,
            ignored_notification: -8.0,
            overdue_outreach: -5.0,
            long_contact_gap: -7.0,
            cold_interaction: -4.0,
            cancelled_meeting: -6.0,
            raw_scale: 50.0,
            max_score: 40.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OriginWeights {
    pub invite: f64,
    pub wizard: f64,
    pub manual: f64,
    pub import: f64,
    pub unknown: f64,
    pub inviter_bonus: f64,
    pub max_score: f64,
}

impl Default for OriginWeights {
    fn default() -> Self {
        Self {
            invite: 25.0,
            wizard: 20.0,
            manual: 15.0,
            import: 10.0,
            unknown: 5.0,
            inviter_bonus: 5.0,
            max_score: 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkWeights {
    // Bonus by the inviter's own strength
    pub inviter_thick: f64,
    pub inviter_solid: f64,
    pub inviter_growing: f64,
    pub inviter_thin: f64,

    pub per_shared_connection: f64,
    /// Cap on shared-connection points (not on the connection count)
    pub shared_connections_cap: f64,
    pub affiliations_cap: f64,
    pub community_overlap_cap: f64,
    pub max_score: f64,
}

impl Default for NetworkWeights {
    fn default() -> Self {
        Self {
            inviter_thick: 12.0,
            inviter_solid: 9.0,
            inviter_growing: 5.0,
            inviter_thin: 2.0,
            per_shared_connection: 2.0,
            shared_connections_cap: 10.0,
            affiliations_cap: 4.0,
            community_overlap_cap: 4.0,
            max_score: 30.0,
        }
    }
}

/// Lower bounds (inclusive) of each strength tier.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthThresholds {
    pub thick: f64,
    pub solid: f64,
    pub growing: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            thick: 75.0,
            solid: 50.0,
            growing: 25.0,
        }
    }
}

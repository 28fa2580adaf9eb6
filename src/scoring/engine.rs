use serde::Serialize;

use super::config::{EngagementWeights, NetworkWeights, OriginWeights, ScoringConfig, StrengthThresholds};
use super::factors::{ContactSource, EngagementFactors, NetworkFactors, OriginFactors, Strength};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementScore {
    pub score: f64,           // Normalized into [0, max_score]
    pub positive_points: f64, // Weighted sum of positive signals
    pub negative_points: f64, // Weighted sum of negative signals (<= 0 with sane weights)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginScore {
    pub score: f64,
    pub base: f64,
    pub inviter_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkScore {
    pub score: f64,
    pub inviter_bonus: f64,
    pub shared_connection_points: f64,
    pub affiliation_points: f64,
    pub community_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementBreakdown {
    #[serde(flatten)]
    pub result: EngagementScore,
    pub factors: EngagementFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginBreakdown {
    #[serde(flatten)]
    pub result: OriginScore,
    pub factors: OriginFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkBreakdown {
    #[serde(flatten)]
    pub result: NetworkScore,
    pub factors: NetworkFactors,
}

/// Full result of scoring one contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub engagement: EngagementBreakdown,
    pub origin: OriginBreakdown,
    pub network: NetworkBreakdown,
    pub total: f64,
    pub strength: Strength,
}

/// Round to one decimal place, half away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score connection strength with the standard weights.
///
/// Pure and infallible: identical factors always give an identical breakdown.
pub fn calculate_connection_strength(
    engagement: &EngagementFactors,
    origin: &OriginFactors,
    network: &NetworkFactors,
) -> ScoreBreakdown {
    calculate_connection_strength_with(engagement, origin, network, &ScoringConfig::default())
}

/// Score connection strength with custom weights from a config file.
pub fn calculate_connection_strength_with(
    engagement: &EngagementFactors,
    origin: &OriginFactors,
    network: &NetworkFactors,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let engagement_result = score_engagement(engagement, &config.engagement);
    let origin_result = score_origin(origin, &config.origin);
    let network_result = score_network(network, &config.network);

    let total = round_tenth(engagement_result.score + origin_result.score + network_result.score);
    let strength = classify_strength_with(total, &config.thresholds);

    ScoreBreakdown {
        engagement: EngagementBreakdown {
            result: engagement_result,
            factors: engagement.clone(),
        },
        origin: OriginBreakdown {
            result: origin_result,
            factors: origin.clone(),
        },
        network: NetworkBreakdown {
            result: network_result,
            factors: network.clone(),
        },
        total,
        strength,
    }
}

pub fn engagement_score(factors: &EngagementFactors) -> EngagementScore {
    score_engagement(factors, &EngagementWeights::default())
}

/// Engagement sub-score.
///
/// The raw score is mapped with an affine transform centred on
/// `max_score / 2` and clamped afterwards, so extreme inputs saturate at
/// 0 or `max_score` instead of scaling over the achievable range.
pub fn score_engagement(factors: &EngagementFactors, weights: &EngagementWeights) -> EngagementScore {
    let recent = if factors.recent_engagement { 1 } else { 0 };
    let positive = [
        (factors.calendar_accepts, weights.calendar_accept),
        (factors.fast_responses, weights.fast_response),
        (factors.completed_outreach, weights.completed_outreach),
        (factors.warm_interactions, weights.warm_interaction),
        (recent, weights.recent_engagement),
    ];
    let negative = [
        (factors.calendar_declines, weights.calendar_decline),
        (factors.ignored_notifications, weights.ignored_notification),
        (factors.overdue_outreach, weights.overdue_outreach),
        (factors.long_contact_gaps, weights.long_contact_gap),
        (factors.cold_interactions, weights.cold_interaction),
        (factors.cancelled_meetings, weights.cancelled_meeting),
    ];
    let positive_points = weighted_sum(&positive);
    let negative_points = weighted_sum(&negative);

    let raw_score = positive_points + negative_points;
    let midpoint = weights.max_score / 2.0;
    let normalized = ((raw_score / weights.raw_scale) * weights.max_score + midpoint)
        .max(0.0)
        .min(weights.max_score);

    EngagementScore {
        score: round_tenth(normalized),
        positive_points,
        negative_points,
    }
}

// Folding from +0.0 keeps an all-zero sum from coming out as -0.0
fn weighted_sum(terms: &[(u32, f64)]) -> f64 {
    terms
        .iter()
        .fold(0.0, |acc, (count, weight)| acc + *count as f64 * weight)
}

pub fn origin_score(factors: &OriginFactors) -> f64 {
    score_origin(factors, &OriginWeights::default()).score
}

pub fn score_origin(factors: &OriginFactors, weights: &OriginWeights) -> OriginScore {
    let base = match factors.source {
        ContactSource::Invite => weights.invite,
        ContactSource::Wizard => weights.wizard,
        ContactSource::Manual => weights.manual,
        ContactSource::Import => weights.import,
        ContactSource::Unknown => weights.unknown,
    };
    let inviter_bonus = if factors.has_inviter {
        weights.inviter_bonus
    } else {
        0.0
    };

    OriginScore {
        score: (base + inviter_bonus).min(weights.max_score),
        base,
        inviter_bonus,
    }
}

pub fn network_score(factors: &NetworkFactors) -> f64 {
    score_network(factors, &NetworkWeights::default()).score
}

/// Network sub-score.
///
/// The shared-connection cap applies to the points: with the standard
/// weights that is 10 points, i.e. five connections' worth. It is easy to
/// misread as a cap of five on the count; the points are what gets capped.
pub fn score_network(factors: &NetworkFactors, weights: &NetworkWeights) -> NetworkScore {
    let inviter_bonus = match factors.inviter_strength {
        Some(Strength::Thick) => weights.inviter_thick,
        Some(Strength::Solid) => weights.inviter_solid,
        Some(Strength::Growing) => weights.inviter_growing,
        Some(Strength::Thin) => weights.inviter_thin,
        None => 0.0,
    };
    let shared_connection_points = (factors.shared_connections as f64
        * weights.per_shared_connection)
        .min(weights.shared_connections_cap);
    let affiliation_points = (factors.affiliation_count as f64).min(weights.affiliations_cap);
    let community_points = (factors.community_overlap as f64).min(weights.community_overlap_cap);

    let total = inviter_bonus + shared_connection_points + affiliation_points + community_points;

    NetworkScore {
        score: total.min(weights.max_score),
        inviter_bonus,
        shared_connection_points,
        affiliation_points,
        community_points,
    }
}

pub fn classify_strength(total: f64) -> Strength {
    classify_strength_with(total, &StrengthThresholds::default())
}

/// Map a total to its tier, checking the highest threshold first.
/// A total exactly on a threshold belongs to the higher tier.
pub fn classify_strength_with(total: f64, thresholds: &StrengthThresholds) -> Strength {
    if total >= thresholds.thick {
        Strength::Thick
    } else if total >= thresholds.solid {
        Strength::Solid
    } else if total >= thresholds.growing {
        Strength::Growing
    } else {
        Strength::Thin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_network() -> NetworkFactors {
        NetworkFactors::default()
    }

    #[test]
    fn test_zero_engagement_is_midpoint() {
        let result = engagement_score(&EngagementFactors::default());
        assert_eq!(result.score, 20.0);
        assert_eq!(result.positive_points, 0.0);
        assert_eq!(result.negative_points, 0.0);
    }

    #[test]
    fn test_engagement_partial_positive() {
        let factors = EngagementFactors {
            warm_interactions: 1,
            ..Default::default()
        };
        // 4 / 50 * 40 + 20 = 23.2
        assert_eq!(engagement_score(&factors).score, 23.2);
    }

    #[test]
    fn test_engagement_partial_negative() {
        let factors = EngagementFactors {
            cold_interactions: 1,
            ..Default::default()
        };
        let result = engagement_score(&factors);
        // -4 / 50 * 40 + 20 = 16.8
        assert_eq!(result.score, 16.8);
        assert_eq!(result.negative_points, -4.0);
    }

    #[test]
    fn test_engagement_saturates_at_max() {
        // 5 accepts + recent = 50 raw points
        let factors = EngagementFactors {
            calendar_accepts: 5,
            recent_engagement: true,
            ..Default::default()
        };
        assert_eq!(engagement_score(&factors).score, 40.0);

        let many = EngagementFactors {
            calendar_accepts: 100,
            completed_outreach: 50,
            ..Default::default()
        };
        assert_eq!(engagement_score(&many).score, 40.0);
    }

    #[test]
    fn test_engagement_saturates_at_zero() {
        // 10 overdue = -50 raw points
        let factors = EngagementFactors {
            overdue_outreach: 10,
            ..Default::default()
        };
        let result = engagement_score(&factors);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.negative_points, -50.0);

        let many = EngagementFactors {
            ignored_notifications: 40,
            long_contact_gaps: 12,
            ..Default::default()
        };
        assert_eq!(engagement_score(&many).score, 0.0);
    }

    #[test]
    fn test_engagement_mixed_signals() {
        let factors = EngagementFactors {
            calendar_accepts: 1,    // +8
            fast_responses: 2,      // +10
            calendar_declines: 1,   // -6
            cancelled_meetings: 1,  // -6
            ..Default::default()
        };
        let result = engagement_score(&factors);
        assert_eq!(result.positive_points, 18.0);
        assert_eq!(result.negative_points, -12.0);
        // 6 / 50 * 40 + 20 = 24.8
        assert_eq!(result.score, 24.8);
    }

    #[test]
    fn test_origin_base_scores() {
        let score = |source| {
            origin_score(&OriginFactors {
                source,
                ..Default::default()
            })
        };
        assert_eq!(score(ContactSource::Invite), 25.0);
        assert_eq!(score(ContactSource::Wizard), 20.0);
        assert_eq!(score(ContactSource::Manual), 15.0);
        assert_eq!(score(ContactSource::Import), 10.0);
        assert_eq!(score(ContactSource::Unknown), 5.0);
    }

    #[test]
    fn test_origin_ceiling() {
        let factors = OriginFactors {
            source: ContactSource::Invite,
            has_inviter: true,
            inviter_strength: None,
        };
        assert_eq!(origin_score(&factors), 30.0);
    }

    #[test]
    fn test_origin_unrecognized_source_defaults() {
        let factors = OriginFactors {
            source: ContactSource::parse("trade-show"),
            has_inviter: true,
            inviter_strength: None,
        };
        let result = score_origin(&factors, &OriginWeights::default());
        assert_eq!(result.base, 5.0);
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn test_origin_clamp_applies_with_custom_weights() {
        let weights = OriginWeights {
            invite: 29.0,
            ..Default::default()
        };
        let factors = OriginFactors {
            source: ContactSource::Invite,
            has_inviter: true,
            inviter_strength: None,
        };
        assert_eq!(score_origin(&factors, &weights).score, 30.0);
    }

    #[test]
    fn test_network_inviter_tiers() {
        let score = |strength| {
            network_score(&NetworkFactors {
                inviter_strength: Some(strength),
                ..Default::default()
            })
        };
        assert_eq!(score(Strength::Thick), 12.0);
        assert_eq!(score(Strength::Solid), 9.0);
        assert_eq!(score(Strength::Growing), 5.0);
        assert_eq!(score(Strength::Thin), 2.0);
        assert_eq!(network_score(&zero_network()), 0.0);
    }

    #[test]
    fn test_network_shared_connections_cap_is_on_points() {
        let factors = NetworkFactors {
            shared_connections: 10,
            ..Default::default()
        };
        let result = score_network(&factors, &NetworkWeights::default());
        assert_eq!(result.shared_connection_points, 10.0);
        assert_eq!(result.score, 10.0);

        let three = NetworkFactors {
            shared_connections: 3,
            ..Default::default()
        };
        assert_eq!(network_score(&three), 6.0);
    }

    #[test]
    fn test_network_affiliation_and_overlap_caps() {
        let factors = NetworkFactors {
            affiliation_count: 9,
            community_overlap: 2,
            ..Default::default()
        };
        let result = score_network(&factors, &NetworkWeights::default());
        assert_eq!(result.affiliation_points, 4.0);
        assert_eq!(result.community_points, 2.0);
        assert_eq!(result.score, 6.0);
    }

    #[test]
    fn test_network_maximum() {
        let factors = NetworkFactors {
            inviter_strength: Some(Strength::Thick),
            shared_connections: 50,
            affiliation_count: 50,
            community_overlap: 50,
        };
        // 12 + 10 + 4 + 4 = 30
        assert_eq!(network_score(&factors), 30.0);
    }

    #[test]
    fn test_network_clamp_applies_with_custom_weights() {
        let weights = NetworkWeights {
            inviter_thick: 25.0,
            ..Default::default()
        };
        let factors = NetworkFactors {
            inviter_strength: Some(Strength::Thick),
            shared_connections: 5,
            ..Default::default()
        };
        assert_eq!(score_network(&factors, &weights).score, 30.0);
    }

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(classify_strength(74.9), Strength::Solid);
        assert_eq!(classify_strength(75.0), Strength::Thick);
        assert_eq!(classify_strength(49.9), Strength::Growing);
        assert_eq!(classify_strength(50.0), Strength::Solid);
        assert_eq!(classify_strength(24.9), Strength::Thin);
        assert_eq!(classify_strength(25.0), Strength::Growing);
        assert_eq!(classify_strength(0.0), Strength::Thin);
        assert_eq!(classify_strength(100.0), Strength::Thick);
    }

    #[test]
    fn test_full_scoring_flow() {
        let engagement = EngagementFactors {
            calendar_accepts: 2,
            fast_responses: 1,
            recent_engagement: true,
            ..Default::default()
        };
        let origin = OriginFactors {
            source: ContactSource::Wizard,
            has_inviter: false,
            inviter_strength: None,
        };

        let result = calculate_connection_strength(&engagement, &origin, &zero_network());

        // positive = 2*8 + 1*5 + 10 = 31 -> 31/50*40+20 = 44.8 -> clamped 40
        assert_eq!(result.engagement.result.positive_points, 31.0);
        assert_eq!(result.engagement.result.negative_points, 0.0);
        assert_eq!(result.engagement.result.score, 40.0);
        assert_eq!(result.origin.result.score, 20.0);
        assert_eq!(result.network.result.score, 0.0);
        assert_eq!(result.total, 60.0);
        assert_eq!(result.strength, Strength::Solid);
        assert_eq!(result.engagement.factors, engagement);
    }

    #[test]
    fn test_all_zero_inputs() {
        let result = calculate_connection_strength(
            &EngagementFactors::default(),
            &OriginFactors::default(),
            &zero_network(),
        );
        // 20 (engagement midpoint) + 5 (unknown origin) + 0
        assert_eq!(result.total, 25.0);
        assert_eq!(result.strength, Strength::Growing);
    }

    #[test]
    fn test_maximum_total_is_thick() {
        let engagement = EngagementFactors {
            calendar_accepts: 10,
            ..Default::default()
        };
        let origin = OriginFactors {
            source: ContactSource::Invite,
            has_inviter: true,
            inviter_strength: Some(Strength::Thick),
        };
        let network = NetworkFactors {
            inviter_strength: Some(Strength::Thick),
            shared_connections: 5,
            affiliation_count: 4,
            community_overlap: 4,
        };
        let result = calculate_connection_strength(&engagement, &origin, &network);
        assert_eq!(result.total, 100.0);
        assert_eq!(result.strength, Strength::Thick);
    }

    #[test]
    fn test_total_rounded_to_tenth() {
        let engagement = EngagementFactors {
            warm_interactions: 1, // 23.2
            ..Default::default()
        };
        let origin = OriginFactors {
            source: ContactSource::Manual, // 15
            ..Default::default()
        };
        let network = NetworkFactors {
            community_overlap: 3, // 3
            ..Default::default()
        };
        let result = calculate_connection_strength(&engagement, &origin, &network);
        assert_eq!(result.total, 41.2);
        assert_eq!(result.strength, Strength::Growing);
    }

    #[test]
    fn test_deterministic() {
        let engagement = EngagementFactors {
            calendar_accepts: 3,
            ignored_notifications: 2,
            long_contact_gaps: 1,
            ..Default::default()
        };
        let origin = OriginFactors {
            source: ContactSource::Import,
            has_inviter: true,
            inviter_strength: Some(Strength::Growing),
        };
        let network = NetworkFactors {
            inviter_strength: Some(Strength::Solid),
            shared_connections: 2,
            affiliation_count: 1,
            community_overlap: 1,
        };

        let first = calculate_connection_strength(&engagement, &origin, &network);
        let second = calculate_connection_strength(&engagement, &origin, &network);
        assert_eq!(first, second);
        assert_eq!(first.total.to_bits(), second.total.to_bits());
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ScoringConfig {
            thresholds: StrengthThresholds {
                thick: 90.0,
                solid: 60.0,
                growing: 30.0,
            },
            ..Default::default()
        };
        let result = calculate_connection_strength_with(
            &EngagementFactors::default(),
            &OriginFactors::default(),
            &zero_network(),
            &config,
        );
        // Total 25 falls below the raised growing threshold
        assert_eq!(result.total, 25.0);
        assert_eq!(result.strength, Strength::Thin);
    }
}

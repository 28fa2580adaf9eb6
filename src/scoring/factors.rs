use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relationship strength between the user and a contact.
///
/// Variants are declared weakest first so the derived `Ord` matches
/// `thin < growing < solid < thick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Thin,
    Growing,
    Solid,
    Thick,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Thin => "thin",
            Strength::Growing => "growing",
            Strength::Solid => "solid",
            Strength::Thick => "thick",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thin" => Ok(Strength::Thin),
            "growing" => Ok(Strength::Growing),
            "solid" => Ok(Strength::Solid),
            "thick" => Ok(Strength::Thick),
            other => anyhow::bail!("Unknown strength '{}' (expected thin, growing, solid or thick)", other),
        }
    }
}

/// Channel a contact entered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSource {
    Invite,
    Wizard,
    Import,
    Manual,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ContactSource {
    /// Lenient parse: anything unrecognized is `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "invite" => ContactSource::Invite,
            "wizard" => ContactSource::Wizard,
            "import" => ContactSource::Import,
            "manual" => ContactSource::Manual,
            _ => ContactSource::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSource::Invite => "invite",
            ContactSource::Wizard => "wizard",
            ContactSource::Import => "import",
            ContactSource::Manual => "manual",
            ContactSource::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed interactions with a contact, counted upstream by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngagementFactors {
    // Positive signals
    pub calendar_accepts: u32,
    pub fast_responses: u32,
    pub completed_outreach: u32,
    pub warm_interactions: u32,
    pub recent_engagement: bool,

    // Negative signals
    pub calendar_declines: u32,
    pub ignored_notifications: u32,
    pub overdue_outreach: u32,
    pub long_contact_gaps: u32,
    pub cold_interactions: u32,
    pub cancelled_meetings: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OriginFactors {
    pub source: ContactSource,
    pub has_inviter: bool,
    pub inviter_strength: Option<Strength>,
}

/// Second-order signals: who introduced the contact and how much the two
/// networks overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkFactors {
    pub inviter_strength: Option<Strength>,
    pub shared_connections: u32,
    pub affiliation_count: u32,
    pub community_overlap: u32,
}

/// Everything known about one contact, as read from a factors file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFactors {
    pub engagement: EngagementFactors,
    pub origin: OriginFactors,
    pub network: NetworkFactors,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WIZARD_STATE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    SelectContact,
    ChooseTrigger,
    ComposeMessage,
    Schedule,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectContact,
        WizardStep::ChooseTrigger,
        WizardStep::ComposeMessage,
        WizardStep::Schedule,
        WizardStep::Review,
    ];

    pub fn next(self) -> Option<WizardStep> {
        let pos = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(pos + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        let pos = Self::ALL.iter().position(|s| *s == self)?;
        pos.checked_sub(1).map(|p| Self::ALL[p])
    }

    /// 1-based position, for "step 2 of 5" style display
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::SelectContact => "Select contact",
            WizardStep::ChooseTrigger => "Choose trigger",
            WizardStep::ComposeMessage => "Compose message",
            WizardStep::Schedule => "Schedule",
            WizardStep::Review => "Review",
        };
        f.write_str(label)
    }
}

/// Why the outreach is happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    FollowUp,
    CheckIn,
    Introduction,
    EventInvite,
}

impl FromStr for TriggerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "follow_up" => Ok(TriggerKind::FollowUp),
            "check_in" => Ok(TriggerKind::CheckIn),
            "introduction" => Ok(TriggerKind::Introduction),
            "event_invite" => Ok(TriggerKind::EventInvite),
            other => anyhow::bail!(
                "Unknown trigger '{}' (expected follow-up, check-in, introduction or event-invite)",
                other
            ),
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TriggerKind::FollowUp => "follow-up",
            TriggerKind::CheckIn => "check-in",
            TriggerKind::Introduction => "introduction",
            TriggerKind::EventInvite => "event-invite",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerDraft {
    pub contact: Option<String>,
    pub trigger: Option<TriggerKind>,
    pub message: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}

/// The composed record produced by a completed wizard, ready to hand to
/// whatever stores outreach triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachRecord {
    pub contact: String,
    pub trigger: TriggerKind,
    pub message: String,
    pub due_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum WizardError {
    /// The named step still needs input before moving on
    Incomplete(WizardStep),
    /// Submit was called before reaching the review step
    NotReady(WizardStep),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Incomplete(step) => write!(f, "Step '{}' is not complete", step),
            WizardError::NotReady(step) => {
                write!(f, "Cannot submit from step '{}'; finish the wizard first", step)
            }
        }
    }
}

impl std::error::Error for WizardError {}

/// Absolute due date `delay` after `now`.
///
/// Fails instead of overflowing when the delay runs past what a
/// timestamp can hold.
pub fn due_after(now: DateTime<Utc>, delay: std::time::Duration) -> anyhow::Result<DateTime<Utc>> {
    let delay = chrono::Duration::from_std(delay)
        .map_err(|_| anyhow::anyhow!("Duration out of range"))?;
    now.checked_add_signed(delay)
        .ok_or_else(|| anyhow::anyhow!("Due date out of range"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub version: u32,
    pub step: WizardStep,
    #[serde(default)]
    pub draft: TriggerDraft,
    pub updated_at: DateTime<Utc>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            version: WIZARD_STATE_VERSION,
            step: WizardStep::SelectContact,
            draft: TriggerDraft::default(),
            updated_at: Utc::now(),
        }
    }

    /// Whether the given step has the input it needs
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::SelectContact => self.draft.contact.is_some(),
            WizardStep::ChooseTrigger => self.draft.trigger.is_some(),
            WizardStep::ComposeMessage => self
                .draft
                .message
                .as_deref()
                .is_some_and(|m| !m.trim().is_empty()),
            WizardStep::Schedule => self.draft.due_at.is_some(),
            WizardStep::Review => WizardStep::ALL[..4]
                .iter()
                .all(|s| self.is_step_complete(*s)),
        }
    }

    pub fn set_contact(&mut self, contact: String) {
        self.draft.contact = Some(contact.trim().to_string()).filter(|c| !c.is_empty());
        self.touch();
    }

    pub fn set_trigger(&mut self, trigger: TriggerKind) {
        self.draft.trigger = Some(trigger);
        self.touch();
    }

    pub fn set_message(&mut self, message: String) {
        self.draft.message = Some(message);
        self.touch();
    }

    pub fn set_due_at(&mut self, due_at: DateTime<Utc>) {
        self.draft.due_at = Some(due_at);
        self.touch();
    }

    /// Move to the next step if the current one is complete.
    /// Advancing from review is a no-op.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if !self.is_step_complete(self.step) {
            return Err(WizardError::Incomplete(self.step));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
            self.touch();
        }
        Ok(self.step)
    }

    /// Move back one step; stays on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.touch();
        }
        self.step
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Compose the outreach record. Only allowed from the review step
    /// with every field filled.
    pub fn submit(&self) -> Result<OutreachRecord, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotReady(self.step));
        }
        let first_missing = WizardStep::ALL[..4]
            .iter()
            .find(|s| !self.is_step_complete(**s));
        if let Some(step) = first_missing {
            return Err(WizardError::Incomplete(*step));
        }

        match (
            &self.draft.contact,
            self.draft.trigger,
            &self.draft.message,
            self.draft.due_at,
        ) {
            (Some(contact), Some(trigger), Some(message), Some(due_at)) => Ok(OutreachRecord {
                contact: contact.clone(),
                trigger,
                message: message.trim().to_string(),
                due_at,
                created_at: Utc::now(),
            }),
            _ => Err(WizardError::Incomplete(WizardStep::Review)),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

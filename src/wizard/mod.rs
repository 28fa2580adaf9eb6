pub mod storage;
pub mod types;

pub use storage::{clear_wizard_state, get_wizard_path, load_wizard_state, save_wizard_state};
pub use types::{due_after, OutreachRecord, TriggerDraft, TriggerKind, WizardError, WizardState, WizardStep};

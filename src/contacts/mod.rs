pub mod import;
pub mod normalize;
pub mod types;

pub use import::{duplicate_hash, import_contacts, normalize_contact, validate_contact, ImportConfig};
pub use normalize::{is_valid_email, is_valid_phone, normalize_email, normalize_name, normalize_phone};
pub use types::{DuplicateRow, ImportReport, NormalizedContact, RawContact, RejectedRow};

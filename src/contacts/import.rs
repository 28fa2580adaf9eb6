use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::normalize::{is_valid_email, is_valid_phone, normalize_email, normalize_name, normalize_phone};
use super::types::{DuplicateRow, ImportReport, NormalizedContact, RawContact, RejectedRow};
use crate::scoring::ContactSource;

/// Import settings.
///
/// Example YAML:
/// ```yaml
/// import:
///   default_country_code: "44"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Prepended to bare 10-digit phone numbers
    pub default_country_code: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_country_code: "1".to_string(),
        }
    }
}

/// Canonicalize one raw row. The duplicate hash is filled in from the
/// normalized fields.
pub fn normalize_contact(raw: &RawContact, config: &ImportConfig) -> NormalizedContact {
    let mut contact = NormalizedContact {
        name: normalize_name(&raw.display_name()),
        email: raw.email.as_deref().and_then(normalize_email),
        phone: raw
            .phone
            .as_deref()
            .and_then(|p| normalize_phone(p, &config.default_country_code)),
        company: raw
            .company
            .as_deref()
            .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|c| !c.is_empty()),
        source: ContactSource::Import,
        duplicate_hash: String::new(),
    };
    contact.duplicate_hash = duplicate_hash(&contact);
    contact
}

/// Stable identity of a contact for duplicate detection.
///
/// Email wins over phone, phone over name + company, so two rows sharing
/// an address collide even if the names are spelled differently.
pub fn duplicate_hash(contact: &NormalizedContact) -> String {
    let key = if let Some(ref email) = contact.email {
        format!("email:{}", email)
    } else if let Some(ref phone) = contact.phone {
        format!("phone:{}", phone)
    } else {
        format!(
            "name:{}|{}",
            contact.name.to_lowercase(),
            contact.company.as_deref().unwrap_or("").to_lowercase()
        )
    };
    blake3::hash(key.as_bytes()).to_hex().to_string()
}

/// Validate a normalized contact.
/// Returns all validation errors at once (not just the first).
pub fn validate_contact(contact: &NormalizedContact) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if contact.name.is_empty() {
        errors.push("name: required".to_string());
    }

    if contact.email.is_none() && contact.phone.is_none() {
        errors.push("contact: email or phone required".to_string());
    }

    if let Some(ref email) = contact.email {
        if !is_valid_email(email) {
            errors.push(format!("email: invalid '{}'", email));
        }
    }

    if let Some(ref phone) = contact.phone {
        if !is_valid_phone(phone) {
            errors.push(format!("phone: invalid '{}'", phone));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Normalize, validate and de-duplicate a batch of rows.
/// The first occurrence of a duplicate is kept.
pub fn import_contacts(rows: Vec<RawContact>, config: &ImportConfig) -> ImportReport {
    let mut report = ImportReport::default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, raw) in rows.iter().enumerate() {
        let contact = normalize_contact(raw, config);

        if let Err(errors) = validate_contact(&contact) {
            report.rejected.push(RejectedRow { index, errors });
            continue;
        }

        if let Some(&first) = seen.get(&contact.duplicate_hash) {
            report.duplicates.push(DuplicateRow {
                index,
                duplicate_of: first,
            });
            continue;
        }

        seen.insert(contact.duplicate_hash.clone(), index);
        report.contacts.push(contact);
    }

    report
}

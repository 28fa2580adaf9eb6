/// Canonicalize a person's name: trim, collapse whitespace, and title-case
/// every word including hyphenated and apostrophe segments ("o'neil-smith"
/// becomes "O'Neil-Smith").
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut capitalize_next = true;
    for c in word.chars() {
        if capitalize_next {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        capitalize_next = c == '-' || c == '\'';
    }
    out
}

/// Trim and lowercase an email address. Returns None if nothing is left.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        None
    } else {
        Some(email)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Reduce a phone number to `+<digits>`.
///
/// A leading `+` or `00` marks an international number and is kept as-is.
/// A bare 10-digit national number gets `default_country_code` prepended.
/// Punctuation and spaces are dropped. Returns None when there are no digits.
pub fn normalize_phone(raw: &str, default_country_code: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    if trimmed.starts_with('+') {
        return Some(format!("+{}", digits));
    }
    if let Some(international) = digits.strip_prefix("00") {
        return Some(format!("+{}", international));
    }
    if digits.len() == 10 {
        let code: String = default_country_code
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        return Some(format!("+{}{}", code, digits));
    }
    Some(format!("+{}", digits))
}

/// E.164 allows at most 15 digits; anything under 7 is not a real number.
pub fn is_valid_phone(phone: &str) -> bool {
    match phone.strip_prefix('+') {
        Some(digits) => {
            (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

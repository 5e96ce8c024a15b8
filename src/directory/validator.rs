//! Credential policy
//!
//! Pure predicates deciding whether a username or password may be registered.
//! Lengths are counted in UTF-16 code units, so a character outside the
//! Basic Multilingual Plane counts as two.

use crate::config::DirectoryConfig;
use log::debug;

/// First code point of every run of ten Unicode decimal digits (category Nd).
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730,
    0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50,
    0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950,
    0x1FBF0,
];

/// Any Unicode decimal digit, not only `0`-`9`.
fn is_decimal_digit(c: char) -> bool {
    let cp = c as u32;
    DECIMAL_DIGIT_ZEROS
        .iter()
        .any(|&zero| (zero..zero + 10).contains(&cp))
}

/// Space, line and paragraph separators except the no-break spaces,
/// plus the ASCII control whitespace including the information separators.
fn is_password_whitespace(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Letters and decimal digits. Everything else is a special character.
fn is_letter_or_digit(c: char) -> bool {
    c.is_alphabetic() || is_decimal_digit(c)
}

fn length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Checks username length and rejects the literal space character.
///
/// Other whitespace such as tabs is accepted here; only passwords reject it.
pub fn is_valid_username(username: &str, config: &DirectoryConfig) -> bool {
    if length(username) < config.min_username_length {
        debug!("Username rejected: shorter than {}", config.min_username_length);
        return false;
    }

    if username.contains(' ') {
        debug!("Username rejected: contains a space");
        return false;
    }

    true
}

/// Checks password length, whitespace, digit count, special characters,
/// and forbidden substrings.
pub fn is_valid_password(password: &str, config: &DirectoryConfig) -> bool {
    if length(password) < config.min_password_length {
        debug!("Password rejected: shorter than {}", config.min_password_length);
        return false;
    }

    let mut digit_count = 0;
    let mut has_special = false;

    for c in password.chars() {
        if is_password_whitespace(c) {
            debug!("Password rejected: contains whitespace");
            return false;
        }
        if is_decimal_digit(c) {
            digit_count += 1;
        }
        if !is_letter_or_digit(c) {
            has_special = true;
        }
    }

    if digit_count < config.min_password_digits {
        debug!(
            "Password rejected: {} digits, need {}",
            digit_count, config.min_password_digits
        );
        return false;
    }

    if !has_special {
        debug!("Password rejected: no special character");
        return false;
    }

    let lowered = password.to_lowercase();
    if let Some(forbidden) = config
        .forbidden_substrings
        .iter()
        .find(|forbidden| lowered.contains(forbidden.as_str()))
    {
        debug!("Password rejected: contains forbidden substring '{}'", forbidden);
        return false;
    }

    true
}

//! Field validators
//!
//! Each validator is a total, pure function from the raw field text to a
//! validity verdict. Empty input is not special-cased here; callers decide
//! whether an empty field is acceptable.
//!
//! The patterns are deliberately lenient heuristics. The email check is not
//! RFC 5322 and the phone check only recognises Australian number shapes.
//!
//! Copyright (c) 2025 Quoteform Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static POSTCODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Minimum number of characters in a trimmed name
pub const MIN_NAME_LENGTH: usize = 2;

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    // +61 or 0, then an area/mobile digit 2-9 and eight more digits; or an 04 mobile.
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^(?:\+61|0)[2-9][0-9]{8}$|^04[0-9]{8}$").expect("phone pattern is valid")
    })
}

fn postcode_regex() -> &'static Regex {
    POSTCODE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("postcode pattern is valid"))
}

/// A name needs at least two characters once surrounding whitespace is removed
pub fn validate_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LENGTH
}

/// `local@domain.tld` shape with no whitespace and a single `@`
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Australian landline or mobile number; whitespace anywhere is ignored
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    phone_regex().is_match(&compact)
}

/// Exactly four ASCII digits
pub fn validate_postcode(postcode: &str) -> bool {
    postcode_regex().is_match(postcode)
}

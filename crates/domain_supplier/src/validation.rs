//! Contact format checks and phone normalization
//!
//! These are pragmatic filters, not guarantees: a number that passes
//! [`is_phone_number`] may still be unreachable and an address that passes
//! [`is_valid_email`] may still bounce.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::error::SupplierError;
use crate::records::Contact;
use crate::request::SupplierRequest;

/// Country code every local number is normalized to
pub const COUNTRY_CODE: &str = "62";

/// Minimum digits a phone number must carry
pub const MIN_PHONE_DIGITS: usize = 9;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Checks that `input` is a plain phone number
///
/// Surrounding whitespace and one leading `+` are ignored. What remains must
/// be all ASCII digits, at least [`MIN_PHONE_DIGITS`] of them.
pub fn is_phone_number(input: &str) -> bool {
    let cleaned = input.trim();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(cleaned);

    cleaned.chars().all(|c| c.is_ascii_digit()) && cleaned.chars().count() >= MIN_PHONE_DIGITS
}

/// Checks that `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalizes a phone number to the international `62...` form
///
/// Leading spaces and `+` are dropped first, so `+62...` comes out as
/// `62...`. A number already starting with `62` is returned as is.
/// Otherwise the first `0` anywhere in the number is removed before `62` is
/// prepended; numbers without a `0` just get the prefix.
pub fn format_phone_number(phone: &str) -> String {
    let phone = phone.trim_start_matches([' ', '+']);

    if phone.starts_with(COUNTRY_CODE) {
        return phone.to_string();
    }

    if phone.contains('0') {
        return format!("{COUNTRY_CODE}{}", phone.replacen('0', "", 1));
    }

    format!("{COUNTRY_CODE}{phone}")
}

/// Checks phone, mobile and email of each contact in order
///
/// Stops at the first offending value; phone errors name the field it came from.
pub fn validate_contacts(contacts: &[Contact]) -> Result<(), SupplierError> {
    for contact in contacts {
        if !is_phone_number(&contact.phone_number) {
            return Err(SupplierError::InvalidPhoneNumber {
                field: "phone_number",
                value: contact.phone_number.clone(),
            });
        }

        if !is_phone_number(&contact.mobile_number) {
            return Err(SupplierError::InvalidPhoneNumber {
                field: "mobile_number",
                value: contact.mobile_number.clone(),
            });
        }

        if !is_valid_email(&contact.email) {
            return Err(SupplierError::InvalidEmail(contact.email.clone()));
        }
    }

    Ok(())
}

/// Runs the structural checks declared on [`SupplierRequest`]
pub fn validate_request(request: &SupplierRequest) -> Result<(), SupplierError> {
    request
        .validate()
        .map_err(|e| SupplierError::InvalidRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_phone_number_examples() {
        assert_eq!(format_phone_number("0812345678"), "62812345678");
        assert_eq!(format_phone_number("+62812345678"), "62812345678");
        assert_eq!(format_phone_number("62812345678"), "62812345678");
        assert_eq!(format_phone_number("812345678"), "62812345678");
    }

    #[test]
    fn test_format_phone_number_removes_first_zero_anywhere() {
        assert_eq!(format_phone_number("8120345678"), "62812345678");
        assert_eq!(format_phone_number("  +0800"), "62800");
    }

    #[test]
    fn test_is_phone_number() {
        assert!(is_phone_number("081234567"));
        assert!(is_phone_number(" +6281234567890123 "));
        assert!(!is_phone_number("08123456"));
        assert!(!is_phone_number("0812-3456-78"));
        assert!(!is_phone_number("++0812345678"));
        assert!(!is_phone_number(""));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.co.id"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn test_validate_contacts_reports_first_failure() {
        let good = Contact {
            name: "Ayu".to_string(),
            email: "ayu@example.com".to_string(),
            phone_number: "0812345678".to_string(),
            mobile_number: "0898765432".to_string(),
            ..Default::default()
        };
        let bad_mobile = Contact {
            mobile_number: "12".to_string(),
            ..good.clone()
        };
        let bad_email = Contact {
            email: "ayu-at-example".to_string(),
            ..good.clone()
        };

        assert!(validate_contacts(&[good.clone()]).is_ok());

        match validate_contacts(&[good.clone(), bad_mobile, bad_email.clone()]) {
            Err(SupplierError::InvalidPhoneNumber { field, value }) => {
                assert_eq!(field, "mobile_number");
                assert_eq!(value, "12");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        match validate_contacts(&[bad_email]) {
            Err(SupplierError::InvalidEmail(value)) => assert_eq!(value, "ayu-at-example"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_formatted_numbers_start_with_country_code(digits in "[0-9]{1,15}") {
            prop_assert!(format_phone_number(&digits).starts_with(COUNTRY_CODE));
        }

        #[test]
        fn prop_formatting_is_idempotent(digits in "[0-9]{1,15}") {
            let once = format_phone_number(&digits);
            prop_assert_eq!(format_phone_number(&once), once);
        }

        #[test]
        fn prop_digit_strings_of_nine_or_more_are_phone_numbers(digits in "[0-9]{9,20}") {
            prop_assert!(is_phone_number(&digits));
            let plus = format!("+{}", digits);
            prop_assert!(is_phone_number(&plus));
        }

        #[test]
        fn prop_short_digit_strings_are_rejected(digits in "[0-9]{0,8}") {
            prop_assert!(!is_phone_number(&digits));
        }
    }
}

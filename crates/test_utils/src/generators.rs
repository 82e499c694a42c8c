//! Property-Based Test Generators
//!
//! Provides proptest strategies for contact data in the shapes callers
//! actually send.

use proptest::prelude::*;

use domain_supplier::Contact;

/// Local Indonesian mobile number, e.g. `0812...`
pub fn local_phone_strategy() -> impl Strategy<Value = String> {
    "08[1-9][0-9]{7,10}"
}

/// Number already in international form, with or without `+`
pub fn international_phone_strategy() -> impl Strategy<Value = String> {
    ("\\+?", "628[1-9][0-9]{7,10}").prop_map(|(plus, digits)| format!("{plus}{digits}"))
}

/// Any phone number that passes the format check
pub fn valid_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![local_phone_strategy(), international_phone_strategy()]
}

/// Strings that fail the phone format check
pub fn invalid_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,8}",
        "[0-9]{3,5}-[0-9]{3,5}-[0-9]{3,5}",
        "[a-z]{9,12}",
    ]
}

/// Email addresses that pass the format check
pub fn valid_email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._]{0,10}", "[a-z]{2,10}", "[a-z]{2,4}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

/// Contacts whose phone, mobile and email all validate
pub fn valid_contact_strategy() -> impl Strategy<Value = Contact> {
    (
        "[A-Z][a-z]{2,10}",
        valid_email_strategy(),
        valid_phone_strategy(),
        valid_phone_strategy(),
        any::<bool>(),
    )
        .prop_map(|(name, email, phone_number, mobile_number, is_main)| Contact {
            name,
            job_position: "Staff".to_string(),
            email,
            phone_number,
            mobile_number,
            is_main,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_supplier::{format_phone_number, is_phone_number, is_valid_email, validate_contacts};

    proptest! {
        #[test]
        fn prop_valid_phones_pass(phone in valid_phone_strategy()) {
            prop_assert!(is_phone_number(&phone));
        }

        #[test]
        fn prop_invalid_phones_fail(phone in invalid_phone_strategy()) {
            prop_assert!(!is_phone_number(&phone));
        }

        #[test]
        fn prop_valid_emails_pass(email in valid_email_strategy()) {
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn prop_local_numbers_normalize_to_country_code(phone in local_phone_strategy()) {
            let formatted = format_phone_number(&phone);
            prop_assert_eq!(formatted, format!("62{}", &phone[1..]));
        }

        #[test]
        fn prop_valid_contacts_validate(contacts in proptest::collection::vec(valid_contact_strategy(), 0..5)) {
            prop_assert!(validate_contacts(&contacts).is_ok());
        }
    }
}

//! Custom Test Assertions
//!
//! Assertion helpers that give more useful failure messages than a bare
//! `assert_eq!` on nested JSON.

use serde_json::Value;

use domain_supplier::FanOutReport;

/// Asserts the shape of an API response envelope
///
/// Checks the numeric `status` and the English half of the localized
/// `message`.
///
/// # Panics
///
/// Panics with the full body if either field differs
pub fn assert_envelope(body: &Value, status: u16, message_en: &str) {
    assert_eq!(
        body["status"].as_u64(),
        Some(u64::from(status)),
        "unexpected envelope status in {body}"
    );
    assert_eq!(
        body["message"]["en"].as_str(),
        Some(message_en),
        "unexpected envelope message in {body}"
    );
}

/// Asserts that an error envelope carries no `data` member
pub fn assert_error_envelope(body: &Value, status: u16, message_en: &str) {
    assert_envelope(body, status, message_en);
    assert!(body.get("data").is_none(), "error envelope carries data: {body}");
}

/// Asserts that a number is in normalized `62...` form
pub fn assert_normalized_phone(phone: &str) {
    assert!(
        phone.starts_with("62") && phone.chars().all(|c| c.is_ascii_digit()),
        "phone number not normalized: {phone}"
    );
}

/// Asserts that every child insert of a fan-out succeeded
pub fn assert_fan_out_complete(report: &FanOutReport) {
    assert!(
        report.is_complete() && report.aborted == 0,
        "fan-out incomplete for {}: {} of {} succeeded, failures {:?}",
        report.supplier_id,
        report.succeeded,
        report.attempted,
        report.failures
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_error_envelope_accepts_matching_body() {
        let body = json!({
            "status": 404,
            "message": {"en": "Suppliers not found", "id": "Supplier tidak ditemukan"}
        });
        assert_error_envelope(&body, 404, "Suppliers not found");
    }

    #[test]
    #[should_panic(expected = "unexpected envelope status")]
    fn test_assert_envelope_rejects_wrong_status() {
        let body = json!({"status": 500, "message": {"en": "x", "id": "y"}});
        assert_envelope(&body, 200, "x");
    }

    #[test]
    fn test_assert_normalized_phone() {
        assert_normalized_phone("62812345678");
    }
}

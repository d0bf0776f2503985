use crate::{CheckoutStatus, PaymentStatus, PaymentStatusReport};

#[test]
fn test_report_unknown_values_fall_back_to_other() {
    let report: PaymentStatusReport = serde_json::from_str(
        r#"{"status": "processing", "payment_status": "initiated"}"#,
    )
    .unwrap();

    assert_eq!(report.status, CheckoutStatus::Other);
    assert_eq!(report.payment_status, PaymentStatus::Other);
    assert!(!report.is_paid());
    assert!(!report.is_expired());
}

#[test]
fn test_report_full_body() {
    let report: PaymentStatusReport = serde_json::from_str(
        r#"{"status": "complete", "payment_status": "paid", "amount_total": 2.99, "currency": "eur"}"#,
    )
    .unwrap();

    assert!(report.is_paid());
    assert_eq!(report.status, CheckoutStatus::Complete);
    assert_eq!(report.amount_total, 2.99);
    assert_eq!(report.currency, "eur");
}

#[test]
fn test_report_expired() {
    let report: PaymentStatusReport =
        serde_json::from_str(r#"{"status": "expired", "payment_status": "unpaid"}"#).unwrap();

    assert!(report.is_expired());
    assert!(!report.is_paid());
}

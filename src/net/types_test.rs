use super::*;

// =============================================================
// Multipart field names
// =============================================================

#[test]
fn multipart_field_names_match_backend_contract() {
    assert_eq!(
        multipart_field_names(),
        ["product_image", "product_name", "brand_name", "personality"]
    );
}

#[test]
fn multipart_field_names_are_distinct() {
    let names = multipart_field_names();
    for (i, a) in names.iter().enumerate() {
        for b in names.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// SubmitError
// =============================================================

#[test]
fn rejected_error_reports_status() {
    let err = SubmitError::Rejected { status: 502 };
    assert_eq!(err.to_string(), "server rejected submission: 502");
}

#[test]
fn unreachable_error_reports_detail() {
    let err = SubmitError::Unreachable {
        detail: "connection refused".to_owned(),
    };
    assert_eq!(err.to_string(), "server unreachable: connection refused");
}

// =============================================================
// ServiceStatus
// =============================================================

#[test]
fn service_status_deserializes_and_ignores_extra_fields() {
    let status: ServiceStatus = serde_json::from_str(
        r#"{"status": "operational", "timestamp": "2025-01-01T00:00:00", "service": "api"}"#,
    )
    .unwrap();
    assert_eq!(status.status, "operational");
    assert_eq!(status.service, "api");
}

#[test]
fn operational_status_is_operational() {
    let status = ServiceStatus {
        status: "operational".to_owned(),
        service: "api".to_owned(),
    };
    assert!(status.is_operational());
}

#[test]
fn degraded_status_is_not_operational() {
    let status = ServiceStatus {
        status: "degraded".to_owned(),
        service: "api".to_owned(),
    };
    assert!(!status.is_operational());
}

use super::*;

fn status(value: &str) -> ServiceStatus {
    ServiceStatus {
        status: value.to_owned(),
        service: "api".to_owned(),
    }
}

#[test]
fn operational_backend_reads_online() {
    let s = status("operational");
    assert_eq!(availability_label(Some(&s)), "Agency online");
    assert_eq!(availability_class(Some(&s)), "status-chip status-chip--online");
}

#[test]
fn degraded_backend_reads_offline() {
    let s = status("maintenance");
    assert_eq!(availability_label(Some(&s)), "Agency offline");
    assert_eq!(availability_class(Some(&s)), "status-chip status-chip--offline");
}

#[test]
fn missing_status_reads_offline() {
    assert_eq!(availability_label(None), "Agency offline");
    assert_eq!(availability_class(None), "status-chip status-chip--offline");
}

use super::*;
use crate::state::form::{REJECTED_MESSAGE, SUCCESS_MESSAGE, UNREACHABLE_MESSAGE};

#[test]
fn submit_button_label_idle() {
    assert_eq!(submit_button_label(false), "Book Influencer");
}

#[test]
fn submit_button_label_in_flight() {
    assert_eq!(submit_button_label(true), "Booking Talent...");
}

#[test]
fn success_copy_gets_success_class() {
    assert_eq!(message_class(SUCCESS_MESSAGE), "message message--success");
}

#[test]
fn failure_copy_gets_error_class() {
    assert_eq!(message_class(REJECTED_MESSAGE), "message message--error");
    assert_eq!(message_class(UNREACHABLE_MESSAGE), "message message--error");
    assert_eq!(message_class(MISSING_IMAGE_MESSAGE), "message message--error");
}

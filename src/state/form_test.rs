use super::*;

fn image(name: &str) -> ImageFile {
    ImageFile { name: name.to_owned() }
}

// =============================================================
// ProductFormState
// =============================================================

#[test]
fn form_state_default_is_empty() {
    let state = ProductFormState::default();
    assert!(state.image.is_none());
    assert!(state.campaign_name.is_empty());
    assert!(state.brand_name.is_empty());
    assert!(state.vibe.is_empty());
}

#[test]
fn with_image_replaces_prior_selection() {
    let state = ProductFormState::default()
        .with_image(image("first.png"))
        .with_image(image("second.png"));
    assert_eq!(state.image, Some(image("second.png")));
}

#[test]
fn with_text_updates_only_its_field() {
    let state = ProductFormState::default()
        .with_text(TextField::CampaignName, "Summer drop".to_owned())
        .with_text(TextField::BrandName, "Acme".to_owned());

    let state = state.with_text(TextField::Vibe, "y2k revival".to_owned());
    assert_eq!(state.campaign_name, "Summer drop");
    assert_eq!(state.brand_name, "Acme");
    assert_eq!(state.vibe, "y2k revival");
}

#[test]
fn with_text_keeps_image_selection() {
    let state = ProductFormState::default()
        .with_image(image("shoe.jpg"))
        .with_text(TextField::BrandName, "Acme".to_owned());
    assert_eq!(state.image, Some(image("shoe.jpg")));
}

#[test]
fn to_payload_requires_an_image() {
    let state = ProductFormState::default()
        .with_text(TextField::CampaignName, "Summer drop".to_owned());
    assert!(state.to_payload().is_none());
}

#[test]
fn to_payload_maps_fields_to_wire_names() {
    let state = ProductFormState::default()
        .with_image(image("shoe.jpg"))
        .with_text(TextField::CampaignName, "Summer drop".to_owned())
        .with_text(TextField::BrandName, "Acme".to_owned())
        .with_text(TextField::Vibe, "quiet luxury".to_owned());

    let payload = state.to_payload().unwrap();
    assert_eq!(payload.image, image("shoe.jpg"));
    assert_eq!(payload.product_name, "Summer drop");
    assert_eq!(payload.brand_name, "Acme");
    assert_eq!(payload.personality, "quiet luxury");
}

#[test]
fn reset_is_default_state() {
    let filled = ProductFormState::default()
        .with_image(image("shoe.jpg"))
        .with_text(TextField::CampaignName, "Summer drop".to_owned());
    assert_ne!(filled, ProductFormState::default());
    assert_eq!(ProductFormState::default(), ProductFormState::default());
}

// =============================================================
// SubmitStatus
// =============================================================

#[test]
fn submit_status_default_is_idle_and_quiet() {
    let status = SubmitStatus::default();
    assert!(!status.submitting);
    assert!(status.message.is_empty());
}

#[test]
fn begin_sets_submitting_and_clears_message() {
    let status = SubmitStatus::default()
        .finish("stale copy")
        .begin();
    assert!(status.submitting);
    assert!(status.message.is_empty());
}

#[test]
fn finish_clears_submitting_and_stores_message() {
    let status = SubmitStatus::default().begin().finish(SUCCESS_MESSAGE);
    assert!(!status.submitting);
    assert_eq!(status.message, SUCCESS_MESSAGE);
}

// =============================================================
// Outcome copy
// =============================================================

#[test]
fn outcome_message_success() {
    assert_eq!(outcome_message(&Ok(())), SUCCESS_MESSAGE);
}

#[test]
fn outcome_message_rejected() {
    let result = Err(SubmitError::Rejected { status: 503 });
    assert_eq!(outcome_message(&result), REJECTED_MESSAGE);
}

#[test]
fn outcome_message_unreachable() {
    let result = Err(SubmitError::Unreachable {
        detail: "connection refused".to_owned(),
    });
    assert_eq!(outcome_message(&result), UNREACHABLE_MESSAGE);
}

#[test]
fn only_success_copy_classifies_as_success() {
    assert!(is_success_message(SUCCESS_MESSAGE));
    assert!(!is_success_message(REJECTED_MESSAGE));
    assert!(!is_success_message(UNREACHABLE_MESSAGE));
    assert!(!is_success_message(MISSING_IMAGE_MESSAGE));
    assert!(!is_success_message(""));
}

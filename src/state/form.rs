//! Booking form state and the user-facing submission copy.
//!
//! DESIGN
//! ======
//! `ProductFormState` follows a replace-on-write discipline: every mutation
//! helper consumes the current value and returns the next one, so each field
//! update is independent and the owning signal swaps whole values instead of
//! mutating in place.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{BookingPayload, SubmitError};

/// Browser file handle for the selected product image.
#[cfg(feature = "hydrate")]
pub type ImageFile = web_sys::File;

/// Host-side stand-in so form-state logic stays testable off-wasm.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
}

/// Shown when submit is attempted with no image selected.
pub const MISSING_IMAGE_MESSAGE: &str = "Please upload a product image";
/// Shown after a 2xx response.
pub const SUCCESS_MESSAGE: &str = "Influencer booked! Campaign in production.";
/// Shown after a non-2xx response.
pub const REJECTED_MESSAGE: &str = "Booking failed. All influencers are busy.";
/// Shown when the request never completed.
pub const UNREACHABLE_MESSAGE: &str = "Agency offline. Try again later.";

/// Only the success copy carries this keyword; message styling keys on it.
const SUCCESS_KEYWORD: &str = "booked";

/// Text fields of the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    CampaignName,
    BrandName,
    Vibe,
}

/// Local state of the booking form.
///
/// Created empty on mount, replaced per field event, and reset to empty
/// after a successful submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFormState {
    /// Selected product image, if any. Submission is blocked while `None`.
    pub image: Option<ImageFile>,
    pub campaign_name: String,
    pub brand_name: String,
    pub vibe: String,
}

impl ProductFormState {
    /// Replace the selected image, dropping any prior selection.
    pub fn with_image(mut self, image: ImageFile) -> Self {
        self.image = Some(image);
        self
    }

    /// Replace a single text field, leaving the others unchanged.
    pub fn with_text(mut self, field: TextField, value: String) -> Self {
        match field {
            TextField::CampaignName => self.campaign_name = value,
            TextField::BrandName => self.brand_name = value,
            TextField::Vibe => self.vibe = value,
        }
        self
    }

    /// Build the wire payload, or `None` while no image is selected.
    ///
    /// The campaign name travels as the wire `product_name`; the vibe text
    /// travels as `personality`.
    pub fn to_payload(&self) -> Option<BookingPayload> {
        let image = self.image.clone()?;
        Some(BookingPayload {
            image,
            product_name: self.campaign_name.clone(),
            brand_name: self.brand_name.clone(),
            personality: self.vibe.clone(),
        })
    }
}

/// Submission handshake state: in-flight flag plus the user-visible message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitStatus {
    pub submitting: bool,
    pub message: String,
}

impl SubmitStatus {
    /// Enter the in-flight state and clear any stale message.
    pub fn begin(mut self) -> Self {
        self.submitting = true;
        self.message.clear();
        self
    }

    /// Leave the in-flight state with the outcome message.
    pub fn finish(mut self, message: impl Into<String>) -> Self {
        self.submitting = false;
        self.message = message.into();
        self
    }
}

/// Map a submission result to its user-facing copy.
pub fn outcome_message(result: &Result<(), SubmitError>) -> &'static str {
    match result {
        Ok(()) => SUCCESS_MESSAGE,
        Err(SubmitError::Rejected { .. }) => REJECTED_MESSAGE,
        Err(SubmitError::Unreachable { .. }) => UNREACHABLE_MESSAGE,
    }
}

/// Whether a status message reports a successful booking.
pub fn is_success_message(message: &str) -> bool {
    message.contains(SUCCESS_KEYWORD)
}

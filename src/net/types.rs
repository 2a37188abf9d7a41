//! Wire-level types for the booking submission.
//!
//! The multipart field names are the backend contract and are fixed
//! regardless of how the form labels or state fields are named.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use thiserror::Error;

use crate::state::form::ImageFile;

/// Multipart field carrying the image bytes.
pub const IMAGE_FIELD: &str = "product_image";
/// Multipart field carrying the campaign/product name.
pub const PRODUCT_NAME_FIELD: &str = "product_name";
/// Multipart field carrying the brand name.
pub const BRAND_NAME_FIELD: &str = "brand_name";
/// Multipart field carrying the vibe/personality description.
pub const PERSONALITY_FIELD: &str = "personality";

/// The four multipart fields in wire order, image first.
pub fn multipart_field_names() -> [&'static str; 4] {
    [
        IMAGE_FIELD,
        PRODUCT_NAME_FIELD,
        BRAND_NAME_FIELD,
        PERSONALITY_FIELD,
    ]
}

/// A validated, ready-to-send booking submission.
///
/// Built from `ProductFormState::to_payload`, which guarantees the image
/// is present. The payload is atomic: all four fields travel together.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingPayload {
    pub image: ImageFile,
    pub product_name: String,
    pub brand_name: String,
    pub personality: String,
}

/// Failure modes of a booking submission.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with a non-2xx status.
    #[error("server rejected submission: {status}")]
    Rejected { status: u16 },
    /// The request never completed.
    #[error("server unreachable: {detail}")]
    Unreachable { detail: String },
}

/// Health payload from `GET /api/status`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

impl ServiceStatus {
    /// Whether the backend reports itself ready to take bookings.
    pub fn is_operational(&self) -> bool {
        self.status == "operational"
    }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `product_form` owns the booking form state and submit handshake;
//! `image_preview` renders the selected image through an ephemeral object
//! URL that it alone is responsible for releasing.

pub mod image_preview;
pub mod product_form;

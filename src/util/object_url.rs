//! Ephemeral object URLs for the image preview.
//!
//! Object URLs pin the file's bytes until revoked, so every URL created
//! here must be released when the selection is replaced or the preview
//! component unmounts. Requires a browser environment; SSR paths no-op.

use crate::state::form::ImageFile;

/// Create a preview URL for the selected image.
///
/// Returns `None` outside the browser or if the browser refuses the blob.
pub fn create(image: &ImageFile) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::Url::create_object_url_with_blob(image).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
        None
    }
}

/// Release a previously created preview URL.
pub fn revoke(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

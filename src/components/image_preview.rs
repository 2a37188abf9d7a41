//! Preview of the selected product image.
//!
//! TRADE-OFFS
//! ==========
//! The preview URL is an ephemeral browser handle, not state: it is derived
//! from the current selection, revoked whenever the selection is replaced,
//! and revoked again on component teardown so the file's bytes are never
//! pinned past their use.

use leptos::prelude::*;

use crate::state::form::ImageFile;
use crate::util::object_url;

#[component]
pub fn ImagePreview(#[prop(into)] image: Signal<Option<ImageFile>>) -> impl IntoView {
    let url = RwSignal::new(None::<String>);

    // Swap the object URL when the selection changes, releasing the old one.
    Effect::new(move |_| {
        let next = image.get().as_ref().and_then(object_url::create);
        url.update(|current| {
            if let Some(old) = current.take() {
                object_url::revoke(&old);
            }
            *current = next;
        });
    });

    on_cleanup(move || {
        if let Some(old) = url.get_untracked() {
            object_url::revoke(&old);
        }
    });

    view! {
        <Show when=move || url.get().is_some()>
            <div class="image-preview">
                <img src=move || url.get().unwrap_or_default() alt="Product preview"/>
            </div>
        </Show>
    }
}

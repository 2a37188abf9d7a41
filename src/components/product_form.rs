//! The booking form: product image plus campaign, brand, and vibe fields.
//!
//! ARCHITECTURE
//! ============
//! Field events replace whole `ProductFormState` values; the submit handler
//! validates locally, then runs exactly one best-effort request per accepted
//! click. The submit control is disabled while a request is in flight and
//! the handler early-returns if invoked anyway.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use leptos::prelude::*;

use crate::components::image_preview::ImagePreview;
use crate::state::form::{
    MISSING_IMAGE_MESSAGE, ProductFormState, SubmitStatus, TextField, is_success_message,
};

/// DOM id of the file input, used to clear its value after a successful
/// submission so the same file can be re-selected.
pub const FILE_INPUT_ID: &str = "product-image";

fn submit_button_label(submitting: bool) -> &'static str {
    if submitting { "Booking Talent..." } else { "Book Influencer" }
}

fn message_class(message: &str) -> &'static str {
    if is_success_message(message) {
        "message message--success"
    } else {
        "message message--error"
    }
}

#[component]
pub fn ProductForm() -> impl IntoView {
    let form = RwSignal::new(ProductFormState::default());
    let status = RwSignal::new(SubmitStatus::default());

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            let Some(input) = input else { return };
            // No file in the change event means no-op; the prior selection stays.
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                form.update(|f| *f = f.clone().with_image(file));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().submitting {
            return;
        }
        let Some(payload) = form.get_untracked().to_payload() else {
            status.update(|s| *s = s.clone().finish(MISSING_IMAGE_MESSAGE));
            return;
        };
        status.update(|s| *s = s.clone().begin());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::form::outcome_message;

            let api_base = crate::util::config::api_base();
            let result = crate::net::api::submit_booking(&api_base, &payload).await;
            match &result {
                Ok(()) => {
                    form.set(ProductFormState::default());
                    clear_file_input();
                }
                Err(e) => leptos::logging::warn!("booking submission failed: {e}"),
            }
            status.update(|s| *s = s.clone().finish(outcome_message(&result)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <form class="product-form" on:submit=on_submit>
            <h2>"Book Your Influencer"</h2>
            <p class="form-description">"No humans. No drama. Just algorithmic perfection."</p>

            <div class="form-group">
                <label for=FILE_INPUT_ID>"visuals"</label>
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    accept="image/*"
                    on:change=on_image_change
                />
                <ImagePreview image=Signal::derive(move || form.get().image)/>
            </div>

            <div class="form-group">
                <label for="campaign-name">"campaign"</label>
                <input
                    type="text"
                    id="campaign-name"
                    placeholder="Summer drop, new collection, etc."
                    prop:value=move || form.get().campaign_name
                    on:input=move |ev| {
                        form.update(|f| {
                            *f = f.clone().with_text(TextField::CampaignName, event_target_value(&ev));
                        });
                    }
                />
            </div>

            <div class="form-group">
                <label for="brand-name">"brand"</label>
                <input
                    type="text"
                    id="brand-name"
                    placeholder="Your brand identity"
                    prop:value=move || form.get().brand_name
                    on:input=move |ev| {
                        form.update(|f| {
                            *f = f.clone().with_text(TextField::BrandName, event_target_value(&ev));
                        });
                    }
                />
            </div>

            <div class="form-group">
                <label for="vibe">"vibe"</label>
                <textarea
                    id="vibe"
                    rows="3"
                    placeholder="dark academia, clean girl, y2k revival, quiet luxury..."
                    prop:value=move || form.get().vibe
                    on:input=move |ev| {
                        form.update(|f| {
                            *f = f.clone().with_text(TextField::Vibe, event_target_value(&ev));
                        });
                    }
                ></textarea>
            </div>

            <button
                class="submit-btn"
                type="submit"
                disabled=move || status.get().submitting
            >
                {move || submit_button_label(status.get().submitting)}
            </button>

            <Show when=move || !status.get().message.is_empty()>
                <p class=move || message_class(&status.get().message)>
                    {move || status.get().message}
                </p>
            </Show>
        </form>
    }
}

/// Reset the file input element so the same file fires a change event again.
#[cfg(feature = "hydrate")]
fn clear_file_input() {
    use wasm_bindgen::JsCast;

    if let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

//! Booking page: hero copy, backend availability chip, and the form.
//!
//! The availability chip comes from a single best-effort `GET /api/status`
//! on load. It is informational only; the form works the same either way.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::prelude::*;

use crate::components::product_form::ProductForm;
use crate::net::types::ServiceStatus;

fn availability_label(status: Option<&ServiceStatus>) -> &'static str {
    match status {
        Some(s) if s.is_operational() => "Agency online",
        _ => "Agency offline",
    }
}

fn availability_class(status: Option<&ServiceStatus>) -> &'static str {
    match status {
        Some(s) if s.is_operational() => "status-chip status-chip--online",
        _ => "status-chip status-chip--offline",
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let availability = RwSignal::new(None::<ServiceStatus>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api_base = crate::util::config::api_base();
        availability.set(crate::net::api::fetch_service_status(&api_base).await);
    });

    view! {
        <div class="product-form-container">
            <div class="hero-section">
                <div class="hero-badge">"EST. 2025 / SILICON VALLEY"</div>
                <h1 class="hero-title">
                    <span class="hero-small">"THE AGENCY FOR"</span>
                    <span class="hero-main">"AI GENERATED"</span>
                    <span class="hero-gradient">"BRAIN ROT"</span>
                </h1>
                <p class="hero-tagline">
                    "Where brands partner with synthetic influencers to manufacture viral addiction"
                </p>
                <span class=move || availability_class(availability.get().as_ref())>
                    {move || availability_label(availability.get().as_ref())}
                </span>
            </div>

            <ProductForm/>

            <div class="future-statement">
                <p>
                    "\"In five years, you won't be able to tell what's real. "
                    "In ten years, you won't care.\""
                </p>
                <span>"- The Algorithm, 2025"</span>
            </div>
        </div>
    }
}

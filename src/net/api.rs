//! REST API helpers for communicating with the agency backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning `None`/`Err` since both endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A submission makes exactly one best-effort request: no retries, no
//! timeout, no cancellation. A non-2xx status and a transport failure are
//! distinct `SubmitError` variants because they map to different user copy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BookingPayload, ServiceStatus, SubmitError};

#[cfg(any(test, feature = "hydrate"))]
fn submit_endpoint(api_base: &str) -> String {
    format!("{api_base}/api/generate_scene")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(api_base: &str) -> String {
    format!("{api_base}/api/status")
}

#[cfg(feature = "hydrate")]
fn transport_error(detail: impl std::fmt::Display) -> SubmitError {
    SubmitError::Unreachable {
        detail: detail.to_string(),
    }
}

/// Submit a booking as multipart form data via `POST /api/generate_scene`.
///
/// # Errors
///
/// Returns `SubmitError::Rejected` when the server answers with a non-2xx
/// status and `SubmitError::Unreachable` when the request never completes.
pub async fn submit_booking(api_base: &str, payload: &BookingPayload) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let url = submit_endpoint(api_base);
        let body = multipart_body(payload)?;
        let resp = gloo_net::http::Request::post(&url)
            .body(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: resp.status(),
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, payload);
        Err(SubmitError::Unreachable {
            detail: "not available on server".to_owned(),
        })
    }
}

/// Build the four-field multipart body in wire order.
#[cfg(feature = "hydrate")]
fn multipart_body(payload: &BookingPayload) -> Result<web_sys::FormData, SubmitError> {
    use super::types::{BRAND_NAME_FIELD, IMAGE_FIELD, PERSONALITY_FIELD, PRODUCT_NAME_FIELD};

    let body = web_sys::FormData::new().map_err(|_| transport_error("form data unavailable"))?;
    body.append_with_blob(IMAGE_FIELD, &payload.image)
        .map_err(|_| transport_error("could not attach image"))?;
    body.append_with_str(PRODUCT_NAME_FIELD, &payload.product_name)
        .map_err(|_| transport_error("could not attach product name"))?;
    body.append_with_str(BRAND_NAME_FIELD, &payload.brand_name)
        .map_err(|_| transport_error("could not attach brand name"))?;
    body.append_with_str(PERSONALITY_FIELD, &payload.personality)
        .map_err(|_| transport_error("could not attach personality"))?;
    Ok(body)
}

/// Fetch backend health from `GET /api/status`.
///
/// Returns `None` on the server or on any failure; the caller renders an
/// offline chip rather than surfacing an error.
pub async fn fetch_service_status(api_base: &str) -> Option<ServiceStatus> {
    #[cfg(feature = "hydrate")]
    {
        let url = status_endpoint(api_base);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ServiceStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        None
    }
}

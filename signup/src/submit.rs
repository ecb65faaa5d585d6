//! ==============================================================================
//! submit.rs - submission sink
//! ==============================================================================
//!
//! purpose:
//!     receives the validated payload from the form controller. the sink is
//!     a console diagnostic for now; `deliver` is the single swap point for
//!     a real transport, and the form controller never knows the difference.
//!
//! ==============================================================================

use serde_json::json;
use shared::Gender;

/// a validated sign-up, field values verbatim
///
/// `image` is the raw file handle the user selected, never the derived
/// preview string.
#[derive(Debug, Clone)]
pub struct SubmitPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
    pub image: Option<web_sys::File>,
}

/// deliver a payload to the diagnostic sink
pub fn deliver(payload: &SubmitPayload) {
    let record = json!({
        "username": payload.username,
        "email": payload.email,
        "password": payload.password,
        "gender": payload.gender,
        "image": payload.image.as_ref().map(|file| file.name()),
    });
    leptos::logging::log!("payload {}", record);
}

//! Event ownership guard.
//!
//! The claimed owner id comes from the request payload, not from a verified
//! session; every handler that mutates an event or validates its tickets
//! goes through this single seam, so a real identity source can replace the
//! claimed id without touching the lifecycle engine.

use crate::domain::models::event::Event;
use crate::error::AppError;

pub fn ensure_event_owner(event: &Event, claimed_owner_id: &str) -> Result<(), AppError> {
    if event.user_id != claimed_owner_id {
        return Err(AppError::Forbidden(
            "Only the creator of this event may perform this action.".into(),
        ));
    }
    Ok(())
}

//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "status": ... }` acknowledgement body used by delete
/// and reorder endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        StatusResponse { status: "ok" }
    }

    pub fn deleted() -> Self {
        StatusResponse { status: "deleted" }
    }
}

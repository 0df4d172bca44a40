//! API DTOs

use serde::Serialize;

/// `{success: true, message}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

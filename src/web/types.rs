//! Request and response payloads of the `web` module.

use serde::{Deserialize, Serialize};

/// The `?email=` query string of the signup and removal routes.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation body returned by the mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<String> for MessageResponse {
    fn from(message: String) -> Self {
        MessageResponse { message }
    }
}

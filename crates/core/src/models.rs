pub mod car;
pub mod slot;
pub mod ticket;

use serde::{Deserialize, Serialize};

/// Plain `{ "message": ... }` body used by endpoints that only report an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

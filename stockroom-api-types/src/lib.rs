pub mod inventory;
pub mod reports;
pub mod result;
pub mod sale;

pub use inventory::{InventoryCreate, InventoryItem, InventoryUpdate};
pub use sale::Sale;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain acknowledgement returned by mutations that don't echo a document back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

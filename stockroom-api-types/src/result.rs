use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JsonError {
    pub status: u16,
    pub detail: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Relates to the inventory table in stockroom_db, but is a clean type.
///
/// Field names on the wire are kept as `_id`, `Products` and `Quantity`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(rename = "Products")]
    pub product_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryCreate {
    #[serde(rename = "Products")]
    pub product_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

/// Partial update, only the supplied fields are written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryUpdate {
    #[serde(rename = "Products", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

impl InventoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none() && self.quantity.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LowQuantityItem {
    pub product_name: String,
    pub quantity: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LowQuantityWarning {
    pub low_quantity_items: Vec<LowQuantityItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryStats {
    pub total_items: u64,
    pub total_quantity: i64,
}

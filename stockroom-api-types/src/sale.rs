use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single recorded sale.
///
/// `tax_5_percent`, `total`, `date` and `time` are computed by the server when a sale
/// is recorded, so callers may leave them out of the request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sale {
    pub invoice_id: String,
    pub branch: String,
    pub city: String,
    pub customer_type: String,
    pub gender: String,
    pub product_line: String,
    pub unit_price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub tax_5_percent: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub payment: String,
    pub cogs: f64,
    pub gross_margin_percentage: f64,
    pub gross_income: f64,
    pub rating: f64,
}

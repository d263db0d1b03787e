use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub invoice_id: String,
    pub branch: String,
    pub city: String,
    pub customer_type: String,
    pub gender: String,
    /// Soft reference to `inventory.product_name`, only checked when the sale is recorded.
    pub product_line: String,
    #[sea_orm(column_type = "Double")]
    pub unit_price: f64,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub tax_5_percent: f64,
    #[sea_orm(column_type = "Double")]
    pub total: f64,
    pub date: String,
    pub time: String,
    pub payment: String,
    #[sea_orm(column_type = "Double")]
    pub cogs: f64,
    #[sea_orm(column_type = "Double")]
    pub gross_margin_percentage: f64,
    #[sea_orm(column_type = "Double")]
    pub gross_income: f64,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub use sea_orm_migration::prelude::*;

mod m20231105_000001_create_inventory;
mod m20231105_000002_create_sales;
mod m20231112_000003_add_product_name_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231105_000001_create_inventory::Migration),
            Box::new(m20231105_000002_create_sales::Migration),
            Box::new(m20231112_000003_add_product_name_index::Migration),
        ]
    }
}

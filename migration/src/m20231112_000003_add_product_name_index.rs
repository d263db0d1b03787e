use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // sales look up their inventory row by name
        manager
            .create_index(
                Index::create()
                    .name("inventory_product_name")
                    .table(Inventory::Table)
                    .col(Inventory::ProductName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("inventory_product_name")
                    .table(Inventory::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Inventory {
    Table,
    ProductName,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::InvoiceId).string().not_null())
                    .col(ColumnDef::new(Sales::Branch).string().not_null())
                    .col(ColumnDef::new(Sales::City).string().not_null())
                    .col(ColumnDef::new(Sales::CustomerType).string().not_null())
                    .col(ColumnDef::new(Sales::Gender).string().not_null())
                    .col(ColumnDef::new(Sales::ProductLine).string().not_null())
                    .col(ColumnDef::new(Sales::UnitPrice).double().not_null())
                    .col(ColumnDef::new(Sales::Quantity).integer().not_null())
                    .col(ColumnDef::new(Sales::Tax5Percent).double().not_null())
                    .col(ColumnDef::new(Sales::Total).double().not_null())
                    .col(ColumnDef::new(Sales::Date).string().not_null())
                    .col(ColumnDef::new(Sales::Time).string().not_null())
                    .col(ColumnDef::new(Sales::Payment).string().not_null())
                    .col(ColumnDef::new(Sales::Cogs).double().not_null())
                    .col(
                        ColumnDef::new(Sales::GrossMarginPercentage)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sales::GrossIncome).double().not_null())
                    .col(ColumnDef::new(Sales::Rating).double().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("sales_product_line")
                    .table(Sales::Table)
                    .col(Sales::ProductLine)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sales {
    Table,
    Id,
    InvoiceId,
    Branch,
    City,
    CustomerType,
    Gender,
    ProductLine,
    UnitPrice,
    Quantity,
    #[iden = "tax_5_percent"]
    Tax5Percent,
    Total,
    Date,
    Time,
    Payment,
    Cogs,
    GrossMarginPercentage,
    GrossIncome,
    Rating,
}

use sea_orm_migration::prelude::*;

/// `DATABASE_URL=... cargo run -p migration -- up` applies the inventory/sales schema by hand.
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}

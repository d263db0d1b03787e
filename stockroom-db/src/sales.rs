use std::time::Instant;

use chrono::Local;
use metrics::{counter, histogram};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use sea_query::{Expr, Order, Query, SelectStatement};
use stockroom_api_types::Sale;
use tracing::{info, instrument};

use crate::{
    entity::{inventory, sale},
    StockroomDb, StoreError, PAGE_CAP,
};

/// Share of the gross amount booked as revenue, the rest is the 5% tax.
const NET_SHARE: f64 = 0.95;
const TAX_SHARE: f64 = 0.05;

/// Fills in `total` and `tax_5_percent` from `unit_price * quantity`.
/// `cogs`, `gross_income` and `rating` are taken as given.
pub(crate) fn price_sale(sale: &mut Sale) {
    let gross = sale.unit_price * f64::from(sale.quantity);
    sale.total = gross * NET_SHARE;
    sale.tax_5_percent = gross * TAX_SHARE;
}

fn stamp_sale(sale: &mut Sale) {
    let now = Local::now();
    sale.date = now.format("%m/%d/%Y").to_string();
    sale.time = now.format("%H:%M:%S").to_string();
}

impl StockroomDb {
    #[instrument(skip(self))]
    pub async fn list_sales(&self) -> Result<Vec<Sale>, StoreError> {
        let sales = self
            .deadline(
                sale::Entity::find()
                    .order_by_asc(sale::Column::Id)
                    .limit(PAGE_CAP)
                    .all(&self.db),
            )
            .await?;
        Ok(sales.into_iter().map(Sale::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn sales_for_product_line(&self, product_line: &str) -> Result<Vec<Sale>, StoreError> {
        let start = Instant::now();
        let sales = self
            .deadline(
                sale::Entity::find()
                    .filter(sale::Column::ProductLine.eq(product_line))
                    .order_by_asc(sale::Column::Id)
                    .limit(PAGE_CAP)
                    .all(&self.db),
            )
            .await?;
        histogram!("stockroom_db_sales_for_product_line_duration_seconds").record(start.elapsed());
        Ok(sales.into_iter().map(Sale::from).collect())
    }

    /// Records a sale against the inventory row named by `sale.product_line`.
    ///
    /// The stock check and the decrement are one conditional `UPDATE`, and it shares a
    /// transaction with the insert: either the sale is stored and the stock reduced, or
    /// neither table changes. The decrement only applies while the row still holds enough
    /// stock, so concurrent sales can't push the quantity below zero.
    ///
    /// `date`/`time` are stamped from the server clock and `total`/`tax_5_percent` are
    /// recomputed, whatever the caller sent.
    #[instrument(skip(self, sale), fields(product_line = %sale.product_line, quantity = sale.quantity))]
    pub async fn record_sale(&self, mut sale: Sale) -> Result<Sale, StoreError> {
        if sale.quantity <= 0 {
            return Err(StoreError::InvalidQuantity(sale.quantity));
        }
        let start = Instant::now();
        stamp_sale(&mut sale);
        let recorded = self.deadline(self.record_sale_in_transaction(sale)).await?;
        histogram!("stockroom_db_record_sale_duration_seconds").record(start.elapsed());
        counter!("stockroom_db_sales_recorded_total").increment(1);
        info!(
            "recorded sale {} of {} x {}",
            recorded.invoice_id, recorded.quantity, recorded.product_line
        );
        Ok(recorded)
    }

    async fn record_sale_in_transaction(&self, mut sale: Sale) -> Result<Sale, StoreError> {
        price_sale(&mut sale);
        let txn = self.db.begin().await?;
        // the guarded decrement goes first so the write lock is held before anything is read
        let decremented = inventory::Entity::update_many()
            .col_expr(
                inventory::Column::Quantity,
                Expr::col(inventory::Column::Quantity).sub(sale.quantity),
            )
            .filter(inventory::Column::Id.in_subquery(first_named(&sale.product_line)))
            .filter(inventory::Column::Quantity.gte(sale.quantity))
            .exec(&txn)
            .await?;
        if decremented.rows_affected == 0 {
            let item = inventory::Entity::find()
                .filter(inventory::Column::ProductName.eq(sale.product_line.as_str()))
                .order_by_asc(inventory::Column::Id)
                .one(&txn)
                .await?
                .ok_or(StoreError::NotFound("Product"))?;
            return Err(StoreError::InsufficientStock {
                required: sale.quantity,
                available: item.quantity,
            });
        }

        let recorded = sale::ActiveModel::from(sale).insert(&txn).await?;
        txn.commit().await?;
        Ok(recorded.into())
    }
}

/// Id of the oldest inventory row carrying `product_name`.
fn first_named(product_name: &str) -> SelectStatement {
    Query::select()
        .column(inventory::Column::Id)
        .from(inventory::Entity)
        .and_where(inventory::Column::ProductName.eq(product_name))
        .order_by(inventory::Column::Id, Order::Asc)
        .limit(1)
        .to_owned()
}

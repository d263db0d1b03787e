use futures::future::try_join;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};
use sea_query::{Expr, Func, SimpleExpr};
use stockroom_api_types::reports::{
    Categories, CategoryRevenue, SalesAnalysis, TotalRevenue, TotalRevenueByCategory, TotalSales,
};
use tracing::instrument;

use crate::{entity::sale, StockroomDb, StoreError};

#[derive(Debug, FromQueryResult)]
struct CategoryRevenueRow {
    product_line: String,
    total_revenue: f64,
}

impl StockroomDb {
    #[instrument(skip(self))]
    pub async fn analyze_sales(&self) -> Result<SalesAnalysis, StoreError> {
        let total_quantity = self.deadline(
            sale::Entity::find()
                .select_only()
                .column_as(sale::Column::Quantity.sum(), "total_quantity")
                .into_tuple::<Option<i64>>()
                .one(&self.db),
        );
        let average_unit_price = self.deadline(
            sale::Entity::find()
                .select_only()
                .column_as(
                    SimpleExpr::FunctionCall(Func::avg(Expr::col(sale::Column::UnitPrice))),
                    "average_unit_price",
                )
                .into_tuple::<Option<f64>>()
                .one(&self.db),
        );
        let (total_quantity, average_unit_price) =
            try_join(total_quantity, average_unit_price).await?;
        Ok(SalesAnalysis {
            total_quantity: total_quantity.flatten().unwrap_or(0),
            average_unit_price: average_unit_price.flatten().unwrap_or(0.0),
        })
    }

    #[instrument(skip(self))]
    pub async fn total_revenue_by_category(&self) -> Result<TotalRevenueByCategory, StoreError> {
        let rows = self
            .deadline(
                sale::Entity::find()
                    .select_only()
                    .column(sale::Column::ProductLine)
                    .column_as(sale::Column::Total.sum(), "total_revenue")
                    .group_by(sale::Column::ProductLine)
                    .order_by_asc(sale::Column::ProductLine)
                    .into_model::<CategoryRevenueRow>()
                    .all(&self.db),
            )
            .await?;
        Ok(TotalRevenueByCategory {
            total_revenue_by_category: rows
                .into_iter()
                .map(|row| CategoryRevenue {
                    product_line: row.product_line,
                    total_revenue: row.total_revenue,
                })
                .collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn sale_categories(&self) -> Result<Categories, StoreError> {
        let categories = self
            .deadline(
                sale::Entity::find()
                    .select_only()
                    .column(sale::Column::ProductLine)
                    .distinct()
                    .order_by_asc(sale::Column::ProductLine)
                    .into_tuple::<String>()
                    .all(&self.db),
            )
            .await?;
        Ok(Categories { categories })
    }

    async fn sum_of_totals(&self) -> Result<f64, StoreError> {
        let sum = self
            .deadline(
                sale::Entity::find()
                    .select_only()
                    .column_as(sale::Column::Total.sum(), "total")
                    .into_tuple::<Option<f64>>()
                    .one(&self.db),
            )
            .await?;
        Ok(sum.flatten().unwrap_or(0.0))
    }

    #[instrument(skip(self))]
    pub async fn total_sales(&self) -> Result<TotalSales, StoreError> {
        Ok(TotalSales {
            total_sales: self.sum_of_totals().await?,
        })
    }

    /// Same figure as [`StockroomDb::total_sales`]; both report the summed net `total`.
    #[instrument(skip(self))]
    pub async fn total_revenue(&self) -> Result<TotalRevenue, StoreError> {
        Ok(TotalRevenue {
            total_revenue: self.sum_of_totals().await?,
        })
    }
}

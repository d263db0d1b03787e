use axum::{extract::State, Json};
use stockroom_api_types::{
    reports::{Categories, SalesAnalysis, TotalRevenue, TotalRevenueByCategory, TotalSales},
    result::JsonError,
    Sale,
};
use stockroom_db::StockroomDb;
use tracing::instrument;

use crate::web::{
    error::ApiError,
    extract::{ApiJson, ApiPath},
};

#[utoipa::path(
    get,
    path = "/sales",
    tag = "sales",
    responses((status = 200, description = "First 100 recorded sales", body = Vec<Sale>))
)]
#[instrument(skip(db))]
pub(crate) async fn get_sales(State(db): State<StockroomDb>) -> Result<Json<Vec<Sale>>, ApiError> {
    Ok(Json(db.list_sales().await?))
}

#[utoipa::path(
    get,
    path = "/sales/analyze",
    tag = "sales",
    responses((status = 200, body = SalesAnalysis))
)]
#[instrument(skip(db))]
pub(crate) async fn analyze_sales(
    State(db): State<StockroomDb>,
) -> Result<Json<SalesAnalysis>, ApiError> {
    Ok(Json(db.analyze_sales().await?))
}

#[utoipa::path(
    get,
    path = "/sales/total_revenue_by_category",
    tag = "sales",
    responses((status = 200, body = TotalRevenueByCategory))
)]
#[instrument(skip(db))]
pub(crate) async fn total_revenue_by_category(
    State(db): State<StockroomDb>,
) -> Result<Json<TotalRevenueByCategory>, ApiError> {
    Ok(Json(db.total_revenue_by_category().await?))
}

#[utoipa::path(
    get,
    path = "/sales/categories",
    tag = "sales",
    responses((status = 200, body = Categories))
)]
#[instrument(skip(db))]
pub(crate) async fn get_categories(
    State(db): State<StockroomDb>,
) -> Result<Json<Categories>, ApiError> {
    Ok(Json(db.sale_categories().await?))
}

#[utoipa::path(
    get,
    path = "/sales/total_sales",
    tag = "sales",
    responses((status = 200, body = TotalSales))
)]
#[instrument(skip(db))]
pub(crate) async fn total_sales(State(db): State<StockroomDb>) -> Result<Json<TotalSales>, ApiError> {
    Ok(Json(db.total_sales().await?))
}

#[utoipa::path(
    get,
    path = "/sales/total_revenue",
    tag = "sales",
    responses((status = 200, body = TotalRevenue))
)]
#[instrument(skip(db))]
pub(crate) async fn total_revenue(
    State(db): State<StockroomDb>,
) -> Result<Json<TotalRevenue>, ApiError> {
    Ok(Json(db.total_revenue().await?))
}

#[utoipa::path(
    get,
    path = "/sales/{product_line}",
    tag = "sales",
    params(("product_line" = String, Path, description = "Exact product line")),
    responses((status = 200, body = Vec<Sale>))
)]
#[instrument(skip(db))]
pub(crate) async fn get_sales_for_product(
    State(db): State<StockroomDb>,
    ApiPath(product_line): ApiPath<String>,
) -> Result<Json<Vec<Sale>>, ApiError> {
    Ok(Json(db.sales_for_product_line(&product_line).await?))
}

#[utoipa::path(
    post,
    path = "/sales/new_sale",
    tag = "sales",
    request_body = Sale,
    responses(
        (status = 200, description = "The stored sale with totals and timestamp filled in", body = Sale),
        (status = 400, description = "Quantity is not positive", body = JsonError),
        (status = 404, description = "Unknown product or not enough stock", body = JsonError)
    )
)]
#[instrument(skip(db, sale), fields(invoice_id = %sale.invoice_id))]
pub(crate) async fn add_new_sale(
    State(db): State<StockroomDb>,
    ApiJson(sale): ApiJson<Sale>,
) -> Result<Json<Sale>, ApiError> {
    Ok(Json(db.record_sale(sale).await?))
}

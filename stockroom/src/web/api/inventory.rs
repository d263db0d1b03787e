use axum::{extract::State, Json};
use stockroom_api_types::{
    inventory::{InventoryStats, LowQuantityWarning},
    result::JsonError,
    InventoryCreate, InventoryItem, InventoryUpdate, Message,
};
use stockroom_db::StockroomDb;
use tracing::instrument;

use crate::web::{
    error::ApiError,
    extract::{ApiJson, ApiPath},
};

#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses((status = 200, description = "First 100 inventory items", body = Vec<InventoryItem>))
)]
#[instrument(skip(db))]
pub(crate) async fn get_inventory(
    State(db): State<StockroomDb>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    Ok(Json(db.list_inventory().await?))
}

#[utoipa::path(
    get,
    path = "/inventory/low_quantity_warning",
    tag = "inventory",
    responses((status = 200, description = "Items holding fewer than 10 units", body = LowQuantityWarning))
)]
#[instrument(skip(db))]
pub(crate) async fn check_low_quantity_warning(
    State(db): State<StockroomDb>,
) -> Result<Json<LowQuantityWarning>, ApiError> {
    Ok(Json(db.low_quantity_items().await?))
}

#[utoipa::path(
    get,
    path = "/inventory/stats",
    tag = "inventory",
    responses((status = 200, body = InventoryStats))
)]
#[instrument(skip(db))]
pub(crate) async fn get_inventory_stats(
    State(db): State<StockroomDb>,
) -> Result<Json<InventoryStats>, ApiError> {
    Ok(Json(db.inventory_stats().await?))
}

#[utoipa::path(
    get,
    path = "/inventory/{item_id}",
    tag = "inventory",
    params(("item_id" = i32, Path, description = "Inventory item id")),
    responses(
        (status = 200, body = InventoryItem),
        (status = 404, description = "Item not found", body = JsonError)
    )
)]
#[instrument(skip(db))]
pub(crate) async fn get_item(
    State(db): State<StockroomDb>,
    ApiPath(item_id): ApiPath<i32>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(db.get_inventory_item(item_id).await?))
}

#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    request_body = InventoryCreate,
    responses(
        (status = 200, description = "The stored item", body = InventoryItem),
        (status = 400, description = "Negative quantity", body = JsonError)
    )
)]
#[instrument(skip(db))]
pub(crate) async fn add_inventory(
    State(db): State<StockroomDb>,
    ApiJson(item): ApiJson<InventoryCreate>,
) -> Result<Json<InventoryItem>, ApiError> {
    Ok(Json(db.add_inventory_item(item).await?))
}

#[utoipa::path(
    put,
    path = "/inventory/{item_id}",
    tag = "inventory",
    params(("item_id" = i32, Path, description = "Inventory item id")),
    request_body = InventoryUpdate,
    responses(
        (status = 200, body = Message),
        (status = 400, description = "Negative quantity", body = JsonError),
        (status = 404, description = "Item not found", body = JsonError)
    )
)]
#[instrument(skip(db))]
pub(crate) async fn update_inventory(
    State(db): State<StockroomDb>,
    ApiPath(item_id): ApiPath<i32>,
    ApiJson(updated_item): ApiJson<InventoryUpdate>,
) -> Result<Json<Message>, ApiError> {
    db.update_inventory_item(item_id, updated_item).await?;
    Ok(Json(Message::new("Item updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/inventory/{item_id}",
    tag = "inventory",
    params(("item_id" = i32, Path, description = "Inventory item id")),
    responses(
        (status = 200, body = Message),
        (status = 404, description = "Item not found", body = JsonError)
    )
)]
#[instrument(skip(db))]
pub(crate) async fn delete_inventory(
    State(db): State<StockroomDb>,
    ApiPath(item_id): ApiPath<i32>,
) -> Result<Json<Message>, ApiError> {
    db.delete_inventory_item(item_id).await?;
    Ok(Json(Message::new("Item deleted successfully")))
}

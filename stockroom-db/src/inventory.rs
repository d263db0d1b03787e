use std::time::Instant;

use metrics::histogram;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use stockroom_api_types::{
    inventory::{InventoryStats, LowQuantityItem, LowQuantityWarning},
    InventoryCreate, InventoryItem, InventoryUpdate,
};
use tracing::{instrument, warn};

use crate::{entity::inventory, StockroomDb, StoreError, PAGE_CAP};

/// Items holding fewer units than this are reported as running low.
pub(crate) const LOW_QUANTITY_THRESHOLD: i32 = 10;

fn check_stock_level(quantity: i32) -> Result<(), StoreError> {
    if quantity < 0 {
        return Err(StoreError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl StockroomDb {
    #[instrument(skip(self))]
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let start = Instant::now();
        let items = self
            .deadline(
                inventory::Entity::find()
                    .order_by_asc(inventory::Column::Id)
                    .limit(PAGE_CAP)
                    .all(&self.db),
            )
            .await?;
        histogram!("stockroom_db_list_inventory_duration_seconds").record(start.elapsed());
        Ok(items.into_iter().map(InventoryItem::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_inventory_item(&self, id: i32) -> Result<InventoryItem, StoreError> {
        let item = self
            .deadline(inventory::Entity::find_by_id(id).one(&self.db))
            .await?
            .ok_or(StoreError::NotFound("Item"))?;
        Ok(item.into())
    }

    #[instrument(skip(self))]
    pub async fn add_inventory_item(
        &self,
        item: InventoryCreate,
    ) -> Result<InventoryItem, StoreError> {
        let InventoryCreate {
            product_name,
            quantity,
        } = item;
        check_stock_level(quantity)?;
        let model = inventory::ActiveModel {
            id: ActiveValue::NotSet,
            product_name: ActiveValue::Set(product_name),
            quantity: ActiveValue::Set(quantity),
        };
        let model = self.deadline(model.insert(&self.db)).await?;
        Ok(model.into())
    }

    /// Writes only the fields present on `update`. A missing row is reported as `NotFound`
    /// even when there is nothing to write.
    #[instrument(skip(self))]
    pub async fn update_inventory_item(
        &self,
        id: i32,
        update: InventoryUpdate,
    ) -> Result<(), StoreError> {
        if let Some(quantity) = update.quantity {
            check_stock_level(quantity)?;
        }
        if update.is_empty() {
            return self.get_inventory_item(id).await.map(|_| ());
        }
        let InventoryUpdate {
            product_name,
            quantity,
        } = update;
        let changes = inventory::ActiveModel {
            id: ActiveValue::NotSet,
            product_name: product_name.map_or(ActiveValue::NotSet, ActiveValue::Set),
            quantity: quantity.map_or(ActiveValue::NotSet, ActiveValue::Set),
        };
        let result = self
            .deadline(
                inventory::Entity::update_many()
                    .set(changes)
                    .filter(inventory::Column::Id.eq(id))
                    .exec(&self.db),
            )
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound("Item"));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_inventory_item(&self, id: i32) -> Result<(), StoreError> {
        let result = self
            .deadline(inventory::Entity::delete_by_id(id).exec(&self.db))
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound("Item"));
        }
        Ok(())
    }

    /// Collects every item under [`LOW_QUANTITY_THRESHOLD`]. Each one is logged as a warning
    /// but never fails the listing.
    #[instrument(skip(self))]
    pub async fn low_quantity_items(&self) -> Result<LowQuantityWarning, StoreError> {
        let items = self
            .deadline(
                inventory::Entity::find()
                    .filter(inventory::Column::Quantity.lt(LOW_QUANTITY_THRESHOLD))
                    .order_by_asc(inventory::Column::Id)
                    .limit(PAGE_CAP)
                    .all(&self.db),
            )
            .await?;
        let low_quantity_items = items
            .into_iter()
            .map(|item| {
                warn!(
                    "Product ({}) quantity is low. Current quantity: {}",
                    item.product_name, item.quantity
                );
                LowQuantityItem {
                    product_name: item.product_name,
                    quantity: item.quantity,
                }
            })
            .collect();
        Ok(LowQuantityWarning { low_quantity_items })
    }

    #[instrument(skip(self))]
    pub async fn inventory_stats(&self) -> Result<InventoryStats, StoreError> {
        let total_items = self
            .deadline(inventory::Entity::find().count(&self.db))
            .await?;
        let total_quantity = self
            .deadline(
                inventory::Entity::find()
                    .select_only()
                    .column_as(inventory::Column::Quantity.sum(), "total_quantity")
                    .into_tuple::<Option<i64>>()
                    .one(&self.db),
            )
            .await?;
        Ok(InventoryStats {
            total_items,
            total_quantity: total_quantity.flatten().unwrap_or(0),
        })
    }
}

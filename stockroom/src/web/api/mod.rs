mod inventory;
mod sales;

use stockroom_api_types::{
    inventory::{InventoryStats, LowQuantityItem, LowQuantityWarning},
    reports::{
        Categories, CategoryRevenue, SalesAnalysis, TotalRevenue, TotalRevenueByCategory,
        TotalSales,
    },
    result::JsonError,
    InventoryCreate, InventoryItem, InventoryUpdate, Message, Sale,
};
use utoipa::OpenApi;

pub(crate) use inventory::{
    add_inventory, check_low_quantity_warning, delete_inventory, get_inventory,
    get_inventory_stats, get_item, update_inventory,
};
pub(crate) use sales::{
    add_new_sale, analyze_sales, get_categories, get_sales, get_sales_for_product,
    total_revenue, total_revenue_by_category, total_sales,
};

/// OpenAPI document served alongside the Swagger UI at `/home`.
#[derive(OpenApi)]
#[openapi(
    info(title = "stockroom", description = "Inventory and sales records"),
    paths(
        inventory::get_inventory,
        inventory::check_low_quantity_warning,
        inventory::get_inventory_stats,
        inventory::get_item,
        inventory::add_inventory,
        inventory::update_inventory,
        inventory::delete_inventory,
        sales::get_sales,
        sales::analyze_sales,
        sales::total_revenue_by_category,
        sales::get_categories,
        sales::total_sales,
        sales::total_revenue,
        sales::get_sales_for_product,
        sales::add_new_sale,
    ),
    components(schemas(
        InventoryItem,
        InventoryCreate,
        InventoryUpdate,
        LowQuantityItem,
        LowQuantityWarning,
        InventoryStats,
        Sale,
        SalesAnalysis,
        CategoryRevenue,
        TotalRevenueByCategory,
        Categories,
        TotalSales,
        TotalRevenue,
        Message,
        JsonError,
    )),
    tags(
        (name = "inventory", description = "Stock levels"),
        (name = "sales", description = "Sale recording and reports")
    )
)]
pub(crate) struct ApiDoc;

pub mod api;
pub mod error;
pub(crate) mod extract;
pub mod state;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use self::error::ApiError;
pub(crate) use self::state::WebState;
use crate::web_metrics::track_metrics;

pub(crate) fn router(state: WebState) -> Router {
    Router::new()
        .route("/inventory", get(api::get_inventory).post(api::add_inventory))
        .route(
            "/inventory/low_quantity_warning",
            get(api::check_low_quantity_warning),
        )
        .route("/inventory/stats", get(api::get_inventory_stats))
        .route(
            "/inventory/{item_id}",
            get(api::get_item)
                .put(api::update_inventory)
                .delete(api::delete_inventory),
        )
        .route("/sales", get(api::get_sales))
        .route("/sales/analyze", get(api::analyze_sales))
        .route(
            "/sales/total_revenue_by_category",
            get(api::total_revenue_by_category),
        )
        .route("/sales/categories", get(api::get_categories))
        .route("/sales/total_sales", get(api::total_sales))
        .route("/sales/total_revenue", get(api::total_revenue))
        .route("/sales/new_sale", post(api::add_new_sale))
        .route("/sales/{product_line}", get(api::get_sales_for_product))
        .merge(SwaggerUi::new("/home").url("/openapi.json", api::ApiDoc::openapi()))
        .fallback(fallback)
        .route_layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => tracing::error!("unable to listen for shutdown signal {e}"),
    }
}

async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}

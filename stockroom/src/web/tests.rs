//! HTTP surface tests.
//!
//! Starts the router on an ephemeral port over SQLite and exercises it with reqwest.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use stockroom_db::{DbOptions, StockroomDb};

use super::{router, WebState};

async fn start_server() -> String {
    let db = StockroomDb::connect(DbOptions {
        max_connections: 1,
        ..DbOptions::new("sqlite::memory:")
    })
    .await
    .unwrap();
    serve(db).await
}

/// Server over a file-backed database with a real connection pool, so requests run
/// their transactions side by side.
async fn start_pooled_server(max_connections: u32) -> (tempfile::TempDir, String) {
    let dir = tempfile::Builder::new()
        .prefix("stockroom-web")
        .tempdir()
        .unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("stockroom.db").display());
    let db = StockroomDb::connect(DbOptions {
        max_connections,
        ..DbOptions::new(url)
    })
    .await
    .unwrap();
    (dir, serve(db).await)
}

async fn serve(db: StockroomDb) -> String {
    let app = router(WebState { db });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn add_item(client: &Client, base: &str, name: &str, quantity: i32) -> Value {
    let resp = client
        .post(format!("{base}/inventory"))
        .json(&json!({ "Products": name, "Quantity": quantity }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn quantity_of(client: &Client, base: &str, id: &Value) -> i64 {
    let item: Value = client
        .get(format!("{base}/inventory/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    item["Quantity"].as_i64().unwrap()
}

async fn sales(client: &Client, base: &str) -> Vec<Value> {
    client
        .get(format!("{base}/sales"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn sale_body(product_line: &str, unit_price: f64, quantity: i32) -> Value {
    json!({
        "invoice_id": "226-31-3081",
        "branch": "C",
        "city": "Naypyitaw",
        "customer_type": "Normal",
        "gender": "Female",
        "product_line": product_line,
        "unit_price": unit_price,
        "quantity": quantity,
        "tax_5_percent": 0.0,
        "total": 0.0,
        "date": "3/8/2019",
        "time": "10:29",
        "payment": "Cash",
        "cogs": 76.4,
        "gross_margin_percentage": 4.761904762,
        "gross_income": 3.82,
        "rating": 9.6
    })
}

#[tokio::test]
async fn inventory_crud() {
    let base = start_server().await;
    let client = Client::new();

    let created = add_item(&client, &base, "Electronic accessories", 30).await;
    assert_eq!(created["Products"], "Electronic accessories");
    assert_eq!(created["Quantity"], 30);
    let id = created["_id"].clone();

    let listed: Vec<Value> = client
        .get(format!("{base}/inventory"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let resp = client
        .put(format!("{base}/inventory/{id}"))
        .json(&json!({ "Quantity": 12 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Item updated successfully" }));
    assert_eq!(quantity_of(&client, &base, &id).await, 12);

    let resp = client
        .delete(format!("{base}/inventory/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Item deleted successfully" }));

    let resp = client
        .get(format!("{base}/inventory/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": 404, "detail": "Item not found" }));
}

#[tokio::test]
async fn update_and_delete_of_missing_item_are_404() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .put(format!("{base}/inventory/77"))
        .json(&json!({ "Products": "Nothing" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .delete(format!("{base}/inventory/77"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn low_quantity_warning_lists_only_items_under_ten() {
    let base = start_server().await;
    let client = Client::new();
    add_item(&client, &base, "Health and beauty", 9).await;
    add_item(&client, &base, "Sports and travel", 10).await;
    add_item(&client, &base, "Home and lifestyle", 1).await;
    add_item(&client, &base, "Food and beverages", 80).await;

    let resp = client
        .get(format!("{base}/inventory/low_quantity_warning"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "low_quantity_items": [
                { "product_name": "Health and beauty", "quantity": 9 },
                { "product_name": "Home and lifestyle", "quantity": 1 }
            ]
        })
    );
}

#[tokio::test]
async fn stats_on_empty_inventory_are_zero() {
    let base = start_server().await;
    let body: Value = Client::new()
        .get(format!("{base}/inventory/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "total_items": 0, "total_quantity": 0 }));
}

#[tokio::test]
async fn sale_for_unknown_product_is_404_and_changes_nothing() {
    let base = start_server().await;
    let client = Client::new();
    let item = add_item(&client, &base, "Health and beauty", 20).await;

    let resp = client
        .post(format!("{base}/sales/new_sale"))
        .json(&sale_body("Fashion accessories", 10.0, 1))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Product not found");

    assert!(sales(&client, &base).await.is_empty());
    assert_eq!(quantity_of(&client, &base, &item["_id"]).await, 20);
}

#[tokio::test]
async fn sale_over_stock_is_404_and_changes_nothing() {
    let base = start_server().await;
    let client = Client::new();
    let item = add_item(&client, &base, "Health and beauty", 2).await;

    let resp = client
        .post(format!("{base}/sales/new_sale"))
        .json(&sale_body("Health and beauty", 10.0, 3))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Insufficient quantity in inventory");

    assert!(sales(&client, &base).await.is_empty());
    assert_eq!(quantity_of(&client, &base, &item["_id"]).await, 2);
}

#[tokio::test]
async fn sale_computes_totals_and_decrements_stock() {
    let base = start_server().await;
    let client = Client::new();
    let item = add_item(&client, &base, "Health and beauty", 20).await;

    let resp = client
        .post(format!("{base}/sales/new_sale"))
        .json(&sale_body("Health and beauty", 10.0, 3))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let sale: Value = resp.json().await.unwrap();
    assert_eq!(sale["total"], 28.5);
    assert_eq!(sale["tax_5_percent"], 1.5);
    assert_ne!(sale["date"], "3/8/2019");
    assert_ne!(sale["time"], "10:29");

    assert_eq!(quantity_of(&client, &base, &item["_id"]).await, 17);
    assert_eq!(sales(&client, &base).await, vec![sale]);
}

#[tokio::test]
async fn repeated_sale_is_recorded_twice() {
    let base = start_server().await;
    let client = Client::new();
    let item = add_item(&client, &base, "Food and beverages", 10).await;

    for _ in 0..2 {
        let resp = client
            .post(format!("{base}/sales/new_sale"))
            .json(&sale_body("Food and beverages", 4.0, 3))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(quantity_of(&client, &base, &item["_id"]).await, 4);
    assert_eq!(sales(&client, &base).await.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sales_for_the_last_units_let_one_through() {
    let (_dir, base) = start_pooled_server(6).await;
    let client = Client::new();
    let item = add_item(&client, &base, "Sports and travel", 5).await;

    let requests = (0..6).map(|_| {
        let client = client.clone();
        let url = format!("{base}/sales/new_sale");
        async move {
            client
                .post(url)
                .json(&sale_body("Sports and travel", 3.0, 5))
                .send()
                .await
                .unwrap()
                .status()
        }
    });
    let statuses = futures::future::join_all(requests).await;

    let ok = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    assert_eq!(ok, 1, "statuses: {statuses:?}");
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::OK || *s == StatusCode::NOT_FOUND));
    assert_eq!(quantity_of(&client, &base, &item["_id"]).await, 0);
    assert_eq!(sales(&client, &base).await.len(), 1);
}

#[tokio::test]
async fn non_positive_sale_quantity_is_rejected() {
    let base = start_server().await;
    let client = Client::new();
    let item = add_item(&client, &base, "Health and beauty", 5).await;

    let resp = client
        .post(format!("{base}/sales/new_sale"))
        .json(&sale_body("Health and beauty", 10.0, -2))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(quantity_of(&client, &base, &item["_id"]).await, 5);
}

#[tokio::test]
async fn reports_over_recorded_sales() {
    let base = start_server().await;
    let client = Client::new();
    add_item(&client, &base, "Health and beauty", 50).await;
    add_item(&client, &base, "Food and beverages", 50).await;
    for (line, price, quantity) in [
        ("Health and beauty", 10.0, 3),
        ("Food and beverages", 20.0, 1),
    ] {
        let resp = client
            .post(format!("{base}/sales/new_sale"))
            .json(&sale_body(line, price, quantity))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let get = |path: &'static str| {
        let client = client.clone();
        let base = base.clone();
        async move {
            let resp = client.get(format!("{base}{path}")).send().await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{path}");
            resp.json::<Value>().await.unwrap()
        }
    };

    assert_eq!(
        get("/sales/analyze").await,
        json!({ "total_quantity": 4, "average_unit_price": 15.0 })
    );
    assert_eq!(
        get("/sales/total_revenue_by_category").await,
        json!({
            "total_revenue_by_category": [
                { "_id": "Food and beverages", "total_revenue": 19.0 },
                { "_id": "Health and beauty", "total_revenue": 28.5 }
            ]
        })
    );
    assert_eq!(
        get("/sales/categories").await,
        json!({ "categories": ["Food and beverages", "Health and beauty"] })
    );
    assert_eq!(get("/sales/total_sales").await, json!({ "total_sales": 47.5 }));
    assert_eq!(
        get("/sales/total_revenue").await,
        json!({ "total_revenue": 47.5 })
    );

    let for_line = get("/sales/Health%20and%20beauty").await;
    let for_line = for_line.as_array().unwrap();
    assert_eq!(for_line.len(), 1);
    assert_eq!(for_line[0]["quantity"], 3);
}

#[tokio::test]
async fn reports_on_empty_sales_are_zero() {
    let base = start_server().await;
    let body: Value = Client::new()
        .get(format!("{base}/sales/analyze"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "total_quantity": 0, "average_unit_price": 0.0 }));
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let base = start_server().await;
    let resp = Client::new()
        .get(format!("{base}/inventory"))
        .header("origin", "https://dashboard.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "https://dashboard.example.com"
    );
    assert_eq!(resp.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let base = start_server().await;
    let resp = Client::new()
        .get(format!("{base}/warehouse"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": 404, "detail": "Not found" }));
}

#[tokio::test]
async fn malformed_sale_body_gets_json_error() {
    let base = start_server().await;
    let resp = Client::new()
        .post(format!("{base}/sales/new_sale"))
        .json(&json!({ "product_line": "Health and beauty" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.headers()["content-type"], "application/json");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], 422);
    assert!(body["detail"].as_str().unwrap().contains("invoice_id"));
}

#[tokio::test]
async fn non_json_inventory_body_gets_json_error() {
    let base = start_server().await;
    let resp = Client::new()
        .post(format!("{base}/inventory"))
        .body("Products=Fashion accessories")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], 415);
}

#[tokio::test]
async fn non_numeric_item_id_gets_json_error() {
    let base = start_server().await;
    let resp = Client::new()
        .get(format!("{base}/inventory/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()["content-type"], "application/json");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn negative_stock_is_rejected() {
    let base = start_server().await;
    let resp = Client::new()
        .post(format!("{base}/inventory"))
        .json(&json!({ "Products": "Sports and travel", "Quantity": -3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": 400, "detail": "Invalid quantity -3" }));
}

#[tokio::test]
async fn api_docs_are_served() {
    let base = start_server().await;
    let client = Client::new();

    let spec: Value = client
        .get(format!("{base}/openapi.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    for path in ["/inventory", "/inventory/{item_id}", "/sales/new_sale", "/sales/analyze"] {
        assert!(spec["paths"].get(path).is_some(), "{path} missing");
    }
    assert!(spec["components"]["schemas"]["InventoryItem"]["properties"]
        .get("Products")
        .is_some());

    let resp = client.get(format!("{base}/home/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("swagger"));
}

//! HTTP-level integration tests for vendors, invoices and dashboard stats.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(app: axum::Router, token: &str, name: &str, spend: &str) -> i64 {
    let body = json!({
        "name": name,
        "budget": "10000.00",
        "actual_spend": spend,
        "start_date": "2026-01-01",
        "end_date": "2026-12-31"
    });
    let response = post_json_auth(app, "/api/projects", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn invoice_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM invoices")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Vendors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn vendors_are_created_and_listed_by_name(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "buyer@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    for name in ["Zenith Timber", "Acme Steel"] {
        let body = json!({ "name": name, "category": "Materials", "contact_email": "sales@vendor.test" });
        let response = post_json_auth(app.clone(), "/api/vendors", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(app, "/api/vendors", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["name"], "Acme Steel");
    assert_eq!(json[1]["name"], "Zenith Timber");
    assert_eq!(json[0]["contact_email"], "sales@vendor.test");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn vendor_with_bad_email_or_blank_name_is_rejected(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "buyer@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    for body in [
        json!({ "name": "Acme", "contact_email": "not-an-email" }),
        json!({ "name": "   " }),
    ] {
        let response = post_json_auth(app.clone(), "/api/vendors", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn vendors_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/vendors").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn invoice_lifecycle(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "fm@test.com", "Finance Manager").await;
    let app = common::build_test_app(pool);
    let project = create_project(app.clone(), &token, "Bridge", "0").await;

    let body = json!({
        "project_id": project,
        "vendor_name": "Acme Steel",
        "amount": "1200",
        "type": "Payable",
        "due_date": "2026-06-30"
    });
    let response = post_json_auth(app.clone(), "/api/invoices", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["type"], "Payable");
    assert_eq!(created["amount"], "1200.00");
    let id = created["id"].as_i64().unwrap();

    let body = json!({
        "vendor_name": "City Council",
        "amount": 300.5,
        "type": "Receivable",
        "due_date": "2026-05-01"
    });
    let response = post_json_auth(app.clone(), "/api/invoices", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app.clone(), "/api/invoices", &token).await;
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["vendor_name"], "City Council");
    assert!(listed[0]["project_name"].is_null());
    assert_eq!(listed[1]["project_name"], "Bridge");

    let response = put_json_auth(app.clone(), &format!("/api/invoices/{id}/pay"), json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "Paid");

    let response = put_json_auth(app, "/api/invoices/999999/pay", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_invoices_are_rejected_without_writes(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "fm@test.com", "Finance Manager").await;
    let app = common::build_test_app(pool.clone());

    for body in [
        json!({ "vendor_name": "Acme", "amount": "10", "type": "Refund", "due_date": "2026-05-01" }),
        json!({ "vendor_name": "Acme", "amount": "0", "type": "Payable", "due_date": "2026-05-01" }),
        json!({ "vendor_name": "Acme", "amount": "10.001", "type": "Payable", "due_date": "2026-05-01" }),
        json!({ "vendor_name": " ", "amount": "10", "type": "Payable", "due_date": "2026-05-01" }),
        json!({ "vendor_name": "Acme", "amount": "10", "type": "Payable" }),
    ] {
        let response = post_json_auth(app.clone(), "/api/invoices", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invoice_for_missing_project_is_404(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "fm@test.com", "Finance Manager").await;
    let app = common::build_test_app(pool.clone());

    let body = json!({
        "project_id": 999_999,
        "vendor_name": "Acme",
        "amount": "10",
        "type": "Payable",
        "due_date": "2026-05-01"
    });
    let response = post_json_auth(app, "/api/invoices", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(invoice_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_stats_on_empty_database(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "clerk@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/dashboard/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_products"], 0);
    assert_eq!(json["total_orders"], 0);
    assert_eq!(json["low_stock"], 0);
    assert_eq!(json["total_revenue"], "0.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_stats_count_products_orders_and_revenue(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "clerk@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    let mut ids = Vec::new();
    for (name, price, stock) in [("Rebar", "19.99", 10), ("Tiles", "4.50", 3)] {
        let body = json!({ "name": name, "price": price, "stock_quantity": stock });
        let response = post_json_auth(app.clone(), "/api/products", body, &token).await;
        ids.push(body_json(response).await["id"].as_i64().unwrap());
    }

    let body = json!({ "product_id": ids[0], "quantity": 3 });
    let response = post_json_auth(app.clone(), "/api/orders", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get_auth(app, "/api/dashboard/stats", &token).await).await;
    assert_eq!(json["total_products"], 2);
    assert_eq!(json["total_orders"], 1);
    assert_eq!(json["low_stock"], 1);
    assert_eq!(json["total_revenue"], "59.97");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn finance_stats_summarise_invoices_and_recent_projects(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "fm@test.com", "Finance Manager").await;
    let app = common::build_test_app(pool);

    for i in 0..6 {
        create_project(app.clone(), &token, &format!("Site {i}"), "2500.50").await;
    }

    let invoices = [
        ("Receivable", "5000"),
        ("Payable", "1200.50"),
        ("Payable", "300"),
    ];
    let mut first_id = None;
    for (kind, amount) in invoices {
        let body = json!({
            "vendor_name": "Acme",
            "amount": amount,
            "type": kind,
            "due_date": "2026-05-01"
        });
        let response = post_json_auth(app.clone(), "/api/invoices", body, &token).await;
        let id = body_json(response).await["id"].as_i64().unwrap();
        first_id.get_or_insert(id);
    }
    let paid = format!("/api/invoices/{}/pay", first_id.unwrap());
    put_json_auth(app.clone(), &paid, json!({}), &token).await;

    let response = get_auth(app, "/api/finance/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["summary"]["total_income"], "5000.00");
    assert_eq!(json["summary"]["total_expense"], "1500.50");
    assert_eq!(json["summary"]["net_profit"], "3499.50");
    assert_eq!(json["summary"]["pending_invoices"], 2);

    let health = json["project_health"].as_array().unwrap();
    assert_eq!(health.len(), 5);
    assert_eq!(health[0]["name"], "Site 5");
    assert_eq!(health[0]["budget"], "10000.00");
    assert_eq!(health[0]["actual_spend"], "2500.50");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn finance_stats_with_no_invoices_are_zero(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "fm@test.com", "Finance Manager").await;
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(app, "/api/finance/stats", &token).await).await;
    assert_eq!(json["summary"]["total_income"], "0.00");
    assert_eq!(json["summary"]["net_profit"], "0.00");
    assert_eq!(json["summary"]["pending_invoices"], 0);
    assert!(json["project_health"].as_array().unwrap().is_empty());
}

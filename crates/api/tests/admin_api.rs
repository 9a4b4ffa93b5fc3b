//! HTTP-level integration tests for user administration and the audit log.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, get_auth, put_json_auth};
use ledger_db::repositories::{AuditLogRepo, UserRepo};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_can_list_users(pool: PgPool) {
    let (_admin, token) = common::create_test_user(&pool, "root@test.com", "Admin").await;
    common::create_test_user(&pool, "staff@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_admin_is_forbidden(pool: PgPool) {
    let (_user, token) = common::create_test_user(&pool, "fm@test.com", "Finance Manager").await;
    let app = common::build_test_app(pool);

    for uri in ["/api/admin/users", "/api/admin/audit-logs"] {
        let response = get_auth(app.clone(), uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_change_is_applied_and_audited(pool: PgPool) {
    let (admin, token) = common::create_test_user(&pool, "root@test.com", "Admin").await;
    let (staff, _) = common::create_test_user(&pool, "staff@test.com", "Employee").await;
    let app = common::build_test_app(pool.clone());

    let uri = format!("/api/admin/users/{}/role", staff.id);
    let response = put_json_auth(app.clone(), &uri, json!({ "role": "Finance Manager" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Role updated");
    assert_eq!(json["user"]["role"], "Finance Manager");

    let stored = UserRepo::find_by_id(&pool, staff.id).await.unwrap().unwrap();
    assert_eq!(stored.role, "Finance Manager");

    let mut logs = Vec::new();
    for _ in 0..50 {
        logs = AuditLogRepo::list_by_action(&pool, "Updated User Role")
            .await
            .unwrap();
        if !logs.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, admin.id);
    assert_eq!(
        logs[0].details.as_deref(),
        Some(format!("Changed user {} to Finance Manager", staff.id).as_str())
    );

    let response = get_auth(app, "/api/admin/audit-logs", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["action"], "Updated User Role");
    assert_eq!(json[0]["user_name"], "root");
    assert_eq!(json[0]["role"], "Admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_role_is_rejected(pool: PgPool) {
    let (_admin, token) = common::create_test_user(&pool, "root@test.com", "Admin").await;
    let (staff, _) = common::create_test_user(&pool, "staff@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/admin/users/{}/role", staff.id);
    let response = put_json_auth(app, &uri, json!({ "role": "Overlord" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_change_for_missing_user_is_404(pool: PgPool) {
    let (_admin, token) = common::create_test_user(&pool, "root@test.com", "Admin").await;
    let app = common::build_test_app(pool);

    let response =
        put_json_auth(app, "/api/admin/users/999999/role", json!({ "role": "Admin" }), &token)
            .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn demoted_admin_loses_access_before_token_expiry(pool: PgPool) {
    let (admin, admin_token) = common::create_test_user(&pool, "root@test.com", "Admin").await;
    let (_other, other_token) = common::create_test_user(&pool, "second@test.com", "Admin").await;
    let app = common::build_test_app(pool.clone());

    let response = get_auth(app.clone(), "/api/admin/users", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let uri = format!("/api/admin/users/{}/role", admin.id);
    let response = put_json_auth(app.clone(), &uri, json!({ "role": "Employee" }), &other_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The old token still claims Admin, but the stored role no longer does.
    let response = get_auth(app, "/api/admin/users", &admin_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_claim_for_unknown_user_is_forbidden(pool: PgPool) {
    let token = common::token_for(777_777, "ghost@test.com", "Admin");
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/admin/audit-logs", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

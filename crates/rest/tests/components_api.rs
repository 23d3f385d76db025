//! Admin component API integration tests.
//!
//! Tests the HTTP surface end to end:
//! - Status codes (200, 201, 204, 400, 403, 404, 409)
//! - Location header on create
//! - Secret masking in responses
//! - Capability gating via X-Admin-Roles
//! - Localized validation errors
//! - List filtering

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use ironveil_component::audit::{AuditOperation, MemoryAuditSink};
use ironveil_component::provider::ProviderRegistry;
use ironveil_component::service::ComponentService;
use ironveil_component::store::MemoryStore;
use ironveil_rest::ServerConfig;
use serde_json::{Value, json};

const X_ADMIN_ROLES: HeaderName = HeaderName::from_static("x-admin-roles");
const ACCEPT_LANGUAGE: HeaderName = HeaderName::from_static("accept-language");

const PLACEHOLDER: &str = "**********";

/// Creates a test server over an in-memory store.
fn create_test_server() -> (TestServer, Arc<MemoryAuditSink>) {
    let audit = Arc::new(MemoryAuditSink::new());
    let service = ComponentService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ProviderRegistry::builtin()),
        audit.clone(),
    );

    let config = ServerConfig {
        base_url: "http://localhost:8080".to_string(),
        ..ServerConfig::for_testing()
    };

    let app = ironveil_rest::create_app(Arc::new(service), config);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, audit)
}

fn ldap_body() -> Value {
    json!({
        "name": "corp-ldap",
        "providerType": "user-federation",
        "providerId": "ldap",
        "config": {
            "connectionUrl": ["ldap://directory.example.com"],
            "bindDn": ["cn=admin,dc=example,dc=com"],
            "bindCredential": ["s3cr3t"]
        }
    })
}

/// Creates a component as a managing admin and returns its id.
async fn seed_component(server: &TestServer, body: &Value) -> String {
    let response = server
        .post("/admin/realms/acme/components")
        .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
        .json(body)
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_str()
        .expect("created component has an id")
        .to_string()
}

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let (server, _) = create_test_server();

        let response = server
            .post("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .json(&ldap_body())
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let id = body["id"].as_str().unwrap();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert_eq!(
            location,
            format!("http://localhost:8080/admin/realms/acme/components/{id}")
        );
    }

    #[tokio::test]
    async fn test_create_response_masks_secrets() {
        let (server, _) = create_test_server();

        let response = server
            .post("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .json(&ldap_body())
            .await;

        let body: Value = response.json();
        assert_eq!(body["config"]["bindCredential"][0], PLACEHOLDER);
        assert_eq!(
            body["config"]["connectionUrl"][0],
            "ldap://directory.example.com"
        );
    }

    #[tokio::test]
    async fn test_create_without_manage_is_403() {
        let (server, audit) = create_test_server();

        let response = server
            .post("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .json(&ldap_body())
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        assert!(audit.records().is_empty());

        // Nothing was written.
        let listed = server
            .get("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .await;
        assert_eq!(listed.json::<Value>().as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_invalid_create_is_400_with_localized_message() {
        let (server, _) = create_test_server();

        let mut body = ldap_body();
        body["config"] = json!({});
        let response = server
            .post("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .add_header(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"))
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["errorMessage"], "Connection URL is required");
    }

    #[tokio::test]
    async fn test_unknown_provider_type_is_400() {
        let (server, _) = create_test_server();

        let mut body = ldap_body();
        body["providerType"] = json!("no-such-type");
        let response = server
            .post("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(
            error["errorMessage"],
            "Provider type no-such-type is not registered"
        );
    }
}

mod read {
    use super::*;

    #[tokio::test]
    async fn test_list_with_view_role_masks_secrets() {
        let (server, _) = create_test_server();
        seed_component(&server, &ldap_body()).await;

        let response = server
            .get("/admin/realms/acme/components")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .await;

        response.assert_status_ok();
        let listed: Value = response.json();
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["config"]["bindCredential"][0], PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_list_without_roles_is_403() {
        let (server, _) = create_test_server();

        let response = server.get("/admin/realms/acme/components").await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_get_requires_manage() {
        let (server, _) = create_test_server();
        let id = seed_component(&server, &ldap_body()).await;

        let response = server
            .get(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let response = server
            .get(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["name"], "corp-ldap");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let (server, _) = create_test_server();

        let response = server
            .get("/admin/realms/acme/components/no-such-id")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_other_realm_sees_nothing() {
        let (server, _) = create_test_server();
        let id = seed_component(&server, &ldap_body()).await;

        let response = server
            .get(&format!("/admin/realms/rival/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_type_filter_defaults_to_top_level() {
        let (server, _) = create_test_server();
        let parent_id = seed_component(&server, &ldap_body()).await;

        let mut child = ldap_body();
        child["name"] = json!("group-mapper");
        child["parentId"] = json!(parent_id);
        seed_component(&server, &child).await;

        let response = server
            .get("/admin/realms/acme/components?type=user-federation")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .await;
        let listed: Value = response.json();
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["name"], "corp-ldap");

        let response = server
            .get(&format!("/admin/realms/acme/components?parent={parent_id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .await;
        let listed: Value = response.json();
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["name"], "group-mapper");
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn test_update_returns_204_and_replaces() {
        let (server, _) = create_test_server();
        let id = seed_component(&server, &ldap_body()).await;

        let mut body = ldap_body();
        body["name"] = json!("renamed");
        body["config"] = json!({"connectionUrl": ["ldaps://directory.example.com"]});
        let response = server
            .put(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .json(&body)
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        let fetched = server
            .get(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        let fetched: Value = fetched.json();
        assert_eq!(fetched["name"], "renamed");
        // Full replace: the old bindDn key is gone.
        assert!(fetched["config"]["bindDn"].is_null());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let (server, _) = create_test_server();

        let response = server
            .put("/admin/realms/acme/components/no-such-id")
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .json(&ldap_body())
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let (server, _) = create_test_server();
        let id = seed_component(&server, &ldap_body()).await;

        let response = server
            .delete(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        let response = server
            .get(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_referenced_parent_is_409() {
        let (server, audit) = create_test_server();
        let parent_id = seed_component(&server, &ldap_body()).await;

        let mut child = ldap_body();
        child["name"] = json!("group-mapper");
        child["parentId"] = json!(parent_id);
        seed_component(&server, &child).await;

        let response = server
            .delete(&format!("/admin/realms/acme/components/{parent_id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status(StatusCode::CONFLICT);

        // Parent still present, and the rejected delete was never audited.
        let response = server
            .get(&format!("/admin/realms/acme/components/{parent_id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("manage"))
            .await;
        response.assert_status_ok();
        assert!(audit
            .records()
            .iter()
            .all(|r| r.operation != AuditOperation::Delete));
    }

    #[tokio::test]
    async fn test_delete_without_manage_is_403() {
        let (server, _) = create_test_server();
        let id = seed_component(&server, &ldap_body()).await;

        let response = server
            .delete(&format!("/admin/realms/acme/components/{id}"))
            .add_header(X_ADMIN_ROLES, HeaderValue::from_static("view"))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }
}

mod system {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let (server, _) = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }
}

//! Component CRUD handlers.
//!
//! Implements the realm component admin endpoints:
//!
//! - `GET    /admin/realms/{realm}/components` - list (filterable)
//! - `POST   /admin/realms/{realm}/components` - create
//! - `GET    /admin/realms/{realm}/components/{id}` - get one
//! - `PUT    /admin/realms/{realm}/components/{id}` - full replace
//! - `DELETE /admin/realms/{realm}/components/{id}` - remove
//!
//! Capability gating, validation, redaction, and audit all run in the
//! component core; handlers translate HTTP to service calls and errors back
//! to JSON responses.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use ironveil_component::component::{ComponentId, ComponentRepresentation};
use ironveil_component::realm::RealmId;
use ironveil_component::store::{ComponentFilter, ComponentStore};
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{AdminAccess, RequestLocale};
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Restrict to components with this parent id.
    pub parent: Option<String>,
    /// Restrict to components of this provider type.
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
}

/// Handler for listing a realm's components.
///
/// # HTTP Request
///
/// `GET /admin/realms/{realm}/components?parent=...&type=...`
///
/// # Response
///
/// - `200 OK` - JSON array of representations, secrets masked
/// - `403 Forbidden` - Caller lacks view access
pub async fn list_components_handler<S>(
    State(state): State<AppState<S>>,
    Path(realm): Path<String>,
    Query(params): Query<ListParams>,
    access: AdminAccess,
    locale: RequestLocale,
) -> RestResult<Json<Vec<ComponentRepresentation>>>
where
    S: ComponentStore,
{
    let realm = RealmId::new(realm);
    debug!(realm = %realm, ?params, "Processing component list request");

    let filter = ComponentFilter::new(params.parent, params.provider_type);
    let listed = state
        .service()
        .list(&realm, access.as_realm_access(), filter)
        .await
        .map_err(|e| RestError::from_component(e, state.catalog(), locale.as_str()))?;
    Ok(Json(listed))
}

/// Handler for fetching a single component.
///
/// # HTTP Request
///
/// `GET /admin/realms/{realm}/components/{id}`
///
/// # Response
///
/// - `200 OK` - Representation with secrets masked
/// - `403 Forbidden` - Caller lacks manage access
/// - `404 Not Found` - No such component in the realm
pub async fn get_component_handler<S>(
    State(state): State<AppState<S>>,
    Path((realm, id)): Path<(String, String)>,
    access: AdminAccess,
    locale: RequestLocale,
) -> RestResult<Json<ComponentRepresentation>>
where
    S: ComponentStore,
{
    let realm = RealmId::new(realm);
    let id = ComponentId::from(id);
    debug!(realm = %realm, id = %id, "Processing component get request");

    let fetched = state
        .service()
        .get(&realm, access.as_realm_access(), &id)
        .await
        .map_err(|e| RestError::from_component(e, state.catalog(), locale.as_str()))?;
    Ok(Json(fetched))
}

/// Handler for creating a component.
///
/// # HTTP Request
///
/// `POST /admin/realms/{realm}/components`
///
/// # Response
///
/// - `201 Created` - `Location` header points at the new component
/// - `400 Bad Request` - Validation failure (localized message)
/// - `403 Forbidden` - Caller lacks manage access
pub async fn create_component_handler<S>(
    State(state): State<AppState<S>>,
    Path(realm): Path<String>,
    access: AdminAccess,
    locale: RequestLocale,
    Json(representation): Json<ComponentRepresentation>,
) -> RestResult<Response>
where
    S: ComponentStore,
{
    let realm = RealmId::new(realm);
    debug!(
        realm = %realm,
        provider_type = %representation.provider_type,
        "Processing component create request"
    );

    let created = state
        .service()
        .create(&realm, access.as_realm_access(), representation)
        .await
        .map_err(|e| RestError::from_component(e, state.catalog(), locale.as_str()))?;

    let id = created.id.as_deref().unwrap_or_default();
    let location = format!(
        "{}/admin/realms/{}/components/{}",
        state.base_url(),
        realm,
        id
    );
    debug!(realm = %realm, id = %id, "Component created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// Handler for replacing a component.
///
/// # HTTP Request
///
/// `PUT /admin/realms/{realm}/components/{id}`
///
/// # Response
///
/// - `204 No Content` - Replaced
/// - `400 Bad Request` - Validation failure (localized message)
/// - `403 Forbidden` - Caller lacks manage access
/// - `404 Not Found` - No such component in the realm
pub async fn update_component_handler<S>(
    State(state): State<AppState<S>>,
    Path((realm, id)): Path<(String, String)>,
    access: AdminAccess,
    locale: RequestLocale,
    Json(representation): Json<ComponentRepresentation>,
) -> RestResult<Response>
where
    S: ComponentStore,
{
    let realm = RealmId::new(realm);
    let id = ComponentId::from(id);
    debug!(realm = %realm, id = %id, "Processing component update request");

    state
        .service()
        .update(&realm, access.as_realm_access(), &id, representation)
        .await
        .map_err(|e| RestError::from_component(e, state.catalog(), locale.as_str()))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for removing a component.
///
/// # HTTP Request
///
/// `DELETE /admin/realms/{realm}/components/{id}`
///
/// # Response
///
/// - `204 No Content` - Removed
/// - `403 Forbidden` - Caller lacks manage access
/// - `404 Not Found` - No such component in the realm
/// - `409 Conflict` - Other components reference it as their parent
pub async fn delete_component_handler<S>(
    State(state): State<AppState<S>>,
    Path((realm, id)): Path<(String, String)>,
    access: AdminAccess,
    locale: RequestLocale,
) -> RestResult<Response>
where
    S: ComponentStore,
{
    let realm = RealmId::new(realm);
    let id = ComponentId::from(id);
    debug!(realm = %realm, id = %id, "Processing component delete request");

    state
        .service()
        .delete(&realm, access.as_realm_access(), &id)
        .await
        .map_err(|e| RestError::from_component(e, state.catalog(), locale.as_str()))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

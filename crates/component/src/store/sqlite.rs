//! SQLite component store.

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Row, ToSql};
use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentConfig, ComponentId};
use crate::error::{StoreError, StoreResult};
use crate::realm::RealmId;

use super::{ComponentFilter, ComponentStore};

/// Durable store backed by SQLite.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteStoreConfig,
    is_memory: bool,
}

impl Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteStoreConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl SqliteStore {
    /// Creates a new in-memory SQLite store.
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_config(":memory:", SqliteStoreConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::with_config(path, SqliteStoreConfig::default())
    }

    /// Creates a store with custom configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: SqliteStoreConfig) -> StoreResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        // The init hook runs on every connection the pool opens, so the busy
        // timeout holds across the whole pool.
        let busy_timeout = std::time::Duration::from_millis(config.busy_timeout_ms);
        let manager = SqliteConnectionManager::file(path.as_ref())
            .with_init(move |conn| conn.busy_timeout(busy_timeout));

        // Each pooled connection to :memory: would open its own database, so
        // the in-memory mode is pinned to a single connection.
        let max_size = if is_memory { 1 } else { config.max_connections };

        let pool = Pool::builder()
            .max_size(max_size)
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| StoreError::Unavailable {
                message: e.to_string(),
            })?;

        let store = Self {
            pool,
            config,
            is_memory,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS components (
                realm         TEXT NOT NULL,
                id            TEXT NOT NULL,
                name          TEXT NOT NULL,
                provider_type TEXT NOT NULL,
                provider_id   TEXT NOT NULL,
                parent_id     TEXT NOT NULL,
                sub_type      TEXT,
                config        TEXT NOT NULL,
                PRIMARY KEY (realm, id)
            );
            CREATE INDEX IF NOT EXISTS idx_components_parent
                ON components (realm, parent_id);
            CREATE INDEX IF NOT EXISTS idx_components_provider_type
                ON components (realm, provider_type);",
        )?;
        Ok(())
    }

    fn get_connection(&self) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(StoreError::from)
    }

    fn check_parent(
        conn: &rusqlite::Connection,
        realm: &RealmId,
        component: &Component,
    ) -> StoreResult<()> {
        if component.is_top_level(realm) {
            return Ok(());
        }
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM components WHERE realm = ?1 AND id = ?2",
                params![realm.as_str(), component.parent_id],
                |_| Ok(true),
            )
            .unwrap_or(false);
        if exists {
            Ok(())
        } else {
            Err(StoreError::ParentNotFound {
                parent_id: component.parent_id.clone(),
            })
        }
    }

    fn row_to_component(row: &Row<'_>) -> rusqlite::Result<(Component, String)> {
        let config_json: String = row.get(6)?;
        Ok((
            Component {
                id: ComponentId::from(row.get::<_, String>(0)?),
                name: row.get(1)?,
                provider_type: row.get(2)?,
                provider_id: row.get(3)?,
                parent_id: row.get(4)?,
                sub_type: row.get(5)?,
                config: ComponentConfig::new(),
            },
            config_json,
        ))
    }

    fn query_component(
        conn: &rusqlite::Connection,
        realm: &RealmId,
        id: &str,
    ) -> StoreResult<Option<Component>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, provider_type, provider_id, parent_id, sub_type, config
             FROM components WHERE realm = ?1 AND id = ?2",
        )?;
        let mut rows = stmt.query(params![realm.as_str(), id])?;
        match rows.next()? {
            Some(row) => {
                let (mut component, config_json) = Self::row_to_component(row)?;
                component.config = serde_json::from_str(&config_json)?;
                Ok(Some(component))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ComponentStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn add(&self, realm: &RealmId, mut component: Component) -> StoreResult<Component> {
        let conn = self.get_connection()?;
        Self::check_parent(&conn, realm, &component)?;

        if component.id.is_unassigned() {
            component.id = ComponentId::generate();
        }
        let config_json = serde_json::to_string(&component.config)?;

        conn.execute(
            "INSERT OR REPLACE INTO components
                 (realm, id, name, provider_type, provider_id, parent_id, sub_type, config)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                realm.as_str(),
                component.id.as_str(),
                component.name,
                component.provider_type,
                component.provider_id,
                component.parent_id,
                component.sub_type,
                config_json,
            ],
        )?;
        Ok(component)
    }

    async fn get(&self, realm: &RealmId, id: &ComponentId) -> StoreResult<Option<Component>> {
        let conn = self.get_connection()?;
        Self::query_component(&conn, realm, id.as_str())
    }

    async fn list(
        &self,
        realm: &RealmId,
        filter: &ComponentFilter,
    ) -> StoreResult<Vec<Component>> {
        let conn = self.get_connection()?;

        let mut sql = String::from(
            "SELECT id, name, provider_type, provider_id, parent_id, sub_type, config
             FROM components WHERE realm = ?1",
        );
        let realm_id = realm.as_str();
        let mut bindings: Vec<&dyn ToSql> = vec![&realm_id];
        if let Some(parent) = &filter.parent {
            sql.push_str(&format!(" AND parent_id = ?{}", bindings.len() + 1));
            bindings.push(parent);
        }
        if let Some(provider_type) = &filter.provider_type {
            sql.push_str(&format!(" AND provider_type = ?{}", bindings.len() + 1));
            bindings.push(provider_type);
        }
        sql.push_str(" ORDER BY name, id");

        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(bindings.as_slice())?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let (mut component, config_json) = Self::row_to_component(row)?;
            component.config = serde_json::from_str(&config_json)?;
            result.push(component);
        }
        Ok(result)
    }

    async fn update(&self, realm: &RealmId, component: &Component) -> StoreResult<()> {
        let conn = self.get_connection()?;
        Self::check_parent(&conn, realm, component)?;

        let config_json = serde_json::to_string(&component.config)?;
        let updated = conn.execute(
            "UPDATE components
             SET name = ?3, provider_type = ?4, provider_id = ?5, parent_id = ?6,
                 sub_type = ?7, config = ?8
             WHERE realm = ?1 AND id = ?2",
            params![
                realm.as_str(),
                component.id.as_str(),
                component.name,
                component.provider_type,
                component.provider_id,
                component.parent_id,
                component.sub_type,
                config_json,
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::MissingComponent {
                id: component.id.as_str().to_string(),
            });
        }
        Ok(())
    }

    async fn remove(&self, realm: &RealmId, id: &ComponentId) -> StoreResult<()> {
        let conn = self.get_connection()?;

        let children: usize = conn.query_row(
            "SELECT COUNT(*) FROM components WHERE realm = ?1 AND parent_id = ?2",
            params![realm.as_str(), id.as_str()],
            |row| row.get(0),
        )?;
        if children > 0 {
            return Err(StoreError::ChildrenPresent {
                id: id.as_str().to_string(),
                count: children,
            });
        }

        let deleted = conn.execute(
            "DELETE FROM components WHERE realm = ?1 AND id = ?2",
            params![realm.as_str(), id.as_str()],
        )?;
        if deleted == 0 {
            return Err(StoreError::MissingComponent {
                id: id.as_str().to_string(),
            });
        }
        Ok(())
    }
}

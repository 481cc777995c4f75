pub mod channel;
pub mod schema;
pub mod user_data;
pub mod video;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use thiserror::Error;
use tracing::info;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// How long a checkout waits for a connection before giving up.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum GetConnectionError {
    #[error("DatabaseNameRequired")]
    DatabaseNameRequired,

    #[error("CachePoisoned")]
    CachePoisoned,
}

/// One pool per database name, kept for the lifetime of the cache.
///
/// The key is the database name alone: asking again for a name already in
/// the cache returns the first pool, whatever host or credentials are passed
/// the second time.
#[derive(Default)]
pub struct ConnectionCache {
    connections: Mutex<HashMap<String, Arc<PgPool>>>,
}

impl ConnectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_connection(
        &self,
        database: &str,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Arc<PgPool>, GetConnectionError> {
        if database.is_empty() {
            return Err(GetConnectionError::DatabaseNameRequired);
        }

        let mut connections = self
            .connections
            .lock()
            .map_err(|_| GetConnectionError::CachePoisoned)?;

        if let Some(pool) = connections.get(database) {
            return Ok(Arc::clone(pool));
        }

        // Connections are opened on first checkout, not here.
        let manager = ConnectionManager::<PgConnection>::new(connection_url(
            database, host, port, username, password,
        ));
        let pool = Arc::new(Pool::builder()
            .connection_timeout(CONNECTION_TIMEOUT)
            .build_unchecked(manager));

        info!(database, host, port, "registered database pool");
        connections.insert(database.to_string(), Arc::clone(&pool));

        Ok(pool)
    }
}

pub fn connection_url(
    database: &str,
    host: &str,
    port: u16,
    username: &str,
    password: &str,
) -> String {
    match (username.is_empty(), password.is_empty()) {
        (true, _) => format!("postgres://{host}:{port}/{database}"),
        (false, true) => format!("postgres://{username}@{host}:{port}/{database}"),
        (false, false) => format!("postgres://{username}:{password}@{host}:{port}/{database}"),
    }
}

//! Incremental YouTube upload feeds for a browser front end
//!
//! - YouTube Data API walking and aggregation in `youtube/`
//! - PostgreSQL models, queries and the connection cache in `db/`
//! - REST endpoints in `endpoints/`, wired up by `router`
//! - Reads the OAuth access token from the configured token storage file

pub mod config;
pub mod credentials;
pub mod db;
pub mod endpoints;
pub mod router;
pub mod state;
pub mod utils;
pub mod youtube;

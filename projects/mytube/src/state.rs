use std::sync::Arc;

use interfaces_youtube_client::index::{BuildClientError, YouTubeClient};
use thiserror::Error;

use crate::config::Config;
use crate::credentials::{load_access_token, LoadAccessTokenError};
use crate::db::user_data::store::PgUserSettings;
use crate::db::{ConnectionCache, GetConnectionError, PgPool};

/// Shared by every handler through an `Extension` layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub connections: Arc<ConnectionCache>,
    youtube: YouTubeClient,
}

#[derive(Debug, Error)]
pub enum YouTubeClientError {
    #[error("LoadAccessToken: {source}")]
    LoadAccessToken {
        #[from]
        source: LoadAccessTokenError,
    },
}

impl AppState {
    /// The YouTube client is built once here and shared; only its access
    /// token changes from one request to the next.
    pub fn new(config: Config, connections: Arc<ConnectionCache>) -> Result<Self, BuildClientError> {
        let youtube = YouTubeClient::new(
            &config.youtube.api_base_url,
            "",
            config.youtube.request_timeout,
        )?;

        Ok(Self {
            config: Arc::new(config),
            connections,
            youtube,
        })
    }

    pub fn pool(&self) -> Result<Arc<PgPool>, GetConnectionError> {
        let database = &self.config.database;

        self.connections.get_connection(
            &database.name,
            &database.host,
            database.port,
            &database.username,
            &database.password,
        )
    }

    pub fn user_settings(&self) -> Result<PgUserSettings, GetConnectionError> {
        Ok(PgUserSettings::new(self.pool()?, &self.config.user))
    }

    /// Client authorized with the token currently in the storage file, which
    /// is re-read on every call so external refreshes are picked up.
    pub fn youtube_client(&self) -> Result<YouTubeClient, YouTubeClientError> {
        let access_token = load_access_token(&self.config.youtube.token_storage_file)?;

        Ok(self.youtube.with_access_token(&access_token))
    }
}

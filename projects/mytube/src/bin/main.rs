use std::sync::Arc;

use axum::serve;
use interfaces_youtube_client::index::BuildClientError;
use projects_mytube::config::{Config, ConfigError};
use projects_mytube::db::ConnectionCache;
use projects_mytube::router::build_router;
use projects_mytube::state::AppState;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("BuildClient: {source}")]
	BuildClient {
		#[source]
		source: BuildClientError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let _ = dotenvy::dotenv();

	let config = Config::from_env().map_err(|source| MainError::Config { source })?;

	utils_trace::init(&config.log_level)
		.map_err(|source| MainError::TracingInit { source })?;

	if !config.youtube.client_secrets_file.exists() {
		warn!(
			path = %config.youtube.client_secrets_file.display(),
			"client secrets file not found, tokens must be provisioned externally"
		);
	}

	let addr = config.bind_addr;
	let connections = Arc::new(ConnectionCache::new());
	let state = AppState::new(config, Arc::clone(&connections))
		.map_err(|source| MainError::BuildClient { source })?;
	let app = build_router(state);

	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", addr);

	serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(|source| MainError::Serve { source })?;

	drop(connections);
	info!("Server stopped");

	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		warn!(error = %err, "failed to listen for shutdown signal");
		std::future::pending::<()>().await;
	}
}

use axum::{
	extract::{Extension, Json, Query},
	http::StatusCode,
	response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::state::{AppState, YouTubeClientError};
use crate::utils::normalize::normalize;
use crate::youtube::aggregate::{uploads_for_all_subscriptions, UploadsForAllSubscriptionsError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("YouTubeClient: {source}")]
	YouTubeClient {
		#[from]
		source: YouTubeClientError,
	},
	#[error("UploadsForAllSubscriptions: {source}")]
	UploadsForAllSubscriptions {
		#[from]
		source: UploadsForAllSubscriptionsError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "uploads failed");

		let status = match &self {
			HandlerError::YouTubeClient { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			HandlerError::UploadsForAllSubscriptions { .. } => StatusCode::BAD_GATEWAY,
		};

		(status, self.to_string()).into_response()
	}
}

/// Query parameters for the endpoint.
#[derive(Deserialize)]
pub struct UploadsQuery {
	/// RFC 3339 lower bound, e.g. `2024-01-01T00:00:00Z`.
	#[serde(default)]
	since: Option<DateTime<Utc>>,
	#[serde(default)]
	convert_to_object: bool,
}

/// Axum handler: GET /uploads?since=
pub async fn handler(
	Extension(state): Extension<AppState>,
	Query(input): Query<UploadsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
	let client = state.youtube_client()?;
	let subscriptions = uploads_for_all_subscriptions(&client, input.since).await?;

	Ok((
		StatusCode::OK,
		Json(normalize(Value::Array(subscriptions), input.convert_to_object)),
	))
}

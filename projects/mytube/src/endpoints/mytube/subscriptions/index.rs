use axum::{
	extract::{Extension, Json, Query},
	http::StatusCode,
	response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::endpoints::mytube::mirror::spawn_mirror_subscriptions;
use crate::state::{AppState, YouTubeClientError};
use crate::utils::normalize::normalize;
use crate::youtube::subscriptions::{get_subscriptions, GetSubscriptionsError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("YouTubeClient: {source}")]
	YouTubeClient {
		#[from]
		source: YouTubeClientError,
	},
	#[error("GetSubscriptions: {source}")]
	GetSubscriptions {
		#[from]
		source: GetSubscriptionsError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "subscriptions failed");

		let status = match &self {
			HandlerError::YouTubeClient { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			HandlerError::GetSubscriptions { .. } => StatusCode::BAD_GATEWAY,
		};

		(status, self.to_string()).into_response()
	}
}

/// Query parameters for the endpoint.
#[derive(Deserialize)]
pub struct SubscriptionsQuery {
	#[serde(default)]
	convert_to_object: bool,
}

/// Axum handler: GET /subscriptions
pub async fn handler(
	Extension(state): Extension<AppState>,
	Query(input): Query<SubscriptionsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
	let client = state.youtube_client()?;
	let subscriptions = get_subscriptions(&client).await?;

	spawn_mirror_subscriptions(&state, subscriptions.clone());

	Ok((
		StatusCode::OK,
		Json(normalize(Value::Array(subscriptions), input.convert_to_object)),
	))
}

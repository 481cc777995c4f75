use axum::{
	extract::{Extension, Json, Query},
	http::StatusCode,
	response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::db::user_data::store::LoadUserSettingsError;
use crate::db::GetConnectionError;
use crate::endpoints::mytube::mirror::spawn_mirror_uploads;
use crate::state::{AppState, YouTubeClientError};
use crate::utils::normalize::{normalize, Normalized};
use crate::youtube::aggregate::{uploads_for_category, UploadsForCategoryError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("GetConnection: {source}")]
	GetConnection {
		#[from]
		source: GetConnectionError,
	},
	#[error("YouTubeClient: {source}")]
	YouTubeClient {
		#[from]
		source: YouTubeClientError,
	},
	#[error("UploadsForCategory: {source}")]
	UploadsForCategory {
		#[from]
		source: UploadsForCategoryError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "new_uploads failed");

		let status = match &self {
			HandlerError::GetConnection { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			HandlerError::YouTubeClient { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			HandlerError::UploadsForCategory { source } => match source {
				UploadsForCategoryError::UnknownCategory { .. } => StatusCode::BAD_REQUEST,
				UploadsForCategoryError::LoadUserSettings {
					source: LoadUserSettingsError::UserNotFound { .. },
				} => StatusCode::NOT_FOUND,
				UploadsForCategoryError::LoadUserSettings { .. } => StatusCode::INTERNAL_SERVER_ERROR,
				UploadsForCategoryError::GetActivitiesFor { .. } => StatusCode::BAD_GATEWAY,
			},
		};

		(status, self.to_string()).into_response()
	}
}

/// Query parameters for the endpoint.
#[derive(Deserialize)]
pub struct NewUploadsQuery {
	category: String,
	#[serde(default)]
	convert_to_object: bool,
}

/// Response body of the endpoint.
///
/// `fetched_at` is taken before the first provider call. Sending it back to
/// `POST /new_uploads/checkpoint` as `at` leaves nothing published during
/// the fetch behind the checkpoint.
#[derive(Debug, Serialize)]
pub struct NewUploadsResponse {
	pub new_uploads: Normalized,
	pub fetched_at: DateTime<Utc>,
}

/// Axum handler: GET /new_uploads?category=
pub async fn handler(
	Extension(state): Extension<AppState>,
	Query(input): Query<NewUploadsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
	let store = state.user_settings()?;
	let client = state.youtube_client()?;

	let fetched_at = Utc::now();
	let new_uploads = uploads_for_category(&client, &store, &input.category).await?;

	spawn_mirror_uploads(&state, new_uploads.clone());

	Ok((
		StatusCode::OK,
		Json(NewUploadsResponse {
			new_uploads: normalize(Value::Array(new_uploads), input.convert_to_object),
			fetched_at,
		}),
	))
}

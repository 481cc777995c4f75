use axum::{
	extract::{Extension, Json},
	http::StatusCode,
	response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::state::{AppState, YouTubeClientError};
use crate::youtube::bulletin::{post_bulletin, PostBulletinError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("YouTubeClient: {source}")]
	YouTubeClient {
		#[from]
		source: YouTubeClientError,
	},
	#[error("PostBulletin: {source}")]
	PostBulletin {
		#[from]
		source: PostBulletinError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "bulletins failed");

		let status = match &self {
			HandlerError::YouTubeClient { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			HandlerError::PostBulletin {
				source: PostBulletinError::ConflictingTarget { .. },
			} => StatusCode::BAD_REQUEST,
			HandlerError::PostBulletin { .. } => StatusCode::BAD_GATEWAY,
		};

		(status, self.to_string()).into_response()
	}
}

/// JSON payload expected by the endpoint.
#[derive(Deserialize)]
pub struct BulletinRequestBody {
	message: String,
	video_id: Option<String>,
	playlist_id: Option<String>,
}

/// Axum handler: POST /bulletins
pub async fn handler(
	Extension(state): Extension<AppState>,
	Json(input): Json<BulletinRequestBody>,
) -> Result<impl IntoResponse, HandlerError> {
	let client = state.youtube_client()?;

	post_bulletin(
		&client,
		&input.message,
		input.video_id.as_deref(),
		input.playlist_id.as_deref(),
	)
	.await?;

	Ok((StatusCode::OK, Json(json!({ "status": "Success" }))))
}

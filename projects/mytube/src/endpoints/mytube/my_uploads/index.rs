use axum::{
	extract::{Extension, Json},
	http::StatusCode,
	response::IntoResponse,
};
use thiserror::Error;
use tracing::error;

use crate::state::{AppState, YouTubeClientError};
use crate::youtube::my_uploads::{my_uploads, MyUploadsError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("YouTubeClient: {source}")]
	YouTubeClient {
		#[from]
		source: YouTubeClientError,
	},
	#[error("MyUploads: {source}")]
	MyUploads {
		#[from]
		source: MyUploadsError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "my_uploads failed");

		let status = match &self {
			HandlerError::YouTubeClient { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			HandlerError::MyUploads { .. } => StatusCode::BAD_GATEWAY,
		};

		(status, self.to_string()).into_response()
	}
}

/// Axum handler: GET /my_uploads
pub async fn handler(
	Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, HandlerError> {
	let client = state.youtube_client()?;
	let uploads = my_uploads(&client).await?;

	Ok((StatusCode::OK, Json(uploads)))
}

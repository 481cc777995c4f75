use axum::{
	extract::{Extension, Json},
	http::StatusCode,
	response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::db::user_data::store::{LoadUserSettingsError, UserSettingsStore};
use crate::db::GetConnectionError;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("GetConnection: {source}")]
	GetConnection {
		#[from]
		source: GetConnectionError,
	},
	#[error("LoadUserSettings: {source}")]
	LoadUserSettings {
		#[from]
		source: LoadUserSettingsError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "categories failed");

		let status = match &self {
			HandlerError::LoadUserSettings {
				source: LoadUserSettingsError::UserNotFound { .. },
			} => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};

		(status, self.to_string()).into_response()
	}
}

/// Axum handler: GET /categories
pub async fn handler(
	Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, HandlerError> {
	let settings = state.user_settings()?.user_settings()?;

	Ok((StatusCode::OK, Json(json!({ "categories": settings.categories }))))
}

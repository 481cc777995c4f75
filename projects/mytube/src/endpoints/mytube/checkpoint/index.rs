use axum::{
	extract::{Extension, Json},
	http::StatusCode,
	response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::db::user_data::queries::{advance_last_checked, AdvanceLastCheckedError};
use crate::db::user_data::models::UserSettings;
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
	#[error("GetConnectionFromPool: {source}")]
	GetConnectionFromPool {
		#[from]
		source: r2d2::Error,
	},
	#[error("LoadUserSettings: {source}")]
	LoadUserSettings {
		#[from]
		source: LoadUserSettingsError,
	},
	#[error("UnknownCategory: {category}")]
	UnknownCategory { category: String },
	#[error("AdvanceLastChecked: {source}")]
	AdvanceLastChecked {
		#[from]
		source: AdvanceLastCheckedError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!(error = %self, "checkpoint failed");

		let status = match &self {
			HandlerError::UnknownCategory { .. } => StatusCode::BAD_REQUEST,
			HandlerError::LoadUserSettings {
				source: LoadUserSettingsError::UserNotFound { .. },
			} => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};

		(status, self.to_string()).into_response()
	}
}

/// JSON payload expected by the endpoint.
///
/// `at` is normally the `fetched_at` of the `GET /new_uploads` being
/// acknowledged. Without it the checkpoint moves to the current time.
#[derive(Debug, Deserialize)]
pub struct CheckpointRequestBody {
	category: String,
	#[serde(default)]
	at: Option<DateTime<Utc>>,
}

/// The user's settings, provided `category` is one of their categories.
pub fn require_category<S>(store: &S, category: &str) -> Result<UserSettings, HandlerError>
where
	S: UserSettingsStore + ?Sized,
{
	let settings = store.user_settings()?;

	if !settings.has_category(category) {
		return Err(HandlerError::UnknownCategory {
			category: category.to_string(),
		});
	}

	Ok(settings)
}

/// Axum handler: POST /new_uploads/checkpoint
///
/// Marks every subscription of the category as read up to `at`.
pub async fn handler(
	Extension(state): Extension<AppState>,
	Json(input): Json<CheckpointRequestBody>,
) -> Result<impl IntoResponse, HandlerError> {
	require_category(&state.user_settings()?, &input.category)?;

	let pool = state.pool()?;
	let mut conn = pool.get()?;
	let at = input.at.unwrap_or_else(Utc::now);
	let updated = advance_last_checked(&mut conn, &state.config.user, &input.category, at)?;

	info!(category = %input.category, updated, "advanced checkpoints");

	Ok((
		StatusCode::OK,
		Json(json!({
			"category": input.category,
			"updated": updated,
			"last_checked": at,
		})),
	))
}

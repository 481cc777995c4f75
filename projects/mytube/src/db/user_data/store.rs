use std::sync::Arc;

use thiserror::Error;

use crate::db::user_data::models::UserSettings;
use crate::db::user_data::queries::{
    get_subscription_to_category, get_user_data, GetSubscriptionToCategoryError, GetUserDataError,
};
use crate::db::PgPool;

#[derive(Debug, Error)]
pub enum LoadUserSettingsError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },

    #[error("GetUserData: {source}")]
    GetUserData {
        #[from]
        source: GetUserDataError,
    },

    #[error("GetSubscriptionToCategory: {source}")]
    GetSubscriptionToCategory {
        #[from]
        source: GetSubscriptionToCategoryError,
    },

    #[error("UserNotFound: {user}")]
    UserNotFound { user: String },
}

/// Source of the per-user categories and checkpoint table.
pub trait UserSettingsStore {
    fn user_settings(&self) -> Result<UserSettings, LoadUserSettingsError>;
}

/// Settings of one user, read from PostgreSQL on every call.
pub struct PgUserSettings {
    pool: Arc<PgPool>,
    user: String,
}

impl PgUserSettings {
    pub fn new(pool: Arc<PgPool>, user: &str) -> Self {
        Self {
            pool,
            user: user.to_string(),
        }
    }
}

impl UserSettingsStore for PgUserSettings {
    fn user_settings(&self) -> Result<UserSettings, LoadUserSettingsError> {
        let mut conn = self.pool.get()?;

        let user = get_user_data(&mut conn, &self.user)?.ok_or_else(|| {
            LoadUserSettingsError::UserNotFound {
                user: self.user.clone(),
            }
        })?;

        let subscription_to_category = get_subscription_to_category(&mut conn, &self.user)?;

        Ok(UserSettings {
            categories: user.categories,
            subscription_to_category,
        })
    }
}

/// An already loaded snapshot.
impl UserSettingsStore for UserSettings {
    fn user_settings(&self) -> Result<UserSettings, LoadUserSettingsError> {
        Ok(self.clone())
    }
}

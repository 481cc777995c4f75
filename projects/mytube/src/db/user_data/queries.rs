use chrono::{DateTime, Utc};
use diesel::prelude::*;
use thiserror::Error;

use crate::db::schema::{subscription_to_category, user_data};
use crate::db::user_data::models::*;

#[derive(Debug, Error)]
pub enum GetUserDataError {
    #[error("GetUserData: {source}")]
    GetUserData {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_user_data(
    conn: &mut PgConnection,
    user: &str,
) -> Result<Option<UserData>, GetUserDataError> {
    user_data::table
        .find(user)
        .select(UserData::as_select())
        .first(conn)
        .optional()
        .map_err(|source| GetUserDataError::GetUserData { source })
}

#[derive(Debug, Error)]
pub enum GetSubscriptionToCategoryError {
    #[error("GetSubscriptionToCategory: {source}")]
    GetSubscriptionToCategory {
        #[from]
        source: diesel::result::Error,
    },
}

/// The user's mapping table in insertion order.
pub fn get_subscription_to_category(
    conn: &mut PgConnection,
    user: &str,
) -> Result<Vec<SubscriptionCategory>, GetSubscriptionToCategoryError> {
    subscription_to_category::table
        .filter(subscription_to_category::user_name.eq(user))
        .order_by(subscription_to_category::id)
        .select(SubscriptionCategory::as_select())
        .load(conn)
        .map_err(|source| GetSubscriptionToCategoryError::GetSubscriptionToCategory { source })
}

#[derive(Debug, Error)]
pub enum AdvanceLastCheckedError {
    #[error("AdvanceLastChecked: {source}")]
    AdvanceLastChecked {
        #[from]
        source: diesel::result::Error,
    },
}

/// Moves the checkpoint of every `category` entry of `user` to `at`.
/// Returns the number of entries touched.
pub fn advance_last_checked(
    conn: &mut PgConnection,
    user: &str,
    category: &str,
    at: DateTime<Utc>,
) -> Result<usize, AdvanceLastCheckedError> {
    diesel::update(
        subscription_to_category::table
            .filter(subscription_to_category::user_name.eq(user))
            .filter(subscription_to_category::category.eq(category)),
    )
    .set(subscription_to_category::last_checked.eq(Some(at)))
    .execute(conn)
    .map_err(|source| AdvanceLastCheckedError::AdvanceLastChecked { source })
}

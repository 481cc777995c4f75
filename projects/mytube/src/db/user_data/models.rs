use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::db::schema::{subscription_to_category, user_data};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_data)]
pub struct UserData {
    pub user_name: String,
    pub categories: Vec<String>,
}

/// A followed channel filed under one of the user's categories, with the
/// checkpoint up to which its activity has been read.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = subscription_to_category)]
pub struct SubscriptionCategory {
    pub id: i32,
    pub user_name: String,
    pub channel_id: String,
    pub category: String,
    pub last_checked: Option<DateTime<Utc>>,
}

/// Everything the aggregator reads about one user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserSettings {
    pub categories: Vec<String>,
    pub subscription_to_category: Vec<SubscriptionCategory>,
}

impl UserSettings {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|known| known == category)
    }

    /// Mapping entries filed under `category`, in table order.
    pub fn entries_for<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a SubscriptionCategory> + 'a {
        self.subscription_to_category
            .iter()
            .filter(move |entry| entry.category == category)
    }
}

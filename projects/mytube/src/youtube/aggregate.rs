use chrono::{DateTime, Utc};
use interfaces_youtube_client::index::YouTubeClient;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::db::user_data::store::{LoadUserSettingsError, UserSettingsStore};
use crate::youtube::activities::{get_activities_for, GetActivitiesForError};
use crate::youtube::activity_filter::ContentType;
use crate::youtube::subscriptions::{
    get_subscriptions, subscription_channel_id, GetSubscriptionsError,
};

#[derive(Debug, Error)]
pub enum UploadsForCategoryError {
    #[error("LoadUserSettings: {source}")]
    LoadUserSettings {
        #[from]
        source: LoadUserSettingsError,
    },

    #[error("UnknownCategory: {category}")]
    UnknownCategory { category: String },

    #[error("GetActivitiesFor: {channel_id}: {source}")]
    GetActivitiesFor {
        channel_id: String,
        source: GetActivitiesForError,
    },
}

/// New uploads of every subscription filed under `category`, each fetched
/// from that subscription's `last_checked` checkpoint onward.
///
/// Results are concatenated in mapping-table order, not re-sorted by publish
/// time. Checkpoints are only read here; moving them forward is up to the
/// caller.
pub async fn uploads_for_category<S>(
    client: &YouTubeClient,
    store: &S,
    category: &str,
) -> Result<Vec<Value>, UploadsForCategoryError>
where
    S: UserSettingsStore + ?Sized,
{
    let settings = store.user_settings()?;

    if !settings.has_category(category) {
        return Err(UploadsForCategoryError::UnknownCategory {
            category: category.to_string(),
        });
    }

    let mut new_uploads = Vec::new();
    let mut channels = 0usize;

    for entry in settings.entries_for(category) {
        let uploads = get_activities_for(
            client,
            &entry.channel_id,
            entry.last_checked,
            ContentType::Upload.as_str(),
        )
        .await
        .map_err(|source| UploadsForCategoryError::GetActivitiesFor {
            channel_id: entry.channel_id.clone(),
            source,
        })?;

        debug!(
            channel_id = %entry.channel_id,
            last_checked = ?entry.last_checked,
            uploads = uploads.len(),
            "fetched channel uploads"
        );

        channels += 1;
        new_uploads.extend(uploads);
    }

    info!(category, channels, uploads = new_uploads.len(), "aggregated category uploads");

    Ok(new_uploads)
}

#[derive(Debug, Error)]
pub enum UploadsForAllSubscriptionsError {
    #[error("GetSubscriptions: {source}")]
    GetSubscriptions {
        #[from]
        source: GetSubscriptionsError,
    },

    #[error("SubscriptionChannelMissing: {subscription_id}")]
    SubscriptionChannelMissing { subscription_id: String },

    #[error("GetActivitiesFor: {channel_id}: {source}")]
    GetActivitiesFor {
        channel_id: String,
        source: GetActivitiesForError,
    },
}

/// Every subscription of the authenticated user, each carrying the uploads
/// its channel published after `since` under an `activities` key.
pub async fn uploads_for_all_subscriptions(
    client: &YouTubeClient,
    since: Option<DateTime<Utc>>,
) -> Result<Vec<Value>, UploadsForAllSubscriptionsError> {
    let subscriptions = get_subscriptions(client).await?;
    let mut with_uploads = Vec::with_capacity(subscriptions.len());

    for mut subscription in subscriptions {
        let channel_id = subscription_channel_id(&subscription)
            .ok_or_else(|| UploadsForAllSubscriptionsError::SubscriptionChannelMissing {
                subscription_id: subscription
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })?
            .to_string();

        let activities =
            get_activities_for(client, &channel_id, since, ContentType::Upload.as_str())
                .await
                .map_err(|source| UploadsForAllSubscriptionsError::GetActivitiesFor {
                    channel_id: channel_id.clone(),
                    source,
                })?;

        if let Value::Object(record) = &mut subscription {
            record.insert("activities".to_string(), Value::Array(activities));
        }

        with_uploads.push(subscription);
    }

    info!(subscriptions = with_uploads.len(), since = ?since, "aggregated subscription uploads");

    Ok(with_uploads)
}

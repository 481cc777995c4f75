use interfaces_youtube_client::index::YouTubeClient;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::youtube::paginate::{fetch_all, FetchAllError, PagedQuery};

#[derive(Debug, Error)]
pub enum GetSubscriptionsError {
    #[error("FetchAll: {source}")]
    FetchAll {
        #[from]
        source: FetchAllError,
    },
}

/// The authenticated user's full subscription list, across all pages.
pub async fn get_subscriptions(client: &YouTubeClient) -> Result<Vec<Value>, GetSubscriptionsError> {
    let subscriptions = fetch_all(client, &PagedQuery::MySubscriptions).await?;

    info!(count = subscriptions.len(), "fetched subscriptions");

    Ok(subscriptions)
}

/// `snippet.resourceId.channelId` of a subscription resource.
pub fn subscription_channel_id(subscription: &Value) -> Option<&str> {
    subscription
        .pointer("/snippet/resourceId/channelId")
        .and_then(Value::as_str)
}

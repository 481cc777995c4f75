use chrono::{DateTime, Utc};
use interfaces_youtube_activities::index::ListActivitiesQuery;
use interfaces_youtube_client::index::{YouTubeClient, MAX_RESULTS};
use serde_json::Value;
use thiserror::Error;

use crate::youtube::activity_filter::{filter_items, ContentType, InvalidContentTypeError};
use crate::youtube::paginate::{fetch_all, FetchAllError, PagedQuery};

#[derive(Debug, Error)]
pub enum GetActivitiesForError {
    #[error(transparent)]
    InvalidContentType {
        #[from]
        source: InvalidContentTypeError,
    },

    #[error("FetchAll: {source}")]
    FetchAll {
        #[from]
        source: FetchAllError,
    },
}

/// Every activity of `channel_id` published after `since`, restricted to
/// `content_type` (`"all"` keeps everything).
///
/// The content type is checked before anything is requested.
pub async fn get_activities_for(
    client: &YouTubeClient,
    channel_id: &str,
    since: Option<DateTime<Utc>>,
    content_type: &str,
) -> Result<Vec<Value>, GetActivitiesForError> {
    let content_type: ContentType = content_type.parse()?;

    let query = PagedQuery::Activities(ListActivitiesQuery {
        channel_id,
        published_after: since,
        max_results: MAX_RESULTS,
    });

    let items = fetch_all(client, &query).await?;

    Ok(filter_items(items, content_type))
}

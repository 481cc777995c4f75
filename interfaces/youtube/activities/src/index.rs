use chrono::{DateTime, SecondsFormat, Utc};
use interfaces_youtube_client::index::{SendRequestError, YouTubeApiResult, YouTubeClient};
use thiserror::Error;

pub const ACTIVITY_PARTS: &str = "id,snippet,contentDetails";

pub struct ListActivitiesQuery<'a> {
    pub channel_id: &'a str,
    /// Lower bound on `snippet.publishedAt`, unbounded when absent.
    pub published_after: Option<DateTime<Utc>>,
    pub max_results: u32,
}

pub async fn list_activities(
    client: &YouTubeClient,
    query: &ListActivitiesQuery<'_>,
    page_token: Option<&str>,
) -> Result<YouTubeApiResult, ListActivitiesError> {
    let mut params = vec![
        ("part", ACTIVITY_PARTS.to_string()),
        ("channelId", query.channel_id.to_string()),
        ("maxResults", query.max_results.to_string()),
    ];

    if let Some(since) = query.published_after {
        params.push((
            "publishedAfter",
            since.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }

    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }

    let result = client.get("activities", &params).await?;

    Ok(result)
}

/// Inserts an activity (a channel bulletin). `part` must name the top-level
/// keys present in `body`.
pub async fn insert_activity(
    client: &YouTubeClient,
    part: &str,
    body: &serde_json::Value,
) -> Result<YouTubeApiResult, InsertActivityError> {
    let params = [("part", part.to_string())];

    let result = client.post("activities", &params, body).await?;

    Ok(result)
}

#[derive(Debug, Error)]
pub enum ListActivitiesError {
    #[error("SendRequest: {source}")]
    SendRequest {
        #[from]
        source: SendRequestError,
    },
}

#[derive(Debug, Error)]
pub enum InsertActivityError {
    #[error("SendRequest: {source}")]
    SendRequest {
        #[from]
        source: SendRequestError,
    },
}

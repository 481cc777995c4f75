use interfaces_youtube_client::index::{SendRequestError, YouTubeApiResult, YouTubeClient, MAX_RESULTS};
use thiserror::Error;

pub const SUBSCRIPTION_PARTS: &str = "id,snippet,contentDetails";

/// One page of the authenticated user's subscriptions.
pub async fn list_my_subscriptions(
    client: &YouTubeClient,
    page_token: Option<&str>,
) -> Result<YouTubeApiResult, ListMySubscriptionsError> {
    let mut params = vec![
        ("mine", "true".to_string()),
        ("part", SUBSCRIPTION_PARTS.to_string()),
        ("maxResults", MAX_RESULTS.to_string()),
    ];

    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }

    let result = client.get("subscriptions", &params).await?;

    Ok(result)
}

#[derive(Debug, Error)]
pub enum ListMySubscriptionsError {
    #[error("SendRequest: {source}")]
    SendRequest {
        #[from]
        source: SendRequestError,
    },
}

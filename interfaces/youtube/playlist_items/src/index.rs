use interfaces_youtube_client::index::{SendRequestError, YouTubeApiResult, YouTubeClient, MAX_RESULTS};
use thiserror::Error;

pub async fn list_playlist_items(
    client: &YouTubeClient,
    playlist_id: &str,
    page_token: Option<&str>,
) -> Result<YouTubeApiResult, ListPlaylistItemsError> {
    let mut params = vec![
        ("part", "snippet".to_string()),
        ("playlistId", playlist_id.to_string()),
        ("maxResults", MAX_RESULTS.to_string()),
    ];

    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }

    let result = client.get("playlistItems", &params).await?;

    Ok(result)
}

#[derive(Debug, Error)]
pub enum ListPlaylistItemsError {
    #[error("SendRequest: {source}")]
    SendRequest {
        #[from]
        source: SendRequestError,
    },
}

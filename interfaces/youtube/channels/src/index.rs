use interfaces_youtube_client::index::{SendRequestError, YouTubeApiResult, YouTubeClient};
use thiserror::Error;

pub async fn list_my_channels(
    client: &YouTubeClient,
    part: &str,
) -> Result<YouTubeApiResult, ListMyChannelsError> {
    let params = [("mine", "true".to_string()), ("part", part.to_string())];

    let result = client.get("channels", &params).await?;

    Ok(result)
}

#[derive(Debug, Error)]
pub enum ListMyChannelsError {
    #[error("SendRequest: {source}")]
    SendRequest {
        #[from]
        source: SendRequestError,
    },
}

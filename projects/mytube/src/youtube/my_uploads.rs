use interfaces_youtube_channels::index::{list_my_channels, ListMyChannelsError};
use interfaces_youtube_client::index::{UnexpectedStatusError, YouTubeClient};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::youtube::paginate::{fetch_all, FetchAllError, Page, PagedQuery};

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistUploads {
    pub playlist_id: String,
    pub items: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum MyUploadsError {
    #[error("ListMyChannels: {source}")]
    ListMyChannels {
        #[from]
        source: ListMyChannelsError,
    },

    #[error("UnexpectedStatus: {source}")]
    UnexpectedStatus {
        #[from]
        source: UnexpectedStatusError,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("UploadsPlaylistMissing: {channel_id}")]
    UploadsPlaylistMissing { channel_id: String },

    #[error("FetchAll: {source}")]
    FetchAll {
        #[from]
        source: FetchAllError,
    },
}

/// Uploads of each channel owned by the authenticated user, read from the
/// channel's `uploads` playlist.
pub async fn my_uploads(client: &YouTubeClient) -> Result<Vec<PlaylistUploads>, MyUploadsError> {
    let body = list_my_channels(client, "contentDetails")
        .await?
        .into_success_body()?;
    let channels: Page = serde_json::from_str(&body)?;

    let mut uploads = Vec::with_capacity(channels.items.len());

    for channel in &channels.items {
        let playlist_id = channel
            .pointer("/contentDetails/relatedPlaylists/uploads")
            .and_then(Value::as_str)
            .ok_or_else(|| MyUploadsError::UploadsPlaylistMissing {
                channel_id: channel
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })?;

        let items = fetch_all(client, &PagedQuery::PlaylistItems { playlist_id }).await?;
        info!(playlist_id, videos = items.len(), "fetched uploads playlist");

        uploads.push(PlaylistUploads {
            playlist_id: playlist_id.to_string(),
            items,
        });
    }

    Ok(uploads)
}

use interfaces_youtube_activities::index::{
    list_activities, ListActivitiesError, ListActivitiesQuery,
};
use interfaces_youtube_client::index::{UnexpectedStatusError, YouTubeApiResult, YouTubeClient};
use interfaces_youtube_playlist_items::index::{list_playlist_items, ListPlaylistItemsError};
use interfaces_youtube_subscriptions::index::{list_my_subscriptions, ListMySubscriptionsError};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// One page of any Data API list call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub items: Vec<Value>,
    pub next_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: Option<u64>,
    pub results_per_page: Option<u64>,
}

impl Page {
    /// Continuation token, an empty token counts as the last page.
    pub fn cursor(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|token| !token.is_empty())
    }
}

pub enum PagedQuery<'a> {
    Activities(ListActivitiesQuery<'a>),
    MySubscriptions,
    PlaylistItems { playlist_id: &'a str },
}

impl PagedQuery<'_> {
    pub fn resource(&self) -> &'static str {
        match self {
            PagedQuery::Activities(_) => "activities",
            PagedQuery::MySubscriptions => "subscriptions",
            PagedQuery::PlaylistItems { .. } => "playlistItems",
        }
    }

    async fn request(
        &self,
        client: &YouTubeClient,
        page_token: Option<&str>,
    ) -> Result<YouTubeApiResult, FetchAllError> {
        let result = match self {
            PagedQuery::Activities(query) => list_activities(client, query, page_token).await?,
            PagedQuery::MySubscriptions => list_my_subscriptions(client, page_token).await?,
            PagedQuery::PlaylistItems { playlist_id } => {
                list_playlist_items(client, playlist_id, page_token).await?
            }
        };

        Ok(result)
    }
}

#[derive(Debug, Error)]
pub enum FetchAllError {
    #[error("ListActivities: {source}")]
    ListActivities {
        #[from]
        source: ListActivitiesError,
    },

    #[error("ListMySubscriptions: {source}")]
    ListMySubscriptions {
        #[from]
        source: ListMySubscriptionsError,
    },

    #[error("ListPlaylistItems: {source}")]
    ListPlaylistItems {
        #[from]
        source: ListPlaylistItemsError,
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
}

/// Walks every page of `query`, following `nextPageToken` until the provider
/// stops returning one. Items are kept in page order, duplicates included.
///
/// Pages are requested one after another; there is no upper bound on the
/// number of round trips if the provider keeps handing out cursors.
pub async fn fetch_all(
    client: &YouTubeClient,
    query: &PagedQuery<'_>,
) -> Result<Vec<Value>, FetchAllError> {
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let body = query
            .request(client, cursor.as_deref())
            .await?
            .into_success_body()?;

        let page: Page = serde_json::from_str(&body)?;
        pages += 1;

        debug!(
            resource = query.resource(),
            page = pages,
            items = page.items.len(),
            total_results = ?page.page_info.as_ref().and_then(|info| info.total_results),
            "fetched page"
        );

        let next = page.cursor().map(str::to_owned);
        items.extend(page.items);

        match next {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    Ok(items)
}

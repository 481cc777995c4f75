#![allow(dead_code)]

use std::time::Duration;

use interfaces_youtube_client::index::YouTubeClient;
use mockito::ServerGuard;
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token";

pub fn client_for(server: &ServerGuard) -> YouTubeClient {
    YouTubeClient::new(&server.url(), TOKEN, Duration::from_secs(5)).unwrap()
}

/// Body of a list response, with a continuation token when `next` is set.
pub fn page(items: Vec<Value>, next: Option<&str>) -> String {
    let mut body = json!({
        "kind": "youtube#listResponse",
        "pageInfo": { "totalResults": 5, "resultsPerPage": 2 },
        "items": items,
    });
    if let Some(token) = next {
        body["nextPageToken"] = json!(token);
    }
    body.to_string()
}

pub fn subscription(id: &str, channel_id: &str) -> Value {
    json!({
        "kind": "youtube#subscription",
        "id": id,
        "snippet": {
            "title": format!("Channel {channel_id}"),
            "publishedAt": "2020-01-01T00:00:00Z",
            "resourceId": { "kind": "youtube#channel", "channelId": channel_id }
        }
    })
}

pub fn activity(id: &str, channel_id: &str, kind: &str) -> Value {
    json!({
        "kind": "youtube#activity",
        "id": id,
        "snippet": {
            "type": kind,
            "channelId": channel_id,
            "title": format!("Activity {id}"),
            "publishedAt": "2024-03-01T10:00:00Z"
        },
        "contentDetails": { "upload": { "videoId": format!("video-{id}") } }
    })
}

pub fn ids(items: &[Value]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item["id"].as_str().unwrap_or_default())
        .collect()
}

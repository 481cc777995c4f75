use interfaces_youtube_activities::index::{insert_activity, InsertActivityError};
use interfaces_youtube_client::index::{UnexpectedStatusError, YouTubeClient};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

/// What a bulletin links to. A bulletin links to at most one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletinTarget<'a> {
    Video(&'a str),
    Playlist(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ConflictingTarget: video {video_id} and playlist {playlist_id}")]
pub struct ConflictingTargetError {
    pub video_id: String,
    pub playlist_id: String,
}

/// Empty ids count as absent.
pub fn bulletin_target<'a>(
    video_id: Option<&'a str>,
    playlist_id: Option<&'a str>,
) -> Result<Option<BulletinTarget<'a>>, ConflictingTargetError> {
    let video_id = video_id.filter(|id| !id.is_empty());
    let playlist_id = playlist_id.filter(|id| !id.is_empty());

    match (video_id, playlist_id) {
        (Some(video_id), Some(playlist_id)) => Err(ConflictingTargetError {
            video_id: video_id.to_string(),
            playlist_id: playlist_id.to_string(),
        }),
        (Some(video_id), None) => Ok(Some(BulletinTarget::Video(video_id))),
        (None, Some(playlist_id)) => Ok(Some(BulletinTarget::Playlist(playlist_id))),
        (None, None) => Ok(None),
    }
}

pub fn bulletin_body(message: &str, target: Option<BulletinTarget<'_>>) -> Value {
    let mut body = json!({ "snippet": { "description": message } });

    let resource_id = match target {
        Some(BulletinTarget::Video(video_id)) => {
            Some(json!({ "kind": "youtube#video", "videoId": video_id }))
        }
        Some(BulletinTarget::Playlist(playlist_id)) => {
            Some(json!({ "kind": "youtube#playlist", "playlistId": playlist_id }))
        }
        None => None,
    };

    if let (Some(resource_id), Value::Object(fields)) = (resource_id, &mut body) {
        fields.insert(
            "contentDetails".to_string(),
            json!({ "bulletin": { "resourceId": resource_id } }),
        );
    }

    body
}

/// `part` parameter naming the top-level keys of `body`, sorted.
pub fn bulletin_part(body: &Value) -> String {
    let mut parts: Vec<&str> = body
        .as_object()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    parts.sort_unstable();
    parts.join(",")
}

#[derive(Debug, Error)]
pub enum PostBulletinError {
    #[error(transparent)]
    ConflictingTarget {
        #[from]
        source: ConflictingTargetError,
    },

    #[error("InsertActivity: {source}")]
    InsertActivity {
        #[from]
        source: InsertActivityError,
    },

    #[error("UnexpectedStatus: {source}")]
    UnexpectedStatus {
        #[from]
        source: UnexpectedStatusError,
    },
}

/// Posts `message` to the authenticated channel, optionally linking a video
/// or a playlist. Both at once is refused before anything is sent.
pub async fn post_bulletin(
    client: &YouTubeClient,
    message: &str,
    video_id: Option<&str>,
    playlist_id: Option<&str>,
) -> Result<(), PostBulletinError> {
    let target = bulletin_target(video_id, playlist_id)?;
    let body = bulletin_body(message, target);
    let part = bulletin_part(&body);

    insert_activity(client, &part, &body)
        .await?
        .into_success_body()?;

    info!(?target, "posted bulletin");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_targets_conflict() {
        let err = bulletin_target(Some("v1"), Some("p1")).unwrap_err();
        assert_eq!(err.video_id, "v1");
        assert_eq!(err.playlist_id, "p1");
    }

    #[test]
    fn empty_ids_are_ignored() {
        assert_eq!(
            bulletin_target(Some("v1"), Some("")).unwrap(),
            Some(BulletinTarget::Video("v1"))
        );
        assert_eq!(bulletin_target(Some(""), None).unwrap(), None);
    }

    #[test]
    fn plain_message_has_only_a_snippet() {
        let body = bulletin_body("hello", None);
        assert_eq!(body, json!({ "snippet": { "description": "hello" } }));
        assert_eq!(bulletin_part(&body), "snippet");
    }

    #[test]
    fn playlist_target_adds_content_details() {
        let body = bulletin_body("new list", Some(BulletinTarget::Playlist("PL1")));
        assert_eq!(
            body["contentDetails"]["bulletin"]["resourceId"],
            json!({ "kind": "youtube#playlist", "playlistId": "PL1" })
        );
        assert_eq!(bulletin_part(&body), "contentDetails,snippet");
    }
}

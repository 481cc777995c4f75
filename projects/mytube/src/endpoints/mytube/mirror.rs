use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::db::channel::{models::NewChannel, queries::upsert_channels};
use crate::db::video::{models::NewVideo, queries::upsert_videos};
use crate::db::GetConnectionError;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("GetConnection: {source}")]
    GetConnection {
        #[from]
        source: GetConnectionError,
    },

    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },

    #[error("UpsertChannels: {source}")]
    UpsertChannels {
        #[from]
        source: crate::db::channel::queries::UpsertChannelsError,
    },

    #[error("UpsertVideos: {source}")]
    UpsertVideos {
        #[from]
        source: crate::db::video::queries::UpsertVideosError,
    },
}

/// Runs [`mirror_subscriptions`] on the blocking pool and returns at once.
pub fn spawn_mirror_subscriptions(state: &AppState, subscriptions: Vec<Value>) {
    let state = state.clone();
    tokio::task::spawn_blocking(move || mirror_subscriptions(&state, &subscriptions));
}

/// Runs [`mirror_uploads`] on the blocking pool and returns at once.
pub fn spawn_mirror_uploads(state: &AppState, uploads: Vec<Value>) {
    let state = state.clone();
    tokio::task::spawn_blocking(move || mirror_uploads(&state, &uploads));
}

/// Copies subscribed channels into `channels`. Failures are logged only.
pub fn mirror_subscriptions(state: &AppState, subscriptions: &[Value]) {
    let records = channel_records(subscriptions, Utc::now());

    if records.is_empty() {
        return;
    }

    match store_channels(state, &records) {
        Ok(rows) => debug!(rows, "mirrored channels"),
        Err(err) => warn!(error = %err, "mirroring channels failed"),
    }
}

/// Copies upload activities into `videos`. Failures are logged only.
pub fn mirror_uploads(state: &AppState, uploads: &[Value]) {
    let records = video_records(uploads, Utc::now());

    if records.is_empty() {
        return;
    }

    match store_videos(state, &records) {
        Ok(rows) => debug!(rows, "mirrored videos"),
        Err(err) => warn!(error = %err, "mirroring videos failed"),
    }
}

/// One record per channel; a single upsert may not touch a key twice.
pub(crate) fn channel_records(
    subscriptions: &[Value],
    fetched_at: DateTime<Utc>,
) -> Vec<NewChannel<'_>> {
    keep_last_per_key(
        subscriptions
            .iter()
            .filter_map(|subscription| NewChannel::from_subscription(subscription, fetched_at))
            .collect(),
        |record| record.channel_id,
    )
}

/// One record per video, see [`channel_records`].
pub(crate) fn video_records(uploads: &[Value], fetched_at: DateTime<Utc>) -> Vec<NewVideo<'_>> {
    keep_last_per_key(
        uploads
            .iter()
            .filter_map(|activity| NewVideo::from_upload(activity, fetched_at))
            .collect(),
        |record| record.video_id,
    )
}

/// Drops every record whose key shows up again later, so the last
/// occurrence wins. Survivors keep their relative order.
fn keep_last_per_key<T, K>(records: Vec<T>, key: K) -> Vec<T>
where
    K: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut latest: Vec<T> = records
        .into_iter()
        .rev()
        .filter(|record| seen.insert(key(record).to_string()))
        .collect();
    latest.reverse();
    latest
}

fn store_channels(state: &AppState, records: &[NewChannel]) -> Result<usize, MirrorError> {
    let pool = state.pool()?;
    let mut conn = pool.get()?;

    Ok(upsert_channels(&mut conn, records)?)
}

fn store_videos(state: &AppState, records: &[NewVideo]) -> Result<usize, MirrorError> {
    let pool = state.pool()?;
    let mut conn = pool.get()?;

    Ok(upsert_videos(&mut conn, records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upload(video_id: &str, title: &str) -> Value {
        json!({
            "snippet": { "type": "upload", "channelId": "UC_a", "title": title },
            "contentDetails": { "upload": { "videoId": video_id } }
        })
    }

    fn subscription(channel_id: &str, title: &str) -> Value {
        json!({
            "snippet": {
                "title": title,
                "resourceId": { "kind": "youtube#channel", "channelId": channel_id }
            }
        })
    }

    #[test]
    fn repeated_uploads_collapse_to_the_last_one() {
        let uploads = vec![
            upload("v1", "first"),
            upload("v2", "other"),
            upload("v1", "renamed"),
        ];

        let records = video_records(&uploads, Utc::now());

        let seen: Vec<(&str, &str)> = records
            .iter()
            .map(|record| (record.video_id, record.title))
            .collect();
        assert_eq!(seen, vec![("v2", "other"), ("v1", "renamed")]);
    }

    #[test]
    fn repeated_subscriptions_collapse_to_one_channel() {
        let subscriptions = vec![
            subscription("UC_a", "Old name"),
            subscription("UC_a", "New name"),
        ];

        let records = channel_records(&subscriptions, Utc::now());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "New name");
    }

    #[test]
    fn distinct_keys_are_all_kept_in_order() {
        let uploads = vec![upload("v1", "a"), upload("v2", "b"), upload("v3", "c")];

        let ids: Vec<&str> = video_records(&uploads, Utc::now())
            .iter()
            .map(|record| record.video_id)
            .collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);
    }
}

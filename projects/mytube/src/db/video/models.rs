use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

use crate::db::channel::models::parse_timestamp;
use crate::db::schema::videos;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = videos)]
pub struct NewVideo<'a> {
    pub video_id: &'a str,
    pub channel_id: &'a str,
    pub title: &'a str,
    pub published_at: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
}

impl<'a> NewVideo<'a> {
    /// Video record for an `upload` activity; `None` for anything else.
    pub fn from_upload(activity: &'a Value, fetched_at: DateTime<Utc>) -> Option<Self> {
        let video_id = activity
            .pointer("/contentDetails/upload/videoId")
            .and_then(Value::as_str)?;
        let channel_id = activity
            .pointer("/snippet/channelId")
            .and_then(Value::as_str)?;
        let title = activity
            .pointer("/snippet/title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let published_at = activity
            .pointer("/snippet/publishedAt")
            .and_then(Value::as_str)
            .and_then(parse_timestamp);

        Some(Self {
            video_id,
            channel_id,
            title,
            published_at,
            fetched_at,
        })
    }
}

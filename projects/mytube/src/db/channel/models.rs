use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

use crate::db::schema::channels;
use crate::youtube::subscriptions::subscription_channel_id;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = channels)]
pub struct NewChannel<'a> {
    pub channel_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub subscribed_at: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
}

impl<'a> NewChannel<'a> {
    /// Channel record for a subscription resource; `None` when the
    /// subscription carries no channel id.
    pub fn from_subscription(subscription: &'a Value, fetched_at: DateTime<Utc>) -> Option<Self> {
        let channel_id = subscription_channel_id(subscription)?;

        Some(Self {
            channel_id,
            title: snippet_text(subscription, "title"),
            description: snippet_text(subscription, "description"),
            subscribed_at: parse_timestamp(snippet_text(subscription, "publishedAt")),
            fetched_at,
        })
    }
}

fn snippet_text<'v>(resource: &'v Value, field: &str) -> &'v str {
    resource
        .get("snippet")
        .and_then(|snippet| snippet.get(field))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

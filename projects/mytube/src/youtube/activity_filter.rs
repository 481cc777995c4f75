use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// Values of an activity's `snippet.type`, plus `All` for no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Bulletin,
    ChannelItem,
    Comment,
    Favorite,
    Like,
    PlaylistItem,
    Recommendation,
    Social,
    Subscription,
    Upload,
    All,
}

impl ContentType {
    pub const VARIANTS: [ContentType; 11] = [
        ContentType::Bulletin,
        ContentType::ChannelItem,
        ContentType::Comment,
        ContentType::Favorite,
        ContentType::Like,
        ContentType::PlaylistItem,
        ContentType::Recommendation,
        ContentType::Social,
        ContentType::Subscription,
        ContentType::Upload,
        ContentType::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Bulletin => "bulletin",
            ContentType::ChannelItem => "channelItem",
            ContentType::Comment => "comment",
            ContentType::Favorite => "favorite",
            ContentType::Like => "like",
            ContentType::PlaylistItem => "playlistItem",
            ContentType::Recommendation => "recommendation",
            ContentType::Social => "social",
            ContentType::Subscription => "subscription",
            ContentType::Upload => "upload",
            ContentType::All => "all",
        }
    }

    pub fn matches(&self, item: &Value) -> bool {
        match self {
            ContentType::All => true,
            tag => activity_type(item) == Some(tag.as_str()),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = InvalidContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::VARIANTS
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| InvalidContentTypeError {
                content_type: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("InvalidContentType: {content_type}")]
pub struct InvalidContentTypeError {
    pub content_type: String,
}

pub fn activity_type(item: &Value) -> Option<&str> {
    item.pointer("/snippet/type").and_then(Value::as_str)
}

pub fn filter_by_type(
    items: Vec<Value>,
    content_type: &str,
) -> Result<Vec<Value>, InvalidContentTypeError> {
    let content_type: ContentType = content_type.parse()?;

    Ok(filter_items(items, content_type))
}

/// Keeps the items tagged `content_type`, in their original order.
pub fn filter_items(items: Vec<Value>, content_type: ContentType) -> Vec<Value> {
    if content_type == ContentType::All {
        return items;
    }

    items
        .into_iter()
        .filter(|item| content_type.matches(item))
        .collect()
}

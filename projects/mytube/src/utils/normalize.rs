//! Attribute-style view over Data API payloads.
//!
//! `normalize` either hands the payload back untouched or rewrites every
//! JSON object into a [`ResponseObject`] whose keys are addressable as
//! attributes (`attr`, dotted `path`). Arrays keep their order and scalars
//! are carried over as-is, so converting back with `into_value` is lossless.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    Raw(Value),
    Object(YouTubeResponse),
}

impl Normalized {
    pub fn into_value(self) -> Value {
        match self {
            Normalized::Raw(value) => value,
            Normalized::Object(response) => response.into_value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum YouTubeResponse {
    Mapping(ResponseObject),
    Sequence(Vec<YouTubeResponse>),
    Scalar(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseObject {
    attributes: BTreeMap<String, YouTubeResponse>,
}

impl ResponseObject {
    pub fn attr(&self, name: &str) -> Option<&YouTubeResponse> {
        self.attributes.get(name)
    }

    /// The resource `kind` (`youtube#subscription`, ...) when present.
    pub fn kind(&self) -> Option<&str> {
        self.attr("kind").and_then(YouTubeResponse::as_str)
    }
}

impl fmt::Display for ResponseObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "<YouTubeResponse kind: '{kind}'>"),
            None => write!(f, "<YouTubeResponse kind: unknown>"),
        }
    }
}

impl YouTubeResponse {
    pub fn attr(&self, name: &str) -> Option<&YouTubeResponse> {
        self.as_object().and_then(|object| object.attr(name))
    }

    /// Follows a dotted attribute path, e.g. `snippet.resourceId.channelId`.
    pub fn path(&self, dotted: &str) -> Option<&YouTubeResponse> {
        dotted
            .split('.')
            .try_fold(self, |current, name| current.attr(name))
    }

    pub fn as_object(&self) -> Option<&ResponseObject> {
        match self {
            YouTubeResponse::Mapping(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[YouTubeResponse]> {
        match self {
            YouTubeResponse::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            YouTubeResponse::Scalar(value) => value.as_str(),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            YouTubeResponse::Mapping(object) => Value::Object(
                object
                    .attributes
                    .into_iter()
                    .map(|(key, value)| (key, value.into_value()))
                    .collect(),
            ),
            YouTubeResponse::Sequence(items) => {
                Value::Array(items.into_iter().map(YouTubeResponse::into_value).collect())
            }
            YouTubeResponse::Scalar(value) => value,
        }
    }
}

impl From<Value> for YouTubeResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => YouTubeResponse::Mapping(ResponseObject {
                attributes: map
                    .into_iter()
                    .map(|(key, value)| (key, YouTubeResponse::from(value)))
                    .collect(),
            }),
            Value::Array(items) => {
                YouTubeResponse::Sequence(items.into_iter().map(YouTubeResponse::from).collect())
            }
            scalar => YouTubeResponse::Scalar(scalar),
        }
    }
}

pub fn normalize(value: Value, enabled: bool) -> Normalized {
    if !enabled {
        return Normalized::Raw(value);
    }

    Normalized::Object(YouTubeResponse::from(value))
}

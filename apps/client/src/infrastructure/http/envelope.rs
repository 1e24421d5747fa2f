//! Wire shapes of the remote API.
//!
//! Responses are loose JSON objects: `statusCode` and `message` sit next to
//! the payload keys, or the payload is nested under `data`. Counts may be
//! `null`, and the comment list key is spelled two ways across verticals.

use crate::domain::{
    reaction::{
        comment::Comment,
        gateway::{CommentsSnapshot, LikeRecord, LikesSnapshot},
    },
    shared::{ids::UserId, response::GatewayResponse},
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionEnvelope {
    /// Falls back to the HTTP status when the body carries none.
    pub fn into_response(self, http_status: u16) -> GatewayResponse {
        GatewayResponse::new(
            self.status_code.unwrap_or(http_status),
            self.message.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct LikeRow {
    #[serde(default)]
    user_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
pub struct LikesEnvelope {
    #[serde(rename = "totalLikes", default)]
    total_likes: Option<u64>,
    #[serde(rename = "AllLikes", alias = "allLikes", default)]
    all_likes: Option<Vec<LikeRow>>,
}

impl From<LikesEnvelope> for LikesSnapshot {
    fn from(envelope: LikesEnvelope) -> Self {
        Self {
            total_likes: envelope.total_likes.unwrap_or(0),
            all_likes: envelope
                .all_likes
                .unwrap_or_default()
                .into_iter()
                .map(|row| LikeRecord { user_id: row.user_id })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentsEnvelope {
    #[serde(rename = "totalComments", default)]
    total_comments: Option<u64>,
    #[serde(
        rename = "AllComments",
        alias = "AllComents",
        alias = "allComments",
        default
    )]
    all_comments: Option<Vec<Comment>>,
}

impl From<CommentsEnvelope> for CommentsSnapshot {
    fn from(envelope: CommentsEnvelope) -> Self {
        Self {
            total_comments: envelope.total_comments.unwrap_or(0),
            all_comments: envelope.all_comments.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AlertEnvelope {
    #[serde(default)]
    pub alert: Option<bool>,
}

/// Unwraps `{"data": {...}}` bodies; flat bodies are returned unchanged.
pub fn payload_of(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

use super::comment::Comment;
use crate::domain::{
    content::errors::DomainError,
    shared::{
        ids::{ItemId, UserId},
        response::GatewayResponse,
    },
};
use async_trait::async_trait;

/// Context of a like or comment mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRequest {
    pub user_id: UserId,
    pub item_id: ItemId,
    /// Comment body; `None` for like toggles
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRecord {
    pub user_id: Option<UserId>,
}

/// Authoritative like data for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikesSnapshot {
    pub total_likes: u64,
    pub all_likes: Vec<LikeRecord>,
}

impl LikesSnapshot {
    pub fn includes(&self, user_id: &UserId) -> bool {
        self.all_likes
            .iter()
            .any(|like| like.user_id.as_ref() == Some(user_id))
    }
}

/// Authoritative comment data for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentsSnapshot {
    pub total_comments: u64,
    pub all_comments: Vec<Comment>,
}

/// Remote reaction endpoints of one vertical.
///
/// Mutations report success only through `status_code == 201`; any other
/// status, like an `Err`, means the mutation did not happen.
#[async_trait]
pub trait ReactionGateway: Send + Sync {
    async fn toggle_like(&self, request: &ReactionRequest) -> Result<GatewayResponse, DomainError>;
    async fn fetch_likes(&self, item_id: &ItemId) -> Result<LikesSnapshot, DomainError>;
    async fn add_comment(&self, request: &ReactionRequest) -> Result<GatewayResponse, DomainError>;
    async fn fetch_comments(&self, item_id: &ItemId) -> Result<CommentsSnapshot, DomainError>;
}

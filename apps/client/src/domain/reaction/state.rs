use super::{
    comment::{Comment, CommentEntry},
    gateway::{CommentsSnapshot, LikesSnapshot},
};
use crate::domain::shared::ids::UserId;
use serde::Serialize;
use uuid::Uuid;

/// Like count and liked flag, always moved together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LikeTally {
    pub count: u64,
    pub liked: bool,
}

/// Client-only reaction state of one displayed item.
///
/// Lives as long as the detail view that owns it. Only the reaction
/// controller mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReactionState {
    pub like_count: u64,
    pub is_liked_by_current_user: bool,
    pub comments: Vec<CommentEntry>,
    pub total_comment_count: u64,
    pub pending_comment_text: String,
}

impl ReactionState {
    pub fn like_tally(&self) -> LikeTally {
        LikeTally {
            count: self.like_count,
            liked: self.is_liked_by_current_user,
        }
    }

    /// Optimistically flips the like and returns the tally it replaced.
    pub fn flip_like(&mut self) -> LikeTally {
        let before = self.like_tally();
        self.is_liked_by_current_user = !before.liked;
        self.like_count = if before.liked {
            before.count.saturating_sub(1)
        } else {
            before.count + 1
        };
        before
    }

    pub fn restore_likes(&mut self, tally: LikeTally) {
        self.like_count = tally.count;
        self.is_liked_by_current_user = tally.liked;
    }

    /// Undoes one optimistic flip that turned `before` into `after`.
    ///
    /// If nothing moved the tally since, `before` comes back verbatim.
    /// Otherwise a later flip is layered on top, so only the inverse of
    /// this flip is applied and the later one survives.
    pub fn revert_flip(&mut self, before: LikeTally, after: LikeTally) {
        if self.like_tally() == after {
            self.restore_likes(before);
        } else {
            self.flip_like();
        }
    }

    pub fn apply_likes(&mut self, snapshot: &LikesSnapshot, user_id: &UserId) {
        self.like_count = snapshot.total_likes;
        self.is_liked_by_current_user = snapshot.includes(user_id);
    }

    pub fn push_pending_comment(&mut self, local_id: Uuid, comment: Comment) {
        self.comments.push(CommentEntry::Pending { local_id, comment });
    }

    /// Drops one placeholder. Returns false when it was already gone.
    pub fn remove_pending_comment(&mut self, local_id: Uuid) -> bool {
        let before = self.comments.len();
        self.comments.retain(|entry| match entry {
            CommentEntry::Pending { local_id: id, .. } => *id != local_id,
            CommentEntry::Confirmed(_) => true,
        });
        self.comments.len() != before
    }

    /// Replaces the comment list wholesale, placeholders included.
    pub fn apply_comments(&mut self, snapshot: CommentsSnapshot) {
        self.total_comment_count = snapshot.total_comments;
        self.comments = snapshot
            .all_comments
            .into_iter()
            .map(CommentEntry::Confirmed)
            .collect();
    }

    pub fn pending_comments(&self) -> usize {
        self.comments.iter().filter(|entry| entry.is_pending()).count()
    }
}

use super::sequencer::RequestTrack;
use crate::{
    domain::{
        content::errors::DomainError,
        reaction::{
            comment::Comment,
            gateway::{LikesSnapshot, ReactionGateway, ReactionRequest},
            state::ReactionState,
        },
        shared::{ids::ItemId, response::GatewayResponse, session::SessionContext},
    },
    infrastructure::notify::traits::{Notification, NotificationSink},
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// How a like or comment mutation ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing was done: placeholder item or blank comment.
    Skipped,
    /// The server confirmed and local state now mirrors its answer.
    Reconciled,
    /// The server confirmed but the follow-up fetch failed; the optimistic
    /// value stays until the next sync.
    Unreconciled,
    /// A newer request on the same item owns reconciliation.
    Superseded,
}

struct Inner {
    state: ReactionState,
    likes: RequestTrack,
    comments: RequestTrack,
}

/// Optimistic like/comment logic for one displayed item.
///
/// Local state changes before the remote call is made and is then either
/// reconciled with freshly fetched server state or rolled back. Methods
/// take `&self`, so several mutations may be in flight at once; per-kind
/// request tokens make sure only the newest one writes reconciled state.
///
/// The state lock is never held across an `.await`.
pub struct ReactionController<G: ?Sized> {
    gateway: Arc<G>,
    notifier: Arc<dyn NotificationSink>,
    session: Arc<SessionContext>,
    item_id: Option<ItemId>,
    inner: Mutex<Inner>,
}

fn sync_failure(result: Result<GatewayResponse, DomainError>, action: &str) -> Option<DomainError> {
    match result {
        Ok(response) if response.is_created() => None,
        Ok(response) => Some(DomainError::ReactionSyncError(format!(
            "{action} rejected with status {}: {}",
            response.status_code, response.message
        ))),
        Err(err) => Some(DomainError::ReactionSyncError(format!("{action} failed: {err}"))),
    }
}

impl<G> ReactionController<G>
where
    G: ReactionGateway + ?Sized,
{
    pub fn new(
        item_id: Option<ItemId>,
        gateway: Arc<G>,
        notifier: Arc<dyn NotificationSink>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            session,
            item_id,
            inner: Mutex::new(Inner {
                state: ReactionState::default(),
                likes: RequestTrack::default(),
                comments: RequestTrack::default(),
            }),
        }
    }

    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }

    pub fn state(&self) -> ReactionState {
        self.inner.lock().state.clone()
    }

    /// Binds the comment input field.
    pub fn set_comment_text(&self, text: impl Into<String>) {
        self.inner.lock().state.pending_comment_text = text.into();
    }

    /// Fetches likes and comments concurrently for a freshly opened item.
    ///
    /// Each half is applied on its own; a failed fetch leaves that half
    /// untouched and its error is returned after the other half is applied.
    /// Results are discarded if a mutation was dispatched meanwhile.
    #[instrument(skip(self), fields(item_id = ?self.item_id))]
    pub async fn load_snapshot(&self) -> Result<(), DomainError> {
        let Some(item_id) = &self.item_id else {
            debug!("placeholder item, snapshot skipped");
            return Ok(());
        };

        let (like_epoch, comment_epoch) = {
            let inner = self.inner.lock();
            (inner.likes.epoch(), inner.comments.epoch())
        };

        let (likes, comments) = tokio::join!(
            self.gateway.fetch_likes(item_id),
            self.gateway.fetch_comments(item_id)
        );

        let likes = likes.map(|snapshot| {
            self.apply_likes_if_current(&snapshot, like_epoch);
        });
        let comments = comments.map(|snapshot| {
            let mut inner = self.inner.lock();
            if inner.comments.accepts_fetch(comment_epoch) {
                inner.state.apply_comments(snapshot);
                inner.comments.mark_synced();
            }
        });

        if let Err(err) = &likes {
            warn!(error = %err, "failed to fetch likes");
        }
        if let Err(err) = &comments {
            warn!(error = %err, "failed to fetch comments");
        }
        likes.and(comments)
    }

    /// Flips the like immediately, then confirms it with the server.
    ///
    /// On a `201` the like data is re-fetched and overwrites the optimistic
    /// guess. On any other answer this flip alone is undone, leaving other
    /// toggles still in flight on screen, and the user is notified.
    #[instrument(skip(self), fields(item_id = ?self.item_id))]
    pub async fn toggle_like(&self) -> Result<SyncOutcome, DomainError> {
        let Some(item_id) = self.item_id.clone() else {
            return Ok(SyncOutcome::Skipped);
        };

        let (token, revision, before, after) = {
            let mut inner = self.inner.lock();
            let before = inner.state.flip_like();
            let after = inner.state.like_tally();
            (inner.likes.issue(), inner.likes.revision(), before, after)
        };
        debug!(token, liked = after.liked, "optimistic like toggle");

        let request = ReactionRequest {
            user_id: self.session.user_id.clone(),
            item_id: item_id.clone(),
            text: None,
        };
        let failure = sync_failure(self.gateway.toggle_like(&request).await, "like");

        if let Some(error) = failure {
            let resync = {
                let mut inner = self.inner.lock();
                // server state written since dispatch already lacks this flip
                let untouched = inner.likes.revision() == revision;
                if untouched {
                    inner.state.revert_flip(before, after);
                }
                inner.likes.finish(untouched)
            };
            warn!(token, error = %error, "like toggle failed");
            self.notifier
                .notify(Notification::error("Could not update your like"));
            if resync {
                self.resync_likes(&item_id).await;
            }
            return Err(error);
        }

        let fetched = self.gateway.fetch_likes(&item_id).await;
        let (outcome, resync) = {
            let mut inner = self.inner.lock();
            let outcome = match (inner.likes.is_latest(token), fetched) {
                (true, Ok(snapshot)) => {
                    inner.state.apply_likes(&snapshot, &self.session.user_id);
                    inner.likes.mark_applied();
                    SyncOutcome::Reconciled
                }
                (true, Err(err)) => {
                    warn!(token, error = %err, "like confirmed but refresh failed");
                    SyncOutcome::Unreconciled
                }
                (false, _) => SyncOutcome::Superseded,
            };
            let resync = inner.likes.finish(outcome != SyncOutcome::Superseded);
            (outcome, resync)
        };
        debug!(token, ?outcome, "like toggle settled");
        if resync {
            self.resync_likes(&item_id).await;
        }
        Ok(outcome)
    }

    /// Appends an optimistic comment, then confirms it with the server.
    ///
    /// On a `201` the placeholder is dropped and the whole list re-fetched.
    /// On failure only this placeholder is removed and the typed text goes
    /// back into the input if it is still empty. The user is notified.
    #[instrument(skip(self, text), fields(item_id = ?self.item_id))]
    pub async fn submit_comment(&self, text: &str) -> Result<SyncOutcome, DomainError> {
        if text.trim().is_empty() {
            return Ok(SyncOutcome::Skipped);
        }
        let Some(item_id) = self.item_id.clone() else {
            return Ok(SyncOutcome::Skipped);
        };

        let local_id = Uuid::now_v7();
        let token = {
            let mut inner = self.inner.lock();
            inner
                .state
                .push_pending_comment(local_id, Comment::authored_by(&self.session, text));
            inner.state.pending_comment_text.clear();
            inner.comments.issue()
        };
        debug!(token, %local_id, "optimistic comment appended");

        let request = ReactionRequest {
            user_id: self.session.user_id.clone(),
            item_id: item_id.clone(),
            text: Some(text.to_string()),
        };
        let failure = sync_failure(self.gateway.add_comment(&request).await, "comment");

        if let Some(error) = failure {
            let resync = {
                let mut inner = self.inner.lock();
                if !inner.state.remove_pending_comment(local_id) {
                    debug!(token, "placeholder already replaced by a fetched list");
                }
                if inner.state.pending_comment_text.is_empty() {
                    inner.state.pending_comment_text = text.to_string();
                }
                inner.comments.finish(true)
            };
            warn!(token, error = %error, "comment failed");
            self.notifier
                .notify(Notification::error("Could not post your comment"));
            if resync {
                self.resync_comments(&item_id).await;
            }
            return Err(error);
        }

        let fetched = self.gateway.fetch_comments(&item_id).await;
        let (outcome, resync) = {
            let mut inner = self.inner.lock();
            let outcome = match (inner.comments.is_latest(token), fetched) {
                (true, Ok(snapshot)) => {
                    inner.state.apply_comments(snapshot);
                    inner.comments.mark_applied();
                    SyncOutcome::Reconciled
                }
                (true, Err(err)) => {
                    warn!(token, error = %err, "comment confirmed but refresh failed");
                    SyncOutcome::Unreconciled
                }
                (false, _) => SyncOutcome::Superseded,
            };
            let resync = inner.comments.finish(outcome != SyncOutcome::Superseded);
            (outcome, resync)
        };
        debug!(token, ?outcome, "comment settled");
        if resync {
            self.resync_comments(&item_id).await;
        }
        Ok(outcome)
    }

    /// Submits whatever is in the comment input.
    pub async fn submit_pending_comment(&self) -> Result<SyncOutcome, DomainError> {
        let text = self.inner.lock().state.pending_comment_text.clone();
        self.submit_comment(&text).await
    }

    fn apply_likes_if_current(&self, snapshot: &LikesSnapshot, epoch: u64) -> bool {
        let mut inner = self.inner.lock();
        if !inner.likes.accepts_fetch(epoch) {
            return false;
        }
        inner.state.apply_likes(snapshot, &self.session.user_id);
        inner.likes.mark_synced();
        true
    }

    async fn resync_likes(&self, item_id: &ItemId) {
        let epoch = self.inner.lock().likes.epoch();
        match self.gateway.fetch_likes(item_id).await {
            Ok(snapshot) => {
                if !self.apply_likes_if_current(&snapshot, epoch) {
                    debug!("like resync superseded by a newer toggle");
                    self.inner.lock().likes.mark_dirty();
                }
            }
            Err(err) => warn!(error = %err, "like resync failed"),
        }
    }

    async fn resync_comments(&self, item_id: &ItemId) {
        let epoch = self.inner.lock().comments.epoch();
        match self.gateway.fetch_comments(item_id).await {
            Ok(snapshot) => {
                let mut inner = self.inner.lock();
                if inner.comments.accepts_fetch(epoch) {
                    inner.state.apply_comments(snapshot);
                    inner.comments.mark_synced();
                } else {
                    debug!("comment resync superseded by a newer submission");
                    inner.comments.mark_dirty();
                }
            }
            Err(err) => warn!(error = %err, "comment resync failed"),
        }
    }
}

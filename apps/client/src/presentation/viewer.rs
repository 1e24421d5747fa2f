use super::format::{download_url, ellipsize};
use crate::{
    application::reactions::{ReactionController, SyncOutcome},
    domain::{
        content::{entity::ContentItem, errors::DomainError},
        reaction::{comment::CommentEntry, gateway::ReactionGateway},
        shared::session::SessionContext,
    },
    infrastructure::notify::traits::NotificationSink,
};
use serde::Serialize;
use std::sync::Arc;

/// Everything a detail screen renders for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub media_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub like_count: u64,
    pub is_liked: bool,
    pub comments: Vec<CommentEntry>,
    pub total_comments: u64,
    pub comment_text: String,
    pub share_link: String,
    pub download_url: String,
    /// Placeholder items render without reactions.
    pub reactions_enabled: bool,
}

/// One open detail view: the item plus its reaction state.
pub struct DetailViewer<G: ReactionGateway + ?Sized> {
    item: ContentItem,
    controller: ReactionController<G>,
    name_limit: usize,
}

impl<G> DetailViewer<G>
where
    G: ReactionGateway + ?Sized,
{
    pub fn new(
        item: ContentItem,
        gateway: Arc<G>,
        notifier: Arc<dyn NotificationSink>,
        session: Arc<SessionContext>,
        name_limit: usize,
    ) -> Self {
        let controller = ReactionController::new(item.id.clone(), gateway, notifier, session);
        Self {
            item,
            controller,
            name_limit,
        }
    }

    pub fn item(&self) -> &ContentItem {
        &self.item
    }

    pub fn controller(&self) -> &ReactionController<G> {
        &self.controller
    }

    /// Loads likes and comments, unless the item is a placeholder.
    pub async fn open(&self) -> Result<(), DomainError> {
        if self.item.is_placeholder() {
            return Ok(());
        }
        self.controller.load_snapshot().await
    }

    pub async fn like(&self) -> Result<SyncOutcome, DomainError> {
        self.controller.toggle_like().await
    }

    pub fn type_comment(&self, text: impl Into<String>) {
        self.controller.set_comment_text(text);
    }

    pub async fn send_comment(&self) -> Result<SyncOutcome, DomainError> {
        self.controller.submit_pending_comment().await
    }

    pub fn view(&self) -> DetailView {
        let state = self.controller.state();
        DetailView {
            media_url: self.item.media_url.clone(),
            title: self.item.title.clone(),
            description: self.item.description.clone(),
            author_name: self
                .item
                .author_display_name
                .as_deref()
                .map(|name| ellipsize(name, self.name_limit)),
            author_avatar_url: self.item.author_avatar_url.clone(),
            like_count: state.like_count,
            is_liked: state.is_liked_by_current_user,
            comments: state.comments,
            total_comments: state.total_comment_count,
            comment_text: state.pending_comment_text,
            share_link: self.item.media_url.clone(),
            download_url: download_url(&self.item.media_url),
            reactions_enabled: !self.item.is_placeholder(),
        }
    }
}

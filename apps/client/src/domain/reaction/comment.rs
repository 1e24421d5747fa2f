use crate::domain::{
    content::entity::non_empty,
    shared::{ids::UserId, session::SessionContext},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawComment")]
pub struct Comment {
    pub author_id: Option<UserId>,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub text: String,
}

/// Wire shape of a comment row; see `ContentItem` for why each spelling is
/// its own field.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawComment {
    author_id: Option<UserId>,
    user_id: Option<UserId>,
    author_display_name: Option<String>,
    username: Option<String>,
    author_avatar_url: Option<String>,
    user_image: Option<String>,
    userimage: Option<String>,
    text: Option<String>,
    comment: Option<String>,
}

impl TryFrom<RawComment> for Comment {
    type Error = String;

    fn try_from(raw: RawComment) -> Result<Self, Self::Error> {
        let text = raw
            .text
            .or(raw.comment)
            .ok_or_else(|| "comment row without text".to_string())?;
        Ok(Self {
            author_id: raw.author_id.or(raw.user_id),
            author_display_name: raw.author_display_name.or(raw.username),
            author_avatar_url: non_empty(raw.author_avatar_url)
                .or(non_empty(raw.user_image))
                .or(non_empty(raw.userimage)),
            text,
        })
    }
}

impl Comment {
    /// Comment attributed to the signed-in user.
    pub fn authored_by(session: &SessionContext, text: impl Into<String>) -> Self {
        Self {
            author_id: Some(session.user_id.clone()),
            author_display_name: session.display_name.clone(),
            author_avatar_url: session.avatar_url.clone(),
            text: text.into(),
        }
    }
}

/// A comment as held in local state: either returned by the server or an
/// optimistic placeholder awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CommentEntry {
    Confirmed(Comment),
    Pending { local_id: Uuid, comment: Comment },
}

impl CommentEntry {
    pub fn comment(&self) -> &Comment {
        match self {
            CommentEntry::Confirmed(comment) => comment,
            CommentEntry::Pending { comment, .. } => comment,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CommentEntry::Pending { .. })
    }
}

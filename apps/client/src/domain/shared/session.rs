use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// Read-only view of the signed-in user, handed to every controller and
/// use case at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Bearer token for the remote API. Never serialized.
    #[serde(skip)]
    pub token: Option<String>,
}

impl SessionContext {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            avatar_url: None,
            token: None,
        }
    }

    pub fn with_profile(mut self, display_name: Option<String>, avatar_url: Option<String>) -> Self {
        self.display_name = display_name;
        self.avatar_url = avatar_url;
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

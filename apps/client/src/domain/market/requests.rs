use crate::domain::shared::ids::{ItemId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRequest {
    pub item_id: ItemId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRequest {
    pub item_id: ItemId,
    /// Normalized decimal amount, e.g. `"120.50"`
    pub price: String,
    pub sender_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub user_id: UserId,
    pub category_id: String,
}

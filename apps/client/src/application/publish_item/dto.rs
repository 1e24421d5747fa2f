use crate::domain::{content::media::MediaBlob, shared::ids::UserId};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `range` lets NaN through, so non-finite prices are refused separately.
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("Price must be a number".into()))
    }
}

#[derive(Debug, Clone, Validate)]
pub struct NewVideo {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub category_id: String,
    #[validate(length(min = 1, message = "Sub Category is required"))]
    pub sub_category: String,
    pub video: MediaBlob,
    pub thumbnail: MediaBlob,
}

#[derive(Debug, Clone, Validate)]
pub struct NewPicTour {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub category_id: String,
    #[validate(length(min = 1, message = "Sub Category is required"))]
    pub sub_category: String,
    pub image: MediaBlob,
}

#[derive(Debug, Clone, Validate)]
pub struct NewQafi {
    #[validate(length(min = 1, message = "Qafi is required"))]
    pub description: String,
    pub category_id: String,
    #[validate(length(min = 1, message = "Sub Category is required"))]
    pub sub_category: String,
    pub image: MediaBlob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCondition {
    #[serde(rename = "new")]
    New,
    #[serde(rename = "used_Like_new")]
    UsedLikeNew,
    #[serde(rename = "used_Good")]
    UsedGood,
    #[serde(rename = "used_Fair")]
    UsedFair,
}

#[derive(Debug, Clone, Validate)]
pub struct NewMarketItem {
    #[validate(length(min = 1, message = "Item Category is required"))]
    pub item_category: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(
        custom(function = "finite_price"),
        range(min = 0.0, message = "Price must be greater than or equal to 0")
    )]
    pub price: f64,
    pub condition: ItemCondition,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    pub images: Vec<MediaBlob>,
}

/// Bodies sent to the create endpoints once media is hosted.
#[derive(Debug, Serialize)]
pub(crate) struct VideoPayload<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub video_category: &'a str,
    pub sub_category: &'a str,
    pub video: String,
    pub thumbnail: String,
    pub user_id: &'a UserId,
}

#[derive(Debug, Serialize)]
pub(crate) struct PicTourPayload<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub pic_category: &'a str,
    pub sub_category: &'a str,
    pub image: String,
    pub user_id: &'a UserId,
}

#[derive(Debug, Serialize)]
pub(crate) struct QafiPayload<'a> {
    pub description: &'a str,
    pub category: &'a str,
    pub sub_category: &'a str,
    pub image: String,
    pub user_id: &'a UserId,
}

#[derive(Debug, Serialize)]
pub(crate) struct MarketItemPayload<'a> {
    pub user_id: &'a UserId,
    pub item_category: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub condition: ItemCondition,
    pub location: &'a str,
    pub region: &'a str,
    pub paid_status: bool,
    pub images: Vec<String>,
}

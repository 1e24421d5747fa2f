use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref AMOUNT_REGEX: regex::Regex = regex::Regex::new(r"^\d+(\.\d{1,2})?$").unwrap();
}

/// Amount typed into the offer dialog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OfferAmount {
    #[validate(regex(path = *AMOUNT_REGEX, message = "Please enter a valid amount"))]
    pub value: String,
}

impl OfferAmount {
    pub fn new(value: &str) -> Result<Self, validator::ValidationErrors> {
        let amount = Self {
            value: value.trim().to_string(),
        };
        amount.validate()?;
        Ok(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.value.chars().all(|c| c == '0' || c == '.')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkOutcome {
    Added,
    /// The item was already bookmarked, so the bookmark was removed.
    Removed,
}

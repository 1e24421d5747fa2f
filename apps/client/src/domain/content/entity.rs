use crate::domain::shared::ids::{ItemId, UserId};
use serde::{Deserialize, Serialize};

/// A displayable piece of content: a video, a pic tour photo, a qafi post or
/// a market listing.
///
/// Items are immutable once fetched. Each vertical names its identifier
/// differently upstream (`video_id`, `tour_id`, `qafi_id`, `id`); all of them
/// land in `id`. "Top" items shown as placeholders have no identity and never
/// trigger remote reaction calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContentItem")]
pub struct ContentItem {
    pub id: Option<ItemId>,

    /// Primary media asset (image or video URL)
    pub media_url: String,

    /// Extra images of a market listing
    pub gallery: Vec<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    pub author_id: Option<UserId>,

    pub author_display_name: Option<String>,

    pub author_avatar_url: Option<String>,

    /// Market listings are grouped by category for price alerts
    pub category_id: Option<String>,
}

/// Wire shape of an item. Upstream rows may carry several spellings of one
/// field at once, some of them null, so every spelling is read on its own
/// and the first non-empty one wins.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawContentItem {
    id: Option<ItemId>,
    video_id: Option<ItemId>,
    tour_id: Option<ItemId>,
    qafi_id: Option<ItemId>,
    media_url: Option<String>,
    image: Option<String>,
    video: Option<String>,
    gallery: Option<Vec<String>>,
    images: Option<Vec<String>>,
    title: Option<String>,
    name: Option<String>,
    description: Option<String>,
    author_id: Option<UserId>,
    user_id: Option<UserId>,
    author_display_name: Option<String>,
    username: Option<String>,
    author_avatar_url: Option<String>,
    user_image: Option<String>,
    userimage: Option<String>,
    category_id: Option<String>,
    item_category: Option<String>,
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

impl From<RawContentItem> for ContentItem {
    fn from(raw: RawContentItem) -> Self {
        Self {
            id: raw.id.or(raw.video_id).or(raw.tour_id).or(raw.qafi_id),
            media_url: non_empty(raw.media_url)
                .or(non_empty(raw.image))
                .or(non_empty(raw.video))
                .unwrap_or_default(),
            gallery: raw.gallery.or(raw.images).unwrap_or_default(),
            title: raw.title.or(raw.name),
            description: raw.description,
            author_id: raw.author_id.or(raw.user_id),
            author_display_name: raw.author_display_name.or(raw.username),
            author_avatar_url: non_empty(raw.author_avatar_url)
                .or(non_empty(raw.user_image))
                .or(non_empty(raw.userimage)),
            category_id: raw.category_id.or(raw.item_category),
        }
    }
}

impl ContentItem {
    pub fn with_id(id: impl Into<ItemId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

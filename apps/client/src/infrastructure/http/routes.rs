use crate::domain::content::vertical::Vertical;

/// Endpoint paths and payload key names of one vertical.
///
/// Upstream services grew independently, so the item key differs between
/// verticals and sometimes between the like and comment calls of the same
/// vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalRoutes {
    pub toggle_like: &'static str,
    pub likes: &'static str,
    pub add_comment: &'static str,
    pub comments: &'static str,
    pub create: &'static str,
    pub like_item_key: &'static str,
    pub comment_item_key: &'static str,
}

const VIDEO: VerticalRoutes = VerticalRoutes {
    toggle_like: "/videomania/like-unlike",
    likes: "/videomania/likes",
    add_comment: "/videomania/comment",
    comments: "/videomania/comments",
    create: "/videomania/add",
    like_item_key: "video_id",
    comment_item_key: "video_id",
};

const PIC_TOUR: VerticalRoutes = VerticalRoutes {
    toggle_like: "/pictours/like-unlike",
    likes: "/pictours/likes",
    add_comment: "/pictours/comment",
    comments: "/pictours/comments",
    create: "/pictours/add",
    like_item_key: "pic_tour_id",
    comment_item_key: "pic_tours_id",
};

const QAFI: VerticalRoutes = VerticalRoutes {
    toggle_like: "/qafi/like-unlike",
    likes: "/qafi/likes",
    add_comment: "/qafi/comment",
    comments: "/qafi/comments",
    create: "/qafi/add",
    like_item_key: "QAFI_id",
    comment_item_key: "QAFI_id",
};

const MONDO_MARKET: VerticalRoutes = VerticalRoutes {
    toggle_like: "/mondomarket/like-unlike",
    likes: "/mondomarket/likes",
    add_comment: "/mondomarket/comment",
    comments: "/mondomarket/comments",
    create: "/mondomarket/add",
    like_item_key: "item_id",
    comment_item_key: "item_id",
};

pub fn routes_for(vertical: Vertical) -> &'static VerticalRoutes {
    match vertical {
        Vertical::Video => &VIDEO,
        Vertical::PicTour => &PIC_TOUR,
        Vertical::Qafi => &QAFI,
        Vertical::MondoMarket => &MONDO_MARKET,
    }
}

pub mod market {
    pub const BOOKMARK: &str = "/mondomarket/bookmark";
    pub const REMOVE_BOOKMARK: &str = "/mondomarket/bookmark/remove";
    pub const SEND_OFFER: &str = "/mondomarket/offer";
    pub const TOGGLE_ALERT: &str = "/mondomarket/alert/toggle";
    pub const CHECK_ALERT: &str = "/mondomarket/alert/check";
}

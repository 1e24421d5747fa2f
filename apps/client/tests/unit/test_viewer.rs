use super::fakes::{Call, FakeReactions, RecordingNotifier, comment, session};
use client::{
    domain::content::entity::ContentItem, presentation::viewer::DetailViewer,
};

fn tour_photo() -> ContentItem {
    ContentItem {
        media_url: "https://res.test/demo/image/upload/v1/tour.jpg".to_string(),
        author_display_name: Some("Maximilian Alexander von Humboldt".to_string()),
        ..ContentItem::with_id("12")
    }
}

#[tokio::test]
async fn opened_view_shows_reactions_and_links() {
    let gateway = FakeReactions::new(2, vec![comment("bob", "wow")]);
    let viewer = DetailViewer::new(tour_photo(), gateway, RecordingNotifier::new(), session(), 20);

    viewer.open().await.unwrap();
    let view = viewer.view();

    assert_eq!(view.like_count, 2);
    assert_eq!(view.total_comments, 1);
    assert_eq!(view.author_name.as_deref(), Some("Maximilian Alexander..."));
    assert_eq!(view.share_link, "https://res.test/demo/image/upload/v1/tour.jpg");
    assert_eq!(
        view.download_url,
        "https://res.test/demo/image/upload/fl_attachment/v1/tour.jpg"
    );
    assert!(view.reactions_enabled);
}

#[tokio::test]
async fn typed_comment_is_sent_from_the_input() {
    let gateway = FakeReactions::new(0, Vec::new());
    let viewer = DetailViewer::new(tour_photo(), gateway.clone(), RecordingNotifier::new(), session(), 20);
    viewer.open().await.unwrap();

    viewer.type_comment("lovely light");
    viewer.send_comment().await.unwrap();
    viewer.like().await.unwrap();

    let view = viewer.view();
    assert_eq!(view.comments.len(), 1);
    assert_eq!(view.comments[0].comment().text, "lovely light");
    assert!(view.comment_text.is_empty());
    assert!(view.is_liked);
    assert_eq!(gateway.calls(Call::AddComment), 1);
}

#[tokio::test]
async fn placeholder_view_skips_loading() {
    let gateway = FakeReactions::new(4, Vec::new());
    let item = ContentItem {
        id: None,
        ..tour_photo()
    };
    let viewer = DetailViewer::new(item, gateway.clone(), RecordingNotifier::new(), session(), 20);

    viewer.open().await.unwrap();

    assert_eq!(gateway.calls(Call::FetchLikes), 0);
    assert!(!viewer.view().reactions_enabled);
    assert_eq!(viewer.view().like_count, 0);
}

use super::{
    fakes::{RecordingNotifier, session},
    mocks::{MockPublisher, MockUploads},
};
use client::{
    application::publish_item::{
        dto::{ItemCondition, NewMarketItem, NewPicTour, NewQafi, NewVideo},
        use_case::PublishItemUseCase,
    },
    domain::{
        content::{errors::DomainError, media::MediaBlob, vertical::Vertical},
        shared::response::GatewayResponse,
    },
};
use std::sync::Arc;

fn blob(name: &str, content_type: &str) -> MediaBlob {
    MediaBlob::new(name, content_type, vec![1u8, 2, 3])
}

fn hosting_uploads() -> MockUploads {
    let mut uploads = MockUploads::new();
    uploads
        .expect_upload()
        .returning(|blob| Ok(format!("https://media.test/{}", blob.file_name)));
    uploads
}

fn use_case(
    publisher: MockPublisher,
    uploads: MockUploads,
    notifier: &Arc<RecordingNotifier>,
) -> PublishItemUseCase {
    PublishItemUseCase::new(Arc::new(publisher), Arc::new(uploads), notifier.clone(), session())
}

fn video() -> NewVideo {
    NewVideo {
        name: "Sunset".to_string(),
        description: "Over the bay".to_string(),
        category_id: "3".to_string(),
        sub_category: "nature".to_string(),
        video: blob("clip.mp4", "video/mp4"),
        thumbnail: blob("thumb.jpg", "image/jpeg"),
    }
}

fn market_item(images: Vec<MediaBlob>) -> NewMarketItem {
    NewMarketItem {
        item_category: "7".to_string(),
        title: "Bike".to_string(),
        description: "Barely used".to_string(),
        price: 120.0,
        condition: ItemCondition::UsedGood,
        location: "Harbor st".to_string(),
        region: "North".to_string(),
        images,
    }
}

#[tokio::test]
async fn video_is_created_with_both_hosted_urls() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_create_item()
        .withf(|vertical, payload| {
            *vertical == Vertical::Video
                && payload["video"] == "https://media.test/clip.mp4"
                && payload["thumbnail"] == "https://media.test/thumb.jpg"
                && payload["video_category"] == "3"
                && payload["user_id"] == "user-1"
        })
        .times(1)
        .returning(|_, _| Ok(GatewayResponse::created("created")));
    let notifier = RecordingNotifier::new();

    let response = use_case(publisher, hosting_uploads(), &notifier)
        .publish_video(video())
        .await
        .expect("video should publish");

    assert!(response.is_created());
    assert_eq!(
        notifier.successes(),
        vec!["Video mania uploaded successfully".to_string()]
    );
}

#[tokio::test]
async fn failed_thumbnail_upload_creates_nothing() {
    let mut uploads = MockUploads::new();
    uploads
        .expect_upload()
        .returning(|blob| match blob.file_name.as_str() {
            "thumb.jpg" => Err(anyhow::anyhow!("upstream 502")),
            other => Ok(format!("https://media.test/{other}")),
        });
    let mut publisher = MockPublisher::new();
    publisher.expect_create_item().never();
    let notifier = RecordingNotifier::new();

    let result = use_case(publisher, uploads, &notifier)
        .publish_video(video())
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::UploadError("Failed to upload thumbnail.".to_string())
    );
    assert_eq!(notifier.errors(), vec!["Failed to upload thumbnail.".to_string()]);
}

#[tokio::test]
async fn invalid_form_is_rejected_before_any_upload() {
    let mut uploads = MockUploads::new();
    uploads.expect_upload().never();
    let mut publisher = MockPublisher::new();
    publisher.expect_create_item().never();
    let notifier = RecordingNotifier::new();

    let result = use_case(publisher, uploads, &notifier)
        .publish_video(NewVideo {
            name: String::new(),
            ..video()
        })
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::ValidationError("Name is required".to_string())
    );
}

#[tokio::test]
async fn pic_tour_and_qafi_use_their_own_create_payloads() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_create_item()
        .withf(|vertical, payload| {
            *vertical == Vertical::PicTour
                && payload["pic_category"] == "5"
                && payload["image"] == "https://media.test/tour.jpg"
        })
        .times(1)
        .returning(|_, _| Ok(GatewayResponse::created("ok")));
    publisher
        .expect_create_item()
        .withf(|vertical, payload| {
            *vertical == Vertical::Qafi
                && payload["category"] == "9"
                && payload["description"] == "Where is this?"
        })
        .times(1)
        .returning(|_, _| Ok(GatewayResponse::created("ok")));
    let notifier = RecordingNotifier::new();
    let use_case = use_case(publisher, hosting_uploads(), &notifier);

    use_case
        .publish_pic_tour(NewPicTour {
            name: "Old town".to_string(),
            description: "Walk".to_string(),
            category_id: "5".to_string(),
            sub_category: "city".to_string(),
            image: blob("tour.jpg", "image/jpeg"),
        })
        .await
        .unwrap();
    use_case
        .publish_qafi(NewQafi {
            description: "Where is this?".to_string(),
            category_id: "9".to_string(),
            sub_category: "travel".to_string(),
            image: blob("q.png", "image/png"),
        })
        .await
        .unwrap();

    assert_eq!(
        notifier.successes(),
        vec![
            "Pic Tour uploaded successfully".to_string(),
            "Qafi uploaded successfully".to_string()
        ]
    );
}

#[tokio::test]
async fn market_item_needs_at_least_one_image() {
    let mut uploads = MockUploads::new();
    uploads.expect_upload().never();
    let mut publisher = MockPublisher::new();
    publisher.expect_create_item().never();
    let notifier = RecordingNotifier::new();

    let result = use_case(publisher, uploads, &notifier)
        .publish_market_item(market_item(Vec::new()))
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::ValidationError("Please upload at least one image.".to_string())
    );
    assert_eq!(
        notifier.errors(),
        vec!["Please upload at least one image.".to_string()]
    );
}

#[tokio::test]
async fn market_item_with_non_numeric_price_is_rejected() {
    let mut uploads = MockUploads::new();
    uploads.expect_upload().never();
    let mut publisher = MockPublisher::new();
    publisher.expect_create_item().never();
    let notifier = RecordingNotifier::new();

    let result = use_case(publisher, uploads, &notifier)
        .publish_market_item(NewMarketItem {
            price: f64::NAN,
            ..market_item(vec![blob("bike.jpg", "image/jpeg")])
        })
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::ValidationError("Price must be a number".to_string())
    );
}

#[tokio::test]
async fn market_item_uploads_every_image() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_create_item()
        .withf(|vertical, payload| {
            *vertical == Vertical::MondoMarket
                && payload["images"].as_array().map(Vec::len) == Some(2)
                && payload["condition"] == "used_Good"
                && payload["paid_status"] == true
        })
        .times(1)
        .returning(|_, _| Ok(GatewayResponse::created("ok")));
    let notifier = RecordingNotifier::new();

    use_case(publisher, hosting_uploads(), &notifier)
        .publish_market_item(market_item(vec![
            blob("front.jpg", "image/jpeg"),
            blob("back.jpg", "image/jpeg"),
        ]))
        .await
        .unwrap();

    assert_eq!(notifier.successes(), vec!["Item Added Successfully".to_string()]);
}

#[tokio::test]
async fn non_created_status_is_a_rejection() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_create_item()
        .returning(|_, _| Ok(GatewayResponse::new(200, "Duplicate item")));
    let notifier = RecordingNotifier::new();

    let result = use_case(publisher, hosting_uploads(), &notifier)
        .publish_video(video())
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::Rejected {
            status: 200,
            message: "Duplicate item".to_string()
        }
    );
    assert_eq!(notifier.errors(), vec!["Duplicate item".to_string()]);
}

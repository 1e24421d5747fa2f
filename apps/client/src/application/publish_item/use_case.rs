use super::dto::{
    MarketItemPayload, NewMarketItem, NewPicTour, NewQafi, NewVideo, PicTourPayload, QafiPayload,
    VideoPayload,
};
use crate::{
    domain::{
        content::{errors::DomainError, gateway::PublishGateway, media::MediaBlob, vertical::Vertical},
        shared::{response::GatewayResponse, session::SessionContext},
    },
    infrastructure::{
        notify::traits::{Notification, NotificationSink},
        storage::traits::UploadService,
    },
};
use futures_util::future::try_join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument};
use validator::Validate;

/// Uploads an item's media and creates the item.
///
/// Every flow validates first, then uploads, then creates. If any upload
/// fails nothing is created. The outcome is always reported to the
/// notification sink and returned to the caller.
pub struct PublishItemUseCase {
    gateway: Arc<dyn PublishGateway>,
    uploads: Arc<dyn UploadService>,
    notifier: Arc<dyn NotificationSink>,
    session: Arc<SessionContext>,
}

fn require_media(blob: &MediaBlob, message: &str) -> Result<(), DomainError> {
    if blob.is_empty() {
        return Err(DomainError::ValidationError(message.to_string()));
    }
    Ok(())
}

impl PublishItemUseCase {
    pub fn new(
        gateway: Arc<dyn PublishGateway>,
        uploads: Arc<dyn UploadService>,
        notifier: Arc<dyn NotificationSink>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            gateway,
            uploads,
            notifier,
            session,
        }
    }

    /// Video and thumbnail are uploaded one after the other.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn publish_video(&self, request: NewVideo) -> Result<GatewayResponse, DomainError> {
        let result = async {
            request.validate()?;
            require_media(&request.video, "Video is required")?;
            require_media(&request.thumbnail, "Thumbnail is required")?;

            let video = self.upload(&request.video, "Failed to upload video.").await?;
            let thumbnail = self
                .upload(&request.thumbnail, "Failed to upload thumbnail.")
                .await?;

            self.create(
                Vertical::Video,
                &VideoPayload {
                    name: &request.name,
                    description: &request.description,
                    video_category: &request.category_id,
                    sub_category: &request.sub_category,
                    video,
                    thumbnail,
                    user_id: &self.session.user_id,
                },
            )
            .await
        }
        .await;
        self.report(result, "Video mania uploaded successfully", "Error uploading video mania")
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn publish_pic_tour(&self, request: NewPicTour) -> Result<GatewayResponse, DomainError> {
        let result = async {
            request.validate()?;
            require_media(&request.image, "Image is required")?;

            let image = self.upload(&request.image, "Failed to upload image.").await?;

            self.create(
                Vertical::PicTour,
                &PicTourPayload {
                    name: &request.name,
                    description: &request.description,
                    pic_category: &request.category_id,
                    sub_category: &request.sub_category,
                    image,
                    user_id: &self.session.user_id,
                },
            )
            .await
        }
        .await;
        self.report(result, "Pic Tour uploaded successfully", "Error uploading pic tour")
    }

    #[instrument(skip(self, request))]
    pub async fn publish_qafi(&self, request: NewQafi) -> Result<GatewayResponse, DomainError> {
        let result = async {
            request.validate()?;
            require_media(&request.image, "Image is required")?;

            let image = self.upload(&request.image, "Failed to upload image.").await?;

            self.create(
                Vertical::Qafi,
                &QafiPayload {
                    description: &request.description,
                    category: &request.category_id,
                    sub_category: &request.sub_category,
                    image,
                    user_id: &self.session.user_id,
                },
            )
            .await
        }
        .await;
        self.report(result, "Qafi uploaded successfully", "Error uploading qafi")
    }

    /// Listing images are uploaded concurrently; the first failure aborts.
    #[instrument(skip(self, request), fields(title = %request.title, images = request.images.len()))]
    pub async fn publish_market_item(
        &self,
        request: NewMarketItem,
    ) -> Result<GatewayResponse, DomainError> {
        let result = async {
            if request.images.iter().all(MediaBlob::is_empty) {
                return Err(DomainError::ValidationError(
                    "Please upload at least one image.".to_string(),
                ));
            }
            request.validate()?;

            let images = try_join_all(
                request
                    .images
                    .iter()
                    .filter(|blob| !blob.is_empty())
                    .map(|blob| self.upload(blob, "Failed to upload image.")),
            )
            .await?;

            self.create(
                Vertical::MondoMarket,
                &MarketItemPayload {
                    user_id: &self.session.user_id,
                    item_category: &request.item_category,
                    title: &request.title,
                    description: &request.description,
                    price: request.price,
                    condition: request.condition,
                    location: &request.location,
                    region: &request.region,
                    paid_status: true,
                    images,
                },
            )
            .await
        }
        .await;
        self.report(result, "Item Added Successfully", "Error uploading item")
    }

    async fn upload(&self, blob: &MediaBlob, failure: &str) -> Result<String, DomainError> {
        self.uploads.upload(blob).await.map_err(|e| {
            error!(file = %blob.file_name, error = %e, "media upload failed");
            DomainError::UploadError(failure.to_string())
        })
    }

    async fn create<P: Serialize>(
        &self,
        vertical: Vertical,
        payload: &P,
    ) -> Result<GatewayResponse, DomainError> {
        let payload = serde_json::to_value(payload)
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        let response = self.gateway.create_item(vertical, payload).await?;
        if !response.is_created() {
            return Err(DomainError::Rejected {
                status: response.status_code,
                message: response.message,
            });
        }
        info!(%vertical, "item created");
        Ok(response)
    }

    fn report(
        &self,
        result: Result<GatewayResponse, DomainError>,
        success: &str,
        fallback: &str,
    ) -> Result<GatewayResponse, DomainError> {
        match &result {
            Ok(_) => self.notifier.notify(Notification::success(success)),
            Err(err) => {
                error!(error = %err, "publish failed");
                let message = match err {
                    DomainError::ReactionSyncError(_) | DomainError::InfrastructureError(_) => {
                        fallback.to_string()
                    }
                    other => other.user_message(),
                };
                self.notifier.notify(Notification::error(message));
            }
        }
        result
    }
}

use super::dto::{BookmarkOutcome, OfferAmount};
use crate::{
    domain::{
        content::{entity::ContentItem, errors::DomainError},
        market::{
            gateway::MarketGateway,
            requests::{AlertRequest, BookmarkRequest, OfferRequest},
        },
        shared::{ids::ItemId, response::GatewayResponse, session::SessionContext},
    },
    infrastructure::notify::traits::{Notification, NotificationSink},
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Bookmark, offer and alert actions on a market listing.
pub struct MarketActions {
    gateway: Arc<dyn MarketGateway>,
    notifier: Arc<dyn NotificationSink>,
    session: Arc<SessionContext>,
}

fn listing_id(item: &ContentItem) -> Result<&ItemId, DomainError> {
    item.id
        .as_ref()
        .ok_or_else(|| DomainError::ValidationError("Listing has no identifier".to_string()))
}

fn require_created(response: GatewayResponse) -> Result<GatewayResponse, DomainError> {
    if response.is_created() {
        Ok(response)
    } else {
        Err(DomainError::Rejected {
            status: response.status_code,
            message: response.message,
        })
    }
}

impl MarketActions {
    pub fn new(
        gateway: Arc<dyn MarketGateway>,
        notifier: Arc<dyn NotificationSink>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            session,
        }
    }

    /// Bookmarks the listing. The upstream API answers an already-bookmarked
    /// listing with an error, in which case the bookmark is removed instead.
    #[instrument(skip(self, item), fields(item_id = ?item.id))]
    pub async fn bookmark(&self, item: &ContentItem) -> Result<BookmarkOutcome, DomainError> {
        let request = BookmarkRequest {
            item_id: listing_id(item)?.clone(),
            user_id: self.session.user_id.clone(),
        };

        match self.gateway.bookmark(&request).await {
            Ok(response) if response.is_created() => {
                self.notifier.notify(Notification::success(response.message));
                Ok(BookmarkOutcome::Added)
            }
            Ok(response) => {
                let err = DomainError::Rejected {
                    status: response.status_code,
                    message: response.message,
                };
                self.notifier
                    .notify(Notification::error(non_empty_or(&err, "Error during bookmarking")));
                Err(err)
            }
            Err(err) => {
                debug!(error = %err, "bookmark refused, removing existing bookmark");
                self.remove_bookmark(&request).await
            }
        }
    }

    async fn remove_bookmark(&self, request: &BookmarkRequest) -> Result<BookmarkOutcome, DomainError> {
        let result = match self.gateway.remove_bookmark(request).await {
            Ok(response) => require_created(response),
            Err(err) => Err(err),
        };
        match result {
            Ok(response) => {
                self.notifier.notify(Notification::success(response.message));
                Ok(BookmarkOutcome::Removed)
            }
            Err(err) => {
                warn!(error = %err, "bookmark removal failed");
                self.notifier
                    .notify(Notification::error(non_empty_or(&err, "Error during bookmarking")));
                Err(err)
            }
        }
    }

    #[instrument(skip(self, item), fields(item_id = ?item.id))]
    pub async fn send_offer(&self, item: &ContentItem, amount: &str) -> Result<GatewayResponse, DomainError> {
        let result = async {
            if amount.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "Please enter an amount".to_string(),
                ));
            }
            let amount = OfferAmount::new(amount)?;
            if amount.is_zero() {
                return Err(DomainError::ValidationError(
                    "Offer must be greater than zero".to_string(),
                ));
            }

            let request = OfferRequest {
                item_id: listing_id(item)?.clone(),
                price: amount.value,
                sender_id: self.session.user_id.clone(),
            };
            require_created(self.gateway.send_offer(&request).await?)
        }
        .await;

        match &result {
            Ok(response) => self
                .notifier
                .notify(Notification::success(response.message.clone())),
            Err(err) => {
                warn!(error = %err, "offer failed");
                self.notifier
                    .notify(Notification::error(non_empty_or(err, "Error sending offer")));
            }
        }
        result
    }

    /// Toggles the price alert on the listing's category and returns the
    /// alert state the server reports afterwards.
    #[instrument(skip(self, item), fields(item_id = ?item.id))]
    pub async fn toggle_alert(&self, item: &ContentItem) -> Result<bool, DomainError> {
        let result = async {
            let request = self.alert_request(item)?;
            let response = require_created(self.gateway.toggle_alert(&request).await?)?;
            let active = self.gateway.check_alert(&request).await?;
            Ok::<_, DomainError>((response, active))
        }
        .await;

        match result {
            Ok((response, active)) => {
                self.notifier.notify(Notification::success(response.message));
                Ok(active)
            }
            Err(err) => {
                warn!(error = %err, "alert toggle failed");
                self.notifier
                    .notify(Notification::error(non_empty_or(&err, "Error updating alert")));
                Err(err)
            }
        }
    }

    pub async fn alert_status(&self, item: &ContentItem) -> Result<bool, DomainError> {
        let request = self.alert_request(item)?;
        self.gateway.check_alert(&request).await
    }

    fn alert_request(&self, item: &ContentItem) -> Result<AlertRequest, DomainError> {
        let category_id = item
            .category_id
            .clone()
            .ok_or_else(|| DomainError::ValidationError("Listing has no category".to_string()))?;
        Ok(AlertRequest {
            user_id: self.session.user_id.clone(),
            category_id,
        })
    }
}

fn non_empty_or(err: &DomainError, fallback: &str) -> String {
    match err {
        DomainError::ValidationError(msg) => msg.clone(),
        DomainError::Rejected { message, .. } if !message.is_empty() => message.clone(),
        _ => fallback.to_string(),
    }
}

use super::{errors::DomainError, vertical::Vertical};
use crate::domain::shared::response::GatewayResponse;
use async_trait::async_trait;

/// Creates new items once their media is hosted.
#[async_trait]
pub trait PublishGateway: Send + Sync {
    async fn create_item(
        &self,
        vertical: Vertical,
        payload: serde_json::Value,
    ) -> Result<GatewayResponse, DomainError>;
}

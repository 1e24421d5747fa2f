use super::requests::{AlertRequest, BookmarkRequest, OfferRequest};
use crate::domain::{content::errors::DomainError, shared::response::GatewayResponse};
use async_trait::async_trait;

#[async_trait]
pub trait MarketGateway: Send + Sync {
    async fn bookmark(&self, request: &BookmarkRequest) -> Result<GatewayResponse, DomainError>;
    async fn remove_bookmark(&self, request: &BookmarkRequest) -> Result<GatewayResponse, DomainError>;
    async fn send_offer(&self, request: &OfferRequest) -> Result<GatewayResponse, DomainError>;
    async fn toggle_alert(&self, request: &AlertRequest) -> Result<GatewayResponse, DomainError>;
    /// Whether the user currently has an alert on the category.
    async fn check_alert(&self, request: &AlertRequest) -> Result<bool, DomainError>;
}

use super::{
    envelope::{ActionEnvelope, AlertEnvelope, CommentsEnvelope, LikesEnvelope, payload_of},
    routes::{self, VerticalRoutes, routes_for},
};
use crate::domain::{
    content::{errors::DomainError, gateway::PublishGateway, vertical::Vertical},
    market::{
        gateway::MarketGateway,
        requests::{AlertRequest, BookmarkRequest, OfferRequest},
    },
    reaction::gateway::{CommentsSnapshot, LikesSnapshot, ReactionGateway, ReactionRequest},
    shared::{ids::ItemId, response::GatewayResponse},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, header};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};
use std::time::Duration;

/// JSON-over-HTTP gateway for one vertical of the remote API.
#[derive(Clone)]
pub struct RestGateway {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    vertical: Vertical,
    routes: &'static VerticalRoutes,
}

fn transport_error(err: reqwest::Error) -> DomainError {
    DomainError::InfrastructureError(err.to_string())
}

impl RestGateway {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
        vertical: Vertical,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            vertical,
            routes: routes_for(vertical),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Non-2xx answers become `Rejected`, carrying the server's message when
    /// the body has one.
    async fn read_body(response: Response) -> Result<(u16, Value), DomainError> {
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        let body: Value = if text.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&text).map_err(|e| {
                DomainError::InfrastructureError(format!("invalid JSON from server: {e}"))
            })?
        };

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"))
                .to_string();
            return Err(DomainError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok((status.as_u16(), body))
    }

    async fn post_action<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<GatewayResponse, DomainError> {
        let url = self.url(path);
        tracing::debug!(%url, vertical = %self.vertical, "POST action");
        let response = self
            .authorized(self.http.post(&url).json(body))
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = Self::read_body(response).await?;
        let envelope: ActionEnvelope = serde_json::from_value(body).unwrap_or_default();
        Ok(envelope.into_response(status))
    }

    async fn get_payload<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let url = self.url(path);
        tracing::debug!(%url, vertical = %self.vertical, "GET");
        let response = self
            .authorized(self.http.get(&url))
            .send()
            .await
            .map_err(transport_error)?;
        let (_, body) = Self::read_body(response).await?;
        serde_json::from_value(payload_of(body))
            .map_err(|e| DomainError::InfrastructureError(format!("unexpected payload: {e}")))
    }

    async fn post_payload<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let url = self.url(path);
        let response = self
            .authorized(self.http.post(&url).json(body))
            .send()
            .await
            .map_err(transport_error)?;
        let (_, body) = Self::read_body(response).await?;
        serde_json::from_value(payload_of(body))
            .map_err(|e| DomainError::InfrastructureError(format!("unexpected payload: {e}")))
    }

    fn reaction_body(&self, request: &ReactionRequest, item_key: &str) -> Value {
        let mut body = json!({ "user_id": request.user_id });
        body[item_key] = json!(request.item_id);
        if let Some(text) = &request.text {
            body["comment"] = json!(text);
        }
        body
    }
}

#[async_trait]
impl ReactionGateway for RestGateway {
    async fn toggle_like(&self, request: &ReactionRequest) -> Result<GatewayResponse, DomainError> {
        let body = self.reaction_body(request, self.routes.like_item_key);
        self.post_action(self.routes.toggle_like, &body).await
    }

    async fn fetch_likes(&self, item_id: &ItemId) -> Result<LikesSnapshot, DomainError> {
        let path = format!("{}/{}", self.routes.likes, item_id);
        let envelope: LikesEnvelope = self.get_payload(&path).await?;
        Ok(envelope.into())
    }

    async fn add_comment(&self, request: &ReactionRequest) -> Result<GatewayResponse, DomainError> {
        let body = self.reaction_body(request, self.routes.comment_item_key);
        self.post_action(self.routes.add_comment, &body).await
    }

    async fn fetch_comments(&self, item_id: &ItemId) -> Result<CommentsSnapshot, DomainError> {
        let path = format!("{}/{}", self.routes.comments, item_id);
        let envelope: CommentsEnvelope = self.get_payload(&path).await?;
        Ok(envelope.into())
    }
}

#[async_trait]
impl PublishGateway for RestGateway {
    async fn create_item(
        &self,
        vertical: Vertical,
        payload: Value,
    ) -> Result<GatewayResponse, DomainError> {
        self.post_action(routes_for(vertical).create, &payload).await
    }
}

#[async_trait]
impl MarketGateway for RestGateway {
    async fn bookmark(&self, request: &BookmarkRequest) -> Result<GatewayResponse, DomainError> {
        self.post_action(routes::market::BOOKMARK, request).await
    }

    async fn remove_bookmark(&self, request: &BookmarkRequest) -> Result<GatewayResponse, DomainError> {
        self.post_action(routes::market::REMOVE_BOOKMARK, request).await
    }

    async fn send_offer(&self, request: &OfferRequest) -> Result<GatewayResponse, DomainError> {
        self.post_action(routes::market::SEND_OFFER, request).await
    }

    async fn toggle_alert(&self, request: &AlertRequest) -> Result<GatewayResponse, DomainError> {
        self.post_action(routes::market::TOGGLE_ALERT, request).await
    }

    async fn check_alert(&self, request: &AlertRequest) -> Result<bool, DomainError> {
        let envelope: AlertEnvelope = self.post_payload(routes::market::CHECK_ALERT, request).await?;
        Ok(envelope.alert.unwrap_or(false))
    }
}

use super::traits::UploadService;
use crate::domain::content::media::MediaBlob;
use anyhow::{Context, anyhow, bail};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

/// Unsigned uploads to a Cloudinary-style media host.
///
/// Images go to `{base_url}/image/upload`, videos to `{base_url}/video/upload`.
pub struct CloudUploadService {
    http: reqwest::Client,
    base_url: String,
    upload_preset: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

impl CloudUploadService {
    pub fn new(base_url: String, upload_preset: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build upload client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            upload_preset,
        })
    }

    fn endpoint(&self, blob: &MediaBlob) -> String {
        format!("{}/{}/upload", self.base_url, blob.kind().resource_type())
    }
}

#[async_trait]
impl UploadService for CloudUploadService {
    async fn upload(&self, blob: &MediaBlob) -> anyhow::Result<String> {
        if blob.is_empty() {
            bail!("refusing to upload empty file {}", blob.file_name);
        }

        let digest = blob.digest();
        let part = Part::bytes(blob.data.to_vec())
            .file_name(blob.file_name.clone())
            .mime_str(&blob.content_type)?;
        let form = Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("public_id", digest[..32].to_string())
            .part("file", part);

        let endpoint = self.endpoint(blob);
        tracing::debug!(%endpoint, size = blob.data.len(), "uploading media");

        let response = self.http.post(&endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("upload of {} failed with {}: {}", blob.file_name, status, body.trim());
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url
            .or(body.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| anyhow!("upload response for {} has no url", blob.file_name))
    }
}

use crate::domain::content::media::MediaBlob;
use async_trait::async_trait;

#[async_trait]
pub trait UploadService: Send + Sync {
    /// Hosts the blob and returns its public URL.
    async fn upload(&self, blob: &MediaBlob) -> anyhow::Result<String>;
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Upload failed: {0}")]
    UploadError(String),
    #[error("Reaction sync failed: {0}")]
    ReactionSyncError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    /// Message suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::UploadError(msg) | Self::ValidationError(msg) => msg.clone(),
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected { status, .. } => format!("Request rejected ({status})"),
            Self::ReactionSyncError(_) | Self::InfrastructureError(_) => {
                "Something went wrong, please try again".to_string()
            }
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // One message at a time, from the alphabetically first failing field,
        // so the same input always surfaces the same message.
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));
        let message = fields
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        Self::ValidationError(message)
    }
}

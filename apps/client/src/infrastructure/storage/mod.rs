pub mod cloud_upload_service;
pub mod traits;

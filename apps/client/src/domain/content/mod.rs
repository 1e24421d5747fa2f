pub mod entity;
pub mod errors;
pub mod gateway;
pub mod media;
pub mod vertical;

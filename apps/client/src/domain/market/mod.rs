pub mod gateway;
pub mod requests;

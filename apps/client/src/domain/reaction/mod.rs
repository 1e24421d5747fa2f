pub mod comment;
pub mod gateway;
pub mod state;

pub mod market;
pub mod publish_item;
pub mod reactions;

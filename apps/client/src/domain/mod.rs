pub mod content;
pub mod market;
pub mod reaction;
pub mod shared;

pub mod format;
pub mod viewer;

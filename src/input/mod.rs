//! Input processing module
//! Handles file detection, text loading, and input limits

pub mod file_detector;
pub mod text_source;
pub mod normalize;
pub mod manager;

pub use manager::InputManager;
pub use text_source::{FileSource, InlineSource, TextSource};

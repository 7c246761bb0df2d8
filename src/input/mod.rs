//! Input processing module
//! Handles file type detection and plain-text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::FileType;
pub use manager::InputManager;

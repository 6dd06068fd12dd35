//! Photo capture adapters.

pub mod file_capture;

pub use file_capture::FileCapture;

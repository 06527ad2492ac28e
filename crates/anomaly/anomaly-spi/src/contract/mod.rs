//! Contracts implemented by detectors.

mod streaming_detector;

pub use streaming_detector::StreamingDetector;

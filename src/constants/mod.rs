//! Constants used throughout the extractor

pub mod scoring;
pub mod words;

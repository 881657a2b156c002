//! Utility functions and helpers

pub mod java;
pub mod text;

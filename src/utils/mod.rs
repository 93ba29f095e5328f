//! Utility functions and helpers.

pub mod text_processing;

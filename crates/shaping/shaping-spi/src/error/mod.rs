//! Error types for the shaping pipeline.
//!
//! This module contains error types and the Result alias.

mod shaping_error;

pub use shaping_error::{Result, ShapingError};

//! Common utilities shared across services.
//!
//! This crate provides unified error handling with HTTP status mapping.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};

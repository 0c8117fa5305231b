//! Core types shared across the generator.
//!
//! Currently this is the error family: [`SiteError`] for typed failures,
//! [`ErrorContext`] for user-facing display, and [`user_friendly_error`] to
//! convert arbitrary `anyhow` errors at the CLI boundary.

pub mod error;

pub use error::{user_friendly_error, ErrorContext, SiteError};

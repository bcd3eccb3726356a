//! Core configuration and error handling for Herald.
//!
//! This crate provides the shared foundation used by the pipeline crate and
//! the binary:
//! - [`HeraldError`] — unified error type using `thiserror`
//! - [`ReviewEnv`] / [`AuditEnv`] — environment-driven configuration with
//!   fail-fast validation

mod config;
mod error;

pub use config::{AuditEnv, GithubEnv, LlmEnv, ReviewEnv};
pub use error::HeraldError;

/// A convenience `Result` type for Herald operations.
pub type Result<T> = std::result::Result<T, HeraldError>;

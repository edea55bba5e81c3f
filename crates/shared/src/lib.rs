//! Shared types, errors, and configuration for Bankbook.
//!
//! This crate provides common types used across all other crates:
//! - Money type with two-decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

//! Client and account registry.
//!
//! This module implements the ledger functionality:
//! - Client registration with unique identities
//! - Account opening with sequential numbering
//! - Account lookup and account-validated operations
//! - Error types for registry operations

pub mod client;
pub mod error;
pub mod registry;

#[cfg(test)]
mod registry_props;

pub use client::{Client, NewClient};
pub use error::LedgerError;
pub use registry::{Ledger, LedgerSettings};

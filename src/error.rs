//! # Error Types
//!
//! Error handling for the message-identifier registry.
//!
//! This module defines all error variants that can occur while building or
//! reloading a registry, from file-system failures to identifier conflicts.
//!
//! ## Error Categories
//! - **I/O Errors**: definition file missing or unreadable
//! - **Configuration Errors**: invalid TOML or rejected settings
//! - **Conflict Errors**: duplicate ids or names during bulk construction
//! - **Lock Errors**: poisoned shared-registry locks
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! Note that per-line parse anomalies (an ambiguous hash, a malformed
//! definition line) are *not* errors: they are recovered locally and
//! encoded in the data — see [`crate::registry::loader`].

use std::io;
use thiserror::Error;

/// Primary error type for all registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate message id: {0}")]
    DuplicateId(u16),

    #[error("Duplicate message name: {0:?}")]
    DuplicateName(String),

    #[error("Registry lock poisoned")]
    LockPoisoned,
}

/// Type alias for Results using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with the host:
//! - The host trait and cooperative yield hook
//! - An in-memory host backed by a JSON snapshot
//! - Error types

pub mod error;
pub mod host;
pub mod memory;

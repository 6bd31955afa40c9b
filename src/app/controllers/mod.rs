//! Controllers layer - orchestration and coordination.
//!
//! This module contains the session controller, which coordinates the
//! catalog, translation and remap services with the host.

pub mod session;

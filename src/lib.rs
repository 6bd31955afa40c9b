//! Find every text style used in a design document and remap them in bulk.
//!
//! The design tool that owns the document is reached through [`StyleHost`];
//! [`MemoryDocument`] implements it over a JSON snapshot.

pub mod app;

pub use app::*;

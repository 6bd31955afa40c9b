//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Text nodes and their style assignments
//! - The style catalog
//! - Remap requests and results
//! - Settings
//! - Message types delivered by the host

pub mod catalog;
pub mod messages;
pub mod request;
pub mod settings;
pub mod style;

pub use catalog::{Catalog, StyleCatalogEntry};
pub use messages::Message;
pub use request::{RemapRequest, RemapResult};
pub use settings::SwapSettings;
pub use style::{NodeId, StyleAssignment, StyleId, StyleSegment, TextNode};

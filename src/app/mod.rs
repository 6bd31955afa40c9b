//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (TextNode, Catalog, RemapRequest, Settings, Messages)
//! - `controllers/` - Orchestration (Session)
//! - `services/` - Business operations (catalog, translate, remap, report)
//! - `infrastructure/` - Host integration (StyleHost, MemoryDocument, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::session::{Session, SessionOutcome};
pub use domain::{
    Catalog, Message, NodeId, RemapRequest, RemapResult, StyleAssignment, StyleCatalogEntry,
    StyleId, StyleSegment, SwapSettings, TextNode,
};
pub use infrastructure::error::{Result, SwapError};
pub use infrastructure::host::{NoYield, StyleHost, YieldPoint};
pub use infrastructure::memory::{DocumentSnapshot, MemoryDocument};

//! Services layer - business operations.
//!
//! This module contains the remapping logic:
//! - Catalog building
//! - Name to id translation
//! - Style remapping
//! - Status reporting

pub mod catalog;
pub mod remap;
pub mod report;
pub mod translate;

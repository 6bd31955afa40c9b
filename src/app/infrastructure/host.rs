//! The seam between the remapping core and the design tool that hosts it.

use crate::app::domain::style::{NodeId, StyleId, TextNode};
use crate::app::infrastructure::error::Result;

/// Document access, notifications and lifecycle supplied by the host.
pub trait StyleHost {
    /// Flat snapshot of every text node, in document order.
    fn text_nodes(&self) -> Vec<TextNode>;

    /// Display name of a style, or `None` if it was deleted or is inaccessible.
    fn style_name(&self, id: &StyleId) -> Option<String>;

    fn set_node_style(&mut self, node: &NodeId, style: &StyleId) -> Result<()>;

    fn set_range_style(
        &mut self,
        node: &NodeId,
        start: usize,
        end: usize,
        style: &StyleId,
    ) -> Result<()>;

    /// Show a short message to the user.
    fn notify(&mut self, message: &str);

    /// End the plugin session.
    fn close(&mut self);
}

/// Cooperative suspension point hit while walking large documents.
pub trait YieldPoint {
    /// Called with the number of nodes visited so far.
    fn yield_now(&mut self, visited: usize);
}

impl<F: FnMut(usize)> YieldPoint for F {
    fn yield_now(&mut self, visited: usize) {
        self(visited)
    }
}

/// For hosts with no event loop to hand control back to.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoYield;

impl YieldPoint for NoYield {
    fn yield_now(&mut self, _visited: usize) {}
}

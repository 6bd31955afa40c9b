use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::app::domain::style::{NodeId, StyleAssignment, StyleId, TextNode};
use crate::app::infrastructure::error::{Result, SwapError};
use crate::app::infrastructure::host::StyleHost;

/// On-disk form of a document: the style registry plus its text nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub styles: BTreeMap<StyleId, String>,
    #[serde(default)]
    pub nodes: Vec<TextNode>,
}

/// A host backed by an in-memory snapshot. Stands in for the design tool
/// when running from the command line and in tests.
pub struct MemoryDocument {
    snapshot: DocumentSnapshot,
    index: HashMap<NodeId, usize>,
    notifications: Vec<String>,
    closed: bool,
}

impl MemoryDocument {
    /// Fails if two nodes share an id, since write-backs address nodes by id.
    pub fn new(snapshot: DocumentSnapshot) -> Result<Self> {
        let mut index = HashMap::with_capacity(snapshot.nodes.len());
        for (i, node) in snapshot.nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(SwapError::DuplicateNode(node.id.clone()));
            }
        }

        Ok(Self {
            snapshot,
            index,
            notifications: Vec::new(),
            closed: false,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: DocumentSnapshot = serde_json::from_str(json)?;
        Self::new(snapshot)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot)?)
    }

    pub fn snapshot(&self) -> &DocumentSnapshot {
        &self.snapshot
    }

    pub fn node(&self, id: &str) -> Option<&TextNode> {
        self.index
            .get(&NodeId::from(id))
            .map(|&i| &self.snapshot.nodes[i])
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn node_mut(&mut self, id: &NodeId) -> Result<&mut TextNode> {
        let i = *self
            .index
            .get(id)
            .ok_or_else(|| SwapError::UnknownNode(id.clone()))?;
        Ok(&mut self.snapshot.nodes[i])
    }
}

impl StyleHost for MemoryDocument {
    fn text_nodes(&self) -> Vec<TextNode> {
        self.snapshot.nodes.clone()
    }

    fn style_name(&self, id: &StyleId) -> Option<String> {
        self.snapshot.styles.get(id).cloned()
    }

    fn set_node_style(&mut self, node: &NodeId, style: &StyleId) -> Result<()> {
        let target = self.node_mut(node)?;
        match target.style {
            StyleAssignment::Uniform(ref mut current) => {
                *current = style.clone();
                Ok(())
            }
            StyleAssignment::Segmented(_) => Err(SwapError::NotUniform(node.clone())),
        }
    }

    fn set_range_style(
        &mut self,
        node: &NodeId,
        start: usize,
        end: usize,
        style: &StyleId,
    ) -> Result<()> {
        let target = self.node_mut(node)?;
        let segment = match target.style {
            StyleAssignment::Segmented(ref mut segments) => segments
                .iter_mut()
                .find(|s| s.start == start && s.end == end),
            StyleAssignment::Uniform(_) => None,
        };

        match segment {
            Some(segment) => {
                segment.style = style.clone();
                Ok(())
            }
            None => Err(SwapError::InvalidRange {
                node: node.clone(),
                start,
                end,
            }),
        }
    }

    fn notify(&mut self, message: &str) {
        log::info!("notify: {}", message);
        self.notifications.push(message.to_string());
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

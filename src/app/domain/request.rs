use std::collections::HashMap;

use super::style::StyleId;

/// Old style id to new style id, resolved for one remap pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapRequest {
    pairs: HashMap<StyleId, StyleId>,
}

impl RemapRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair. An old id already present is redirected to the new target.
    pub fn insert(&mut self, old: StyleId, new: StyleId) {
        self.pairs.insert(old, new);
    }

    pub fn target(&self, old: &StyleId) -> Option<&StyleId> {
        self.pairs.get(old)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(StyleId, StyleId)> for RemapRequest {
    fn from_iter<I: IntoIterator<Item = (StyleId, StyleId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// What one invocation did to the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapResult {
    /// Node and range style writes performed
    pub updated: usize,
    /// Requested name pairs with an unresolvable side
    pub not_found: usize,
}

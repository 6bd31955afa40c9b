use std::collections::HashSet;

use crate::app::domain::catalog::{Catalog, StyleCatalogEntry};
use crate::app::domain::settings::SwapSettings;
use crate::app::domain::style::{StyleId, TextNode};
use crate::app::infrastructure::host::{StyleHost, YieldPoint};

/// Collect every distinct style id used by `nodes`, whole-node or per range,
/// in first-seen order.
///
/// The yield hook runs before nodes `0, N, 2N, ...` where `N` is
/// `settings.yield_interval`; an interval of 0 never yields.
pub fn collect_style_ids(
    nodes: &[TextNode],
    settings: &SwapSettings,
    yielder: &mut dyn YieldPoint,
) -> Vec<StyleId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        if settings.yield_interval > 0 && i % settings.yield_interval == 0 {
            yielder.yield_now(i);
        }
        if settings.skip_invisible_instance_children && node.is_invisible_instance_child() {
            continue;
        }
        for id in node.style.style_ids() {
            if seen.insert(id) {
                ids.push(id.clone());
            }
        }
    }

    ids
}

/// Scan the document and resolve every style in use to its display name.
/// Styles the registry no longer knows are left out.
pub fn build_catalog<H: StyleHost + ?Sized>(
    host: &H,
    settings: &SwapSettings,
    yielder: &mut dyn YieldPoint,
) -> Catalog {
    let nodes = host.text_nodes();
    let ids = collect_style_ids(&nodes, settings, yielder);

    let entries: Vec<StyleCatalogEntry> = ids
        .into_iter()
        .filter_map(|id| match host.style_name(&id) {
            Some(name) => Some(StyleCatalogEntry::new(&name, id)),
            None => {
                if !id.is_unset() {
                    log::debug!("style {} does not resolve, skipping", id);
                }
                None
            }
        })
        .collect();

    log::info!(
        "catalog built: {} styles across {} text nodes",
        entries.len(),
        nodes.len()
    );
    Catalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::style::StyleSegment;
    use crate::app::infrastructure::host::NoYield;
    use crate::app::infrastructure::memory::{DocumentSnapshot, MemoryDocument};

    fn document(nodes: Vec<TextNode>) -> MemoryDocument {
        let mut snapshot = DocumentSnapshot {
            nodes,
            ..Default::default()
        };
        for (id, name) in [("S1", "Heading"), ("S2", "Body"), ("S3", "Caption")] {
            snapshot.styles.insert(StyleId::from(id), name.to_string());
        }
        MemoryDocument::new(snapshot).unwrap()
    }

    fn names(catalog: &Catalog) -> Vec<(&str, &str)> {
        catalog
            .entries()
            .iter()
            .map(|e| (e.name.as_str(), e.id.as_str()))
            .collect()
    }

    #[test]
    fn test_collects_uniform_and_segment_styles_in_order() {
        let doc = document(vec![
            TextNode::uniform("1", "S2"),
            TextNode::segmented(
                "2",
                vec![StyleSegment::new(0, 3, "S3"), StyleSegment::new(3, 8, "S2")],
            ),
            TextNode::uniform("3", "S1"),
        ]);
        let catalog = build_catalog(&doc, &SwapSettings::default(), &mut NoYield);
        assert_eq!(
            names(&catalog),
            vec![("body", "S2"), ("caption", "S3"), ("heading", "S1")]
        );
    }

    #[test]
    fn test_deduplicates() {
        let doc = document(vec![
            TextNode::uniform("1", "S1"),
            TextNode::uniform("2", "S1"),
            TextNode::segmented(
                "3",
                vec![StyleSegment::new(0, 1, "S1"), StyleSegment::new(1, 2, "S1")],
            ),
        ]);
        let catalog = build_catalog(&doc, &SwapSettings::default(), &mut NoYield);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_skips_unresolvable_and_unset() {
        let doc = document(vec![
            TextNode::uniform("1", ""),
            TextNode::uniform("2", "S:deleted"),
            TextNode::uniform("3", "S3"),
        ]);
        let catalog = build_catalog(&doc, &SwapSettings::default(), &mut NoYield);
        assert_eq!(names(&catalog), vec![("caption", "S3")]);
    }

    #[test]
    fn test_rebuild_is_stable() {
        let doc = document(vec![
            TextNode::uniform("1", "S1"),
            TextNode::segmented(
                "2",
                vec![StyleSegment::new(0, 2, "S2"), StyleSegment::new(2, 4, "S3")],
            ),
        ]);
        let settings = SwapSettings::default();
        let first = build_catalog(&doc, &settings, &mut NoYield);
        let second = build_catalog(&doc, &settings, &mut NoYield);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hidden_top_level_node_catalogued() {
        let mut hidden = TextNode::uniform("2", "S1");
        hidden.visible = false;
        let doc = document(vec![TextNode::uniform("1", "S2"), hidden]);

        let catalog = build_catalog(&doc, &SwapSettings::default(), &mut NoYield);
        assert_eq!(names(&catalog), vec![("body", "S2"), ("heading", "S1")]);
    }

    #[test]
    fn test_invisible_instance_children_skipped() {
        let mut hidden = TextNode::uniform("2", "S2");
        hidden.visible = false;
        hidden.in_instance = true;
        let mut shown = TextNode::uniform("3", "S3");
        shown.in_instance = true;
        let doc = document(vec![TextNode::uniform("1", "S1"), hidden, shown]);

        let catalog = build_catalog(&doc, &SwapSettings::default(), &mut NoYield);
        assert_eq!(names(&catalog), vec![("heading", "S1"), ("caption", "S3")]);

        let settings = SwapSettings {
            skip_invisible_instance_children: false,
            ..Default::default()
        };
        let catalog = build_catalog(&doc, &settings, &mut NoYield);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_yields_at_fixed_interval() {
        let nodes: Vec<TextNode> = (0..1200)
            .map(|i| TextNode::uniform(&i.to_string(), "S1"))
            .collect();
        let mut visited = Vec::new();
        let mut hook = |n: usize| visited.push(n);

        collect_style_ids(&nodes, &SwapSettings::default(), &mut hook);
        assert_eq!(visited, vec![0, 500, 1000]);
    }

    #[test]
    fn test_zero_interval_never_yields() {
        let nodes = vec![TextNode::uniform("1", "S1")];
        let settings = SwapSettings {
            yield_interval: 0,
            ..Default::default()
        };
        let mut calls = 0;
        let mut hook = |_: usize| calls += 1;

        let ids = collect_style_ids(&nodes, &settings, &mut hook);
        assert_eq!(ids, vec![StyleId::from("S1")]);
        assert_eq!(calls, 0);
    }
}

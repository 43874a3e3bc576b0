//! Depth-first walk over a document tree.

use crate::api::Node;
use crate::error::{FigsliceError, Result};
use crate::types::Slice;

use super::names::{sanitize_name, NameRegistry};
use super::SliceFilter;

/// A selected node before its name has been made unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredNode {
    pub id: String,
    pub raw_name: String,
}

/// Collect selected nodes under the filtered pages, parent before children,
/// in document order.
pub fn collect_nodes(document: &Node, filter: &SliceFilter) -> Vec<DiscoveredNode> {
    let mut found = Vec::new();

    for page in document.children.iter().filter(|p| filter.includes_page(p)) {
        for node in &page.children {
            visit(node, filter, &mut found);
        }
    }

    found
}

fn visit(node: &Node, filter: &SliceFilter, found: &mut Vec<DiscoveredNode>) {
    if !node.is_container() && filter.selects(node) {
        found.push(DiscoveredNode {
            id: node.id.clone(),
            raw_name: node.name.clone(),
        });
    }

    for child in &node.children {
        visit(child, filter, found);
    }
}

/// Walk the document and turn every selected node into a uniquely named slice.
pub fn select_slices(document: &Node, filter: &SliceFilter) -> Result<Vec<Slice>> {
    let nodes = collect_nodes(document, filter);

    if nodes.is_empty() {
        return Err(FigsliceError::Discovery {
            message: format!("No nodes found matching {}", filter.rule()),
            help: Some(if filter.has_name_pattern() {
                "Check --name-pattern and --page-pattern".to_string()
            } else {
                "Add export settings to the layers to export, or pass --name-pattern".to_string()
            }),
        });
    }

    let mut names = NameRegistry::new();
    Ok(nodes
        .into_iter()
        .map(|node| {
            let base = sanitize_name(&node.raw_name, &node.id);
            Slice::new(node.id, names.claim(&base))
        })
        .collect())
}

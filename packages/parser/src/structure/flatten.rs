//! Tree to per-level record lists.

use super::tree::DocumentTree;
use crate::types::{FlatRecord, ParsedData};

/// Flatten a tree into seven ordered lists.
///
/// Nodes are visited in pre-order with children in insertion order, so each
/// list keeps source order. Only reads the tree.
#[must_use]
pub fn flatten(tree: &DocumentTree) -> ParsedData {
    let mut data = ParsedData::new();
    for (_, node) in tree.preorder() {
        data.push(FlatRecord {
            key: node.id.key(),
            parent_key: node.parent.map(|p| p.key()),
            level: node.level,
            id: node.declared_id,
            ancestors: node.ancestors.clone(),
            name_ru: node.name_ru.clone(),
            name_kz: node.name_kz.clone(),
            line: node.line,
        });
    }
    data
}

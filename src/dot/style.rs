//! Fixed mapping from entity kinds to DOT attributes.
//!
//! Every [`ValueKind`] and every classified [`PassKind`] has its own treatment. Reference kinds
//! are drawn with broken lines; copies and moves are solid and coloured apart from each other.
//! [`PassKind::Invalid`] has no entry and is rendered without attributes.

use crate::graph::{PassKind, ValueKind};

/// Returns the attribute list for a node of the given kind, without surrounding brackets.
#[must_use]
pub fn node_attributes(kind: ValueKind) -> Option<&'static str> {
    match kind {
        ValueKind::Temporary => Some("color=\"red\""),
        ValueKind::LValue => Some("color=\"grey\""),
        ValueKind::LVRef => Some("color=\"grey\", style=\"rounded, filled, dashed\""),
        ValueKind::RVRef => Some("color=\"grey\", style=\"rounded, filled, dotted\""),
    }
}

/// Returns the attribute list for an edge of the given kind, without surrounding brackets.
#[must_use]
pub fn edge_attributes(kind: PassKind) -> Option<&'static str> {
    match kind {
        PassKind::LVRef => Some("style=\"dashed\", label=\" &\""),
        PassKind::ConstLVRef => Some("style=\"dashed\", label=\" const &\""),
        PassKind::RVRef => Some("style=\"dashed\", label=\" &&\""),
        PassKind::ConstRVRef => Some("style=\"dashed\", label=\" const &&\""),
        PassKind::Copy => Some("label=\" copy\", color=\"red\""),
        PassKind::Move => Some("label=\" move\", color=\"green\""),
        PassKind::Invalid => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_node_styles_are_distinct() {
        let styles: HashSet<_> = ValueKind::iter().filter_map(node_attributes).collect();
        assert_eq!(styles.len(), ValueKind::iter().count());
    }

    #[test]
    fn test_edge_styles_are_distinct() {
        let styles: HashSet<_> = PassKind::iter().filter_map(edge_attributes).collect();
        assert_eq!(styles.len(), PassKind::iter().count() - 1);
        assert_eq!(edge_attributes(PassKind::Invalid), None);
    }

    #[test]
    fn test_reference_edges_are_dashed() {
        for kind in PassKind::iter().filter(|k| k.is_reference()) {
            let attributes = edge_attributes(kind).unwrap();
            assert!(attributes.contains("dashed"), "{kind}: {attributes}");
        }
        assert!(!edge_attributes(PassKind::Copy).unwrap().contains("dashed"));
        assert!(!edge_attributes(PassKind::Move).unwrap().contains("dashed"));
    }

    #[test]
    fn test_reference_nodes_are_broken_lines() {
        assert!(node_attributes(ValueKind::LVRef).unwrap().contains("dashed"));
        assert!(node_attributes(ValueKind::RVRef).unwrap().contains("dotted"));
        assert!(!node_attributes(ValueKind::LValue).unwrap().contains("style"));
    }
}

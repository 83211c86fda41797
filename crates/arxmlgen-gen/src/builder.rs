//! Random tree builder.
//!
//! Builds the randomized container body of a fixture document by recursive
//! descent. Every container node gets the same fixed skeleton: one
//! `SHORT-NAME` child, one `PARAMETERS` child with 1-3 `PARAM-<j>` leaves,
//! then (below the depth limit) its own randomly-sized batch of nested
//! containers. Only the branching counts are random; names and texts are
//! fully determined by depth and sibling index.

use arxmlgen_model::{Document, Element};
use rand::Rng;
use rand::rngs::SmallRng;

/// Inclusive branching range: how many containers to attach at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branching {
    /// Minimum number of children per level.
    pub min: usize,
    /// Maximum number of children per level (inclusive).
    pub max: usize,
}

impl Branching {
    /// The original generator's default range of 2 to 5 children.
    pub const DEFAULT: Branching = Branching { min: 2, max: 5 };

    /// Creates a branching range. `min` must not exceed `max`; callers
    /// validate user input before getting here.
    pub fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }
}

/// Builds a complete randomized ARXML document.
///
/// The root is the fixed `AUTOSAR` element; `max_depth` levels of containers
/// are nested beneath it, with the per-level child count drawn uniformly
/// from `branching`. `max_depth == 0` yields a childless root.
pub fn build_document(
    max_depth: usize,
    branching: Branching,
    rng: &mut SmallRng,
) -> Document {
    let mut doc = Document::arxml();
    attach_containers(doc.root_mut(), 0, max_depth, branching, rng);
    doc
}

/// Recursively attaches random container children to `parent`.
///
/// Base case: `depth >= max_depth` attaches nothing. Otherwise a uniform
/// draw from `branching` decides the child count, each child gets its
/// `SHORT-NAME` and `PARAMETERS` skeleton, and recursion continues one
/// level down with the same branching range.
pub fn attach_containers(
    parent: &mut Element,
    depth: usize,
    max_depth: usize,
    branching: Branching,
    rng: &mut SmallRng,
) {
    if depth >= max_depth {
        return;
    }

    let num_children = rng.gen_range(branching.min..=branching.max);
    for index in 0..num_children {
        let mut child = Element::new(format!("CONTAINER-{depth}-{index}"));

        let mut short_name = Element::new("SHORT-NAME");
        short_name.set_text(format!("TestNode_{depth}_{index}"));
        child.push_child(short_name);

        let mut params = Element::new("PARAMETERS");
        for j in 0..rng.gen_range(1..=3) {
            let mut param = Element::new(format!("PARAM-{j}"));
            param.set_text(format!("Value_{j}"));
            params.push_child(param);
        }
        child.push_child(params);

        attach_containers(&mut child, depth + 1, max_depth, branching, rng);
        parent.push_child(child);
    }
}

#[cfg(test)]
mod tests {
    use arxmlgen_model::Element;

    use super::*;
    use crate::rng_from_seed;

    /// Depth of the deepest CONTAINER-* nesting under `element`.
    fn container_depth(element: &Element) -> usize {
        element
            .children()
            .iter()
            .filter(|child| child.name().starts_with("CONTAINER-"))
            .map(|child| 1 + container_depth(child))
            .max()
            .unwrap_or(0)
    }

    /// Checks the fixed skeleton of every container in a subtree.
    fn assert_container_invariants(element: &Element) {
        for child in element.children() {
            if !child.name().starts_with("CONTAINER-") {
                continue;
            }
            let short_names = child
                .children()
                .iter()
                .filter(|c| c.name() == "SHORT-NAME")
                .count();
            let params: Vec<_> = child
                .children()
                .iter()
                .filter(|c| c.name() == "PARAMETERS")
                .collect();

            assert_eq!(short_names, 1, "container {}", child.name());
            assert_eq!(params.len(), 1, "container {}", child.name());
            let param_count = params[0].children().len();
            assert!(
                (1..=3).contains(&param_count),
                "container {} has {param_count} params",
                child.name()
            );
            assert_container_invariants(child);
        }
    }

    #[test]
    fn test_depth_never_exceeds_maximum() {
        let mut rng = rng_from_seed(Some(7));
        for max_depth in [0, 1, 3, 5] {
            let doc =
                build_document(max_depth, Branching::new(2, 3), &mut rng);
            assert!(
                container_depth(doc.root()) <= max_depth,
                "max_depth {max_depth}"
            );
        }
    }

    #[test]
    fn test_depth_reaches_maximum() {
        // Branching min >= 1 guarantees every level is populated, so the
        // deepest nesting is exactly max_depth.
        let mut rng = rng_from_seed(Some(11));
        let doc = build_document(4, Branching::new(2, 3), &mut rng);
        assert_eq!(container_depth(doc.root()), 4);
    }

    #[test]
    fn test_root_child_count_within_branching_range() {
        let mut rng = rng_from_seed(Some(3));
        for _ in 0..50 {
            let doc = build_document(3, Branching::new(2, 3), &mut rng);
            let count = doc.root().children().len();
            assert!((2..=3).contains(&count), "root has {count} children");
        }
    }

    #[test]
    fn test_container_skeleton_invariants() {
        let mut rng = rng_from_seed(Some(42));
        let doc = build_document(4, Branching::new(2, 4), &mut rng);
        assert_container_invariants(doc.root());
    }

    #[test]
    fn test_names_embed_depth_and_index() {
        let mut rng = rng_from_seed(Some(1));
        let doc = build_document(2, Branching::new(2, 2), &mut rng);

        let first = &doc.root().children()[0];
        assert_eq!(first.name(), "CONTAINER-0-0");
        let short_name = first
            .children()
            .iter()
            .find(|c| c.name() == "SHORT-NAME")
            .unwrap();
        assert_eq!(short_name.text(), Some("TestNode_0_0"));

        let nested = first
            .children()
            .iter()
            .find(|c| c.name().starts_with("CONTAINER-"))
            .unwrap();
        assert_eq!(nested.name(), "CONTAINER-1-0");
    }

    #[test]
    fn test_same_seed_builds_identical_trees() {
        let mut rng1 = rng_from_seed(Some(12345));
        let mut rng2 = rng_from_seed(Some(12345));

        let doc1 = build_document(4, Branching::DEFAULT, &mut rng1);
        let doc2 = build_document(4, Branching::DEFAULT, &mut rng2);

        assert_eq!(doc1, doc2, "same seed should produce the same tree");
    }
}

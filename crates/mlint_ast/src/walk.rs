//! Depth-first traversal of a node list.
//!
//! The order is pre-order: a node is visited, then its children one level
//! deeper, then its pear node at the node's own depth. End tags are leaves
//! even when they carry a `child_nodes` list, and a pear node is reached
//! only through its owner, so every node is visited exactly once.
//!
//! Traversal uses an explicit stack, so nesting depth is bounded by memory
//! rather than by the call stack.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::MlNode;

/// Result type for visitor callbacks.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop the whole traversal
pub type VisitResult = ControlFlow<()>;

/// Options for [`try_walk`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalkConfig {
    /// Deepest level whose nodes are visited. Children below it are
    /// skipped; pear nodes of visited nodes are still reported.
    /// Default: None (no limit)
    pub max_depth: Option<usize>,

    /// Depth reported for the top-level nodes. Set it when walking a
    /// subtree so depths (and `max_depth`) stay relative to the document.
    /// Default: 0
    pub start_depth: usize,
}

impl WalkConfig {
    /// Creates a `WalkConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum depth to descend to.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sets the depth of the top-level nodes.
    pub fn start_depth(mut self, depth: usize) -> Self {
        self.start_depth = depth;
        self
    }
}

enum Step<'a> {
    Enter(&'a MlNode<'a>, usize),
    Pear(&'a MlNode<'a>, usize),
}

/// Visits every node of `nodes` and their descendants with `(node, depth)`.
///
/// # Example
///
/// ```rust
/// use mlint_ast::{AstArena, MlNode, NodeType, Token, walk};
///
/// let arena = AstArena::new();
/// let end = arena.alloc_node(MlNode::new_parent(
///     NodeType::EndTag, Token::new(Some("</p>"), 1, 5, 4), "p", &[],
/// ));
/// let text = MlNode::new_leaf(NodeType::Text, Token::new(Some("a"), 1, 4, 3));
/// let nodes = arena.alloc_nodes(&[MlNode::new_parent(
///     NodeType::StartTag, Token::new(Some("<p>"), 1, 1, 0), "p", arena.alloc_nodes(&[text]),
/// )
/// .with_pear(end)]);
///
/// let mut seen = Vec::new();
/// walk(nodes, |node, depth| seen.push((node.raw(), depth)));
/// assert_eq!(seen, vec![("<p>", 0), ("a", 1), ("</p>", 0)]);
/// ```
pub fn walk<'a, F>(nodes: &'a [MlNode<'a>], visitor: F)
where
    F: FnMut(&'a MlNode<'a>, usize),
{
    walk_from(nodes, 0, visitor);
}

/// Like [`walk`], but the top-level nodes are visited at `depth`.
///
/// Use this to walk the children of a node whose depth is already known.
pub fn walk_from<'a, F>(nodes: &'a [MlNode<'a>], depth: usize, mut visitor: F)
where
    F: FnMut(&'a MlNode<'a>, usize),
{
    let config = WalkConfig::new().start_depth(depth);
    let _ = try_walk(nodes, &config, |node, depth| {
        visitor(node, depth);
        ControlFlow::Continue(())
    });
}

/// Like [`walk`], but the visitor can stop the traversal and `config` can
/// bound its depth.
///
/// Returns `ControlFlow::Break(())` if the visitor stopped early.
pub fn try_walk<'a, F>(nodes: &'a [MlNode<'a>], config: &WalkConfig, mut visitor: F) -> VisitResult
where
    F: FnMut(&'a MlNode<'a>, usize) -> VisitResult,
{
    let mut stack: Vec<Step<'a>> = nodes
        .iter()
        .rev()
        .map(|n| Step::Enter(n, config.start_depth))
        .collect();

    while let Some(step) = stack.pop() {
        let (node, depth) = match step {
            Step::Pear(pear, depth) => {
                visitor(pear, depth)?;
                continue;
            }
            Step::Enter(node, depth) => (node, depth),
        };

        visitor(node, depth)?;

        if !node.node_type.carries_child_nodes() || node.node_type.is_end_tag() {
            continue;
        }

        if let Some(pear) = node.pear_node {
            stack.push(Step::Pear(pear, depth));
        }

        if node.child_nodes.is_empty() {
            continue;
        }

        let child_depth = depth + 1;
        if config.max_depth.is_some_and(|max| child_depth > max) {
            debug!(
                node_name = node.node_name,
                depth, "max depth reached, skipping children"
            );
            continue;
        }

        trace!(
            node_name = node.node_name,
            children = node.child_nodes.len(),
            "descending"
        );
        stack.extend(node.child_nodes.iter().rev().map(|n| Step::Enter(n, child_depth)));
    }

    ControlFlow::Continue(())
}

/// Collects nodes in walk order, pear nodes included.
pub fn flatten<'a>(nodes: &'a [MlNode<'a>]) -> Vec<&'a MlNode<'a>> {
    let mut flat = Vec::new();
    walk(nodes, |node, _| flat.push(node));
    flat
}

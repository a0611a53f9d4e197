//! Arena allocator for a single parse.
//!
//! A parser allocates every node, attribute list and owned string of one
//! document in one [`AstArena`]; the whole tree is released at once when
//! the arena is dropped. Because nodes live in the arena, a start tag can
//! hold a plain `&'a MlNode<'a>` to its end tag without any shared
//! ownership.

use bumpalo::Bump;

use crate::{Attribute, MlNode};

/// Bump arena holding one document's AST.
///
/// # Example
///
/// ```rust
/// use mlint_ast::{AstArena, MlNode, NodeType, Token};
///
/// let arena = AstArena::new();
/// let raw = arena.alloc_str("text");
/// let nodes = arena.alloc_nodes(&[MlNode::new_leaf(
///     NodeType::Text,
///     Token::new(Some(raw), 1, 1, 0),
/// )]);
/// assert_eq!(nodes[0].raw(), "text");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates an arena sized for roughly `capacity` bytes of nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Moves a single node into the arena, e.g. an end tag that a start
    /// tag will reference as its pear node.
    #[inline]
    pub fn alloc_node<'a>(&'a self, node: MlNode<'a>) -> &'a MlNode<'a> {
        self.bump.alloc(node)
    }

    /// Copies a list of sibling nodes into the arena.
    #[inline]
    pub fn alloc_nodes<'a>(&'a self, nodes: &[MlNode<'a>]) -> &'a [MlNode<'a>] {
        self.bump.alloc_slice_copy(nodes)
    }

    /// Copies an attribute list into the arena.
    #[inline]
    pub fn alloc_attributes<'a>(&'a self, attributes: &[Attribute<'a>]) -> &'a [Attribute<'a>] {
        self.bump.alloc_slice_copy(attributes)
    }

    /// Copies a string into the arena, for text that does not borrow from
    /// the source (e.g. a normalized tag name).
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Frees every allocation so the arena can be reused for the next file.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

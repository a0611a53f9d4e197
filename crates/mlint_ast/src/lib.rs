//! # mlint_ast
//!
//! Markup AST definitions shared by every mlint parser.
//!
//! Each dialect parser (plain markup, template languages) produces the same
//! tree of [`MlNode`]s, so one rule engine can lint any of them.
//!
//! ## Architecture
//!
//! - [`position`]: offset <-> line/column arithmetic (UTF-16 code units)
//! - [`Tokenizer`]: builds positioned, uniquely identified [`Token`]s
//! - [`MlNode`] / [`Attribute`]: the tree, allocated in an [`AstArena`]
//! - [`walk()`]: the traversal order rules rely on
//! - [`debug`]: stable text dumps for parser fixtures
//!
//! ## Example
//!
//! ```rust
//! use mlint_ast::{AstArena, MlNode, NodeType, Tokenizer, debug, walk};
//!
//! let source = "<b>hi</b>";
//! let arena = AstArena::new();
//! let tokenizer = Tokenizer::markup();
//!
//! let end = arena.alloc_node(MlNode::new_parent(
//!     NodeType::EndTag,
//!     tokenizer.slice_fragment(source, 5, 9),
//!     "b",
//!     &[],
//! ));
//! let text = MlNode::new_leaf(NodeType::Text, tokenizer.slice_fragment(source, 3, 5));
//! let nodes = arena.alloc_nodes(&[MlNode::new_parent(
//!     NodeType::StartTag,
//!     tokenizer.slice_fragment(source, 0, 3),
//!     "b",
//!     arena.alloc_nodes(&[text]),
//! )
//! .with_pear(end)]);
//!
//! let mut depths = Vec::new();
//! walk(nodes, |_, depth| depths.push(depth));
//! assert_eq!(depths, vec![0, 1, 0]);
//!
//! assert_eq!(
//!     debug::tree_to_debug_maps(nodes),
//!     vec![
//!         "[1:1]>[1:4](0,3)b: <b>",
//!         "[1:4]>[1:6](3,5)#text: hi",
//!         "[1:6]>[1:10](5,9)b: </b>",
//!     ]
//! );
//! ```

mod arena;
pub mod debug;
mod node;
mod node_type;
pub mod position;
mod token;
mod tokenizer;
mod walk;

pub use arena::AstArena;
pub use node::{Attribute, Document, HtmlAttribute, MlNode, PreprocessorAttribute};
pub use node_type::NodeType;
pub use position::{MarkupPositions, Position, PositionMath, TemplatePositions};
pub use token::{Token, TokenId};
pub use tokenizer::Tokenizer;
pub use walk::{VisitResult, WalkConfig, flatten, try_walk, walk, walk_from};

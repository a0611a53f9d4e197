//! # mlint_parser
//!
//! The contract between markup dialect parsers and the rest of mlint.
//!
//! This crate provides:
//! - A [`Parser`] trait every dialect parser implements
//! - [`ParseError`] for parse failures
//! - [`check_document`] to verify that a parser's tree honours the token
//!   and node invariants of `mlint_ast`
//!
//! ## Example
//!
//! ```rust,ignore
//! use mlint_ast::AstArena;
//! use mlint_parser::{Parser, check_document};
//!
//! let arena = AstArena::new();
//! let source = "<p>Hello</p>";
//! let document = parser.parse(&arena, source)?;
//!
//! check_document(source, &document)?;
//! ```

mod conformance;
mod error;
mod traits;

pub use conformance::{check_document, check_nodes, check_nodes_with};
pub use error::{ConformanceError, ParseError};
pub use traits::Parser;

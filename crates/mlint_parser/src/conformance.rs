//! Checks that a parser's output satisfies the AST contract.
//!
//! Parser tests run their output through [`check_document`] so that a
//! wrong offset or a mismatched line/column fails at the parser instead of
//! surfacing later as a misplaced lint diagnostic.

use std::collections::HashSet;
use std::ops::ControlFlow;

use mlint_ast::position::{PositionMath, utf16_len, utf16_slice};
use mlint_ast::{
    Attribute, Document, MarkupPositions, MlNode, Position, Token, TokenId, WalkConfig, try_walk,
};
use tracing::debug;

use crate::ConformanceError;

/// Checks every node, pear node and attribute token of `document` against
/// `source` using the baseline position rules.
pub fn check_document(source: &str, document: &Document<'_>) -> Result<(), ConformanceError> {
    check_nodes_with(&MarkupPositions, source, document.nodes)
}

/// Checks a node list against `source` using the baseline position rules.
pub fn check_nodes(source: &str, nodes: &[MlNode<'_>]) -> Result<(), ConformanceError> {
    check_nodes_with(&MarkupPositions, source, nodes)
}

/// Checks a node list against `source` using a dialect's position rules.
///
/// Ghost nodes are exempt from position checks but their token ids still
/// count towards uniqueness. The first violation in walk order is returned.
pub fn check_nodes_with<M: PositionMath>(
    math: &M,
    source: &str,
    nodes: &[MlNode<'_>],
) -> Result<(), ConformanceError> {
    let mut checker = Checker {
        math,
        source,
        seen: HashSet::new(),
    };
    let mut outcome = Ok(());

    let _ = try_walk(nodes, &WalkConfig::default(), |node, _| {
        match checker.node(node) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                debug!(%err, node_name = node.node_name, "tree failed conformance check");
                outcome = Err(err);
                ControlFlow::Break(())
            }
        }
    });

    outcome
}

struct Checker<'m, 's, M> {
    math: &'m M,
    source: &'s str,
    seen: HashSet<TokenId>,
}

impl<M: PositionMath> Checker<'_, '_, M> {
    fn node(&mut self, node: &MlNode<'_>) -> Result<(), ConformanceError> {
        if let Some(pear) = node.pear_node {
            if !pear.node_type.is_end_tag() {
                return Err(ConformanceError::PearNotEndTag {
                    owner: node.node_name.to_string(),
                    offset: node.token.start_offset,
                    pear_type: pear.node_type,
                });
            }
        }

        if node.is_ghost {
            self.unique(&node.token)?;
        } else {
            self.token(&node.token)?;
        }

        for attr in node.attributes {
            self.attribute(attr)?;
        }

        Ok(())
    }

    fn attribute(&mut self, attr: &Attribute<'_>) -> Result<(), ConformanceError> {
        self.token(attr.token())?;

        if let Attribute::Html(html) = attr {
            let fields = [
                Some(&html.spaces_before_name),
                Some(&html.name),
                html.spaces_before_equal.as_ref(),
                html.equal.as_ref(),
                html.spaces_after_equal.as_ref(),
                html.start_quote.as_ref(),
                html.value.as_ref(),
                html.end_quote.as_ref(),
            ];
            for token in fields.into_iter().flatten() {
                self.token(token)?;
            }
        }

        Ok(())
    }

    fn unique(&mut self, token: &Token<'_>) -> Result<(), ConformanceError> {
        if self.seen.insert(token.id) {
            Ok(())
        } else {
            Err(ConformanceError::DuplicateToken {
                id: token.id,
                offset: token.start_offset,
            })
        }
    }

    fn token(&mut self, token: &Token<'_>) -> Result<(), ConformanceError> {
        self.unique(token)?;

        if !token.is_well_formed() {
            return Err(ConformanceError::OffsetLength {
                id: token.id,
                start: token.start_offset,
                end: token.end_offset,
                len: utf16_len(token.raw),
            });
        }

        let expected = utf16_slice(self.source, token.start_offset, token.end_offset);
        if expected != token.raw {
            return Err(ConformanceError::RawMismatch {
                id: token.id,
                start: token.start_offset,
                end: token.end_offset,
                raw: token.raw.to_string(),
                expected: expected.to_string(),
            });
        }

        self.position(token, "start", token.start_offset, token.start())?;
        self.position(token, "end", token.end_offset, token.end())
    }

    fn position(
        &self,
        token: &Token<'_>,
        edge: &'static str,
        offset: u32,
        actual: Position,
    ) -> Result<(), ConformanceError> {
        let expected = Position::new(
            self.math.line_at(self.source, offset),
            self.math.col_at(self.source, offset),
        );
        if actual == expected {
            Ok(())
        } else {
            Err(ConformanceError::Position {
                id: token.id,
                edge,
                offset,
                actual,
                expected,
            })
        }
    }
}

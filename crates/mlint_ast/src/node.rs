//! MlNode, attribute and document definitions.

use serde::Serialize;

use crate::{NodeType, Token};

/// A node in the markup AST.
///
/// Nodes are `Copy` views allocated in an [`AstArena`](crate::AstArena).
/// A node owns its `child_nodes`; `pear_node` is a plain shared reference
/// into the same arena and never an ownership edge. A start tag points at
/// its end tag, the end tag does not point back, and the end tag is not
/// listed among any node's children.
///
/// # Example
///
/// ```rust
/// use mlint_ast::{AstArena, MlNode, NodeType, Tokenizer};
///
/// let arena = AstArena::new();
/// let tokenizer = Tokenizer::markup();
///
/// let end = arena.alloc_node(MlNode::new_parent(
///     NodeType::EndTag,
///     tokenizer.token(Some("</p>"), 1, 6, 5),
///     "p",
///     &[],
/// ));
/// let text = MlNode::new_leaf(NodeType::Text, tokenizer.token(Some("hi"), 1, 4, 3));
/// let start = MlNode::new_parent(
///     NodeType::StartTag,
///     tokenizer.token(Some("<p>"), 1, 1, 0),
///     "p",
///     arena.alloc_nodes(&[text]),
/// )
/// .with_pear(end);
///
/// assert_eq!(start.pear_node.map(|n| n.raw()), Some("</p>"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MlNode<'a> {
    /// The kind of this node.
    pub node_type: NodeType,

    /// Source span of the node itself (for a start tag, just the tag).
    pub token: Token<'a>,

    /// Tag name for elements, the type tag (e.g. `#text`) otherwise.
    pub node_name: &'a str,

    /// True when the node has no text of its own in the source.
    pub is_ghost: bool,

    /// Child nodes, in source order.
    pub child_nodes: &'a [MlNode<'a>],

    /// Counterpart node, e.g. the end tag of a start tag.
    pub pear_node: Option<&'a MlNode<'a>>,

    /// Attributes (start tags only).
    pub attributes: &'a [Attribute<'a>],
}

impl<'a> MlNode<'a> {
    /// Creates a node that may hold children.
    #[inline]
    pub const fn new_parent(
        node_type: NodeType,
        token: Token<'a>,
        node_name: &'a str,
        child_nodes: &'a [MlNode<'a>],
    ) -> Self {
        Self {
            node_type,
            token,
            node_name,
            is_ghost: false,
            child_nodes,
            pear_node: None,
            attributes: &[],
        }
    }

    /// Creates a childless node named after its type tag.
    #[inline]
    pub const fn new_leaf(node_type: NodeType, token: Token<'a>) -> Self {
        Self::new_parent(node_type, token, node_type.as_str(), &[])
    }

    /// Creates a ghost node: one inserted to normalize the tree shape.
    #[inline]
    pub const fn new_ghost(
        node_type: NodeType,
        token: Token<'a>,
        node_name: &'a str,
        child_nodes: &'a [MlNode<'a>],
    ) -> Self {
        let mut node = Self::new_parent(node_type, token, node_name, child_nodes);
        node.is_ghost = true;
        node
    }

    /// Sets the counterpart node.
    #[inline]
    pub fn with_pear(mut self, pear: &'a MlNode<'a>) -> Self {
        self.pear_node = Some(pear);
        self
    }

    /// Sets the attribute list.
    #[inline]
    pub fn with_attributes(mut self, attributes: &'a [Attribute<'a>]) -> Self {
        self.attributes = attributes;
        self
    }

    /// The source text of the node itself.
    #[inline]
    pub const fn raw(&self) -> &'a str {
        self.token.raw
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.child_nodes.is_empty()
    }
}

impl<'a> Serialize for MlNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let has_child_field = self.node_type.carries_child_nodes();
        let mut len = 4; // type, nodeName, isGhost, token
        if has_child_field {
            len += 1;
        }
        if !self.attributes.is_empty() {
            len += 1;
        }
        if self.pear_node.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("MlNode", len)?;

        state.serialize_field("type", &self.node_type)?;
        state.serialize_field("nodeName", self.node_name)?;
        state.serialize_field("isGhost", &self.is_ghost)?;
        state.serialize_field("token", &self.token)?;

        if has_child_field {
            state.serialize_field("childNodes", self.child_nodes)?;
        }
        if !self.attributes.is_empty() {
            state.serialize_field("attributes", self.attributes)?;
        }
        if let Some(pear) = self.pear_node {
            state.serialize_field("pearNode", pear)?;
        }

        state.end()
    }
}

/// An attribute of a start tag.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type")]
pub enum Attribute<'a> {
    /// A regular `name="value"` attribute.
    #[serde(rename = "html-attr")]
    Html(HtmlAttribute<'a>),
    /// A dialect-specific attribute known only by its whole span.
    #[serde(rename = "ps-attr")]
    Preprocessor(PreprocessorAttribute<'a>),
}

impl<'a> Attribute<'a> {
    /// The span of the whole attribute.
    #[inline]
    pub const fn token(&self) -> &Token<'a> {
        match self {
            Attribute::Html(attr) => &attr.token,
            Attribute::Preprocessor(attr) => &attr.token,
        }
    }

    /// The attribute name as written, if the attribute has a name token.
    #[inline]
    pub const fn node_name(&self) -> Option<&'a str> {
        match self {
            Attribute::Html(attr) => Some(attr.name.raw),
            Attribute::Preprocessor(_) => None,
        }
    }

    /// Best-effort name for attributes whose name is dynamic or malformed.
    #[inline]
    pub const fn potential_name(&self) -> Option<&'a str> {
        match self {
            Attribute::Html(attr) => attr.potential_name,
            Attribute::Preprocessor(attr) => attr.potential_name,
        }
    }

    /// The tag used in debug output and JSON.
    #[inline]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Attribute::Html(_) => "html-attr",
            Attribute::Preprocessor(_) => "ps-attr",
        }
    }
}

/// The token fields of a `name="value"` attribute.
///
/// `spaces_before_name` and `name` always exist (possibly zero-width).
/// Every other field is `None` when the source does not contain it, e.g.
/// a bare boolean attribute has no equal sign, quotes or value.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlAttribute<'a> {
    /// The whole attribute, from the name to the closing quote.
    pub token: Token<'a>,
    /// Whitespace before the name.
    pub spaces_before_name: Token<'a>,
    /// The attribute name.
    pub name: Token<'a>,
    /// Whitespace between the name and `=`.
    pub spaces_before_equal: Option<Token<'a>>,
    /// The `=` sign.
    pub equal: Option<Token<'a>>,
    /// Whitespace between `=` and the value.
    pub spaces_after_equal: Option<Token<'a>>,
    /// Opening quote.
    pub start_quote: Option<Token<'a>>,
    /// The value, without quotes.
    pub value: Option<Token<'a>>,
    /// Closing quote.
    pub end_quote: Option<Token<'a>>,
    /// Dialect directive such as `v-if` or `:class`.
    pub is_directive: bool,
    /// The value is an expression evaluated at runtime.
    pub is_dynamic_value: bool,
    /// The parser could not make sense of this attribute.
    pub is_invalid: bool,
    /// Name the attribute resolves to when `name` is not literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_name: Option<&'a str>,
}

impl<'a> HtmlAttribute<'a> {
    /// Creates a name-only attribute; fill the optional fields afterwards.
    #[inline]
    pub const fn new(token: Token<'a>, spaces_before_name: Token<'a>, name: Token<'a>) -> Self {
        Self {
            token,
            spaces_before_name,
            name,
            spaces_before_equal: None,
            equal: None,
            spaces_after_equal: None,
            start_quote: None,
            value: None,
            end_quote: None,
            is_directive: false,
            is_dynamic_value: false,
            is_invalid: false,
            potential_name: None,
        }
    }

    /// The attribute value without quotes, if any.
    #[inline]
    pub fn value_str(&self) -> Option<&'a str> {
        self.value.map(|value| value.raw)
    }
}

/// An attribute only a dialect parser understands.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreprocessorAttribute<'a> {
    /// The whole attribute.
    pub token: Token<'a>,
    /// Attribute name the dialect maps this span to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_name: Option<&'a str>,
    /// Dialect directive.
    pub is_directive: bool,
    /// The value is an expression evaluated at runtime.
    pub is_dynamic_value: bool,
}

impl<'a> PreprocessorAttribute<'a> {
    /// Creates an attribute with no potential name and both flags unset.
    #[inline]
    pub const fn new(token: Token<'a>) -> Self {
        Self {
            token,
            potential_name: None,
            is_directive: false,
            is_dynamic_value: false,
        }
    }
}

/// The output of a parser.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document<'a> {
    /// Root nodes in source order.
    #[serde(rename = "nodeList")]
    pub nodes: &'a [MlNode<'a>],
    /// True when the source is a fragment rather than a whole document.
    pub is_fragment: bool,
}

impl<'a> Document<'a> {
    /// Creates a document over `nodes`.
    #[inline]
    pub const fn new(nodes: &'a [MlNode<'a>], is_fragment: bool) -> Self {
        Self { nodes, is_fragment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, Tokenizer};

    #[test]
    fn test_new_leaf_uses_type_tag_as_name() {
        let node = MlNode::new_leaf(NodeType::Text, Token::new(Some("hello"), 1, 1, 0));

        assert_eq!(node.node_name, "#text");
        assert_eq!(node.raw(), "hello");
        assert!(!node.is_ghost);
        assert!(!node.has_children());
        assert!(node.pear_node.is_none());
    }

    #[test]
    fn test_new_ghost() {
        let node = MlNode::new_ghost(NodeType::OmittedTag, Token::new(None, 1, 1, 0), "head", &[]);

        assert!(node.is_ghost);
        assert_eq!(node.node_name, "head");
        assert_eq!(node.raw(), "");
    }

    #[test]
    fn test_element_with_pear_and_children() {
        let arena = AstArena::new();
        let tokenizer = Tokenizer::markup();

        let end = arena.alloc_node(MlNode::new_parent(
            NodeType::EndTag,
            tokenizer.token(Some("</b>"), 1, 7, 6),
            "b",
            &[],
        ));
        let text = MlNode::new_leaf(NodeType::Text, tokenizer.token(Some("x"), 1, 4, 3));
        let start = MlNode::new_parent(
            NodeType::StartTag,
            tokenizer.token(Some("<b>"), 1, 1, 0),
            "b",
            arena.alloc_nodes(&[text]),
        )
        .with_pear(end);

        assert!(start.has_children());
        assert_eq!(start.child_nodes[0].raw(), "x");
        assert_eq!(start.pear_node.unwrap().node_type, NodeType::EndTag);
        assert!(end.pear_node.is_none());
    }

    #[test]
    fn test_name_only_attribute() {
        let tokenizer = Tokenizer::markup();
        let attr = HtmlAttribute::new(
            tokenizer.token(Some(" hidden"), 1, 4, 3),
            tokenizer.token(Some(" "), 1, 4, 3),
            tokenizer.token(Some("hidden"), 1, 5, 4),
        );
        let attr = Attribute::Html(attr);

        assert_eq!(attr.node_name(), Some("hidden"));
        assert_eq!(attr.potential_name(), None);
        assert_eq!(attr.type_tag(), "html-attr");
        assert_eq!(attr.token().raw, " hidden");
    }

    #[test]
    fn test_preprocessor_attribute() {
        let mut attr = PreprocessorAttribute::new(Token::new(Some(":[name]=\"x\""), 1, 5, 4));
        attr.potential_name = Some("name");
        attr.is_dynamic_value = true;
        let attr = Attribute::Preprocessor(attr);

        assert_eq!(attr.node_name(), None);
        assert_eq!(attr.potential_name(), Some("name"));
        assert_eq!(attr.type_tag(), "ps-attr");
    }

    #[test]
    fn test_value_str() {
        let tokenizer = Tokenizer::markup();
        let mut attr = HtmlAttribute::new(
            tokenizer.token(Some(" a=\"1\""), 1, 3, 2),
            tokenizer.token(Some(" "), 1, 3, 2),
            tokenizer.token(Some("a"), 1, 4, 3),
        );
        assert_eq!(attr.value_str(), None);

        attr.value = Some(tokenizer.token(Some("1"), 1, 7, 6));
        assert_eq!(attr.value_str(), Some("1"));
    }

    #[test]
    fn test_serialization_leaf() {
        let node = MlNode::new_leaf(NodeType::Comment, Token::new(Some("<!-- c -->"), 1, 1, 0));
        let json = serde_json::to_value(node).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["type"], "#comment");
        assert_eq!(obj["nodeName"], "#comment");
        assert_eq!(obj["isGhost"], false);
        assert_eq!(obj["token"]["raw"], "<!-- c -->");
        assert_eq!(obj["token"]["endOffset"], 10);
        assert!(!obj.contains_key("childNodes"));
        assert!(!obj.contains_key("pearNode"));
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn test_serialization_element() {
        let arena = AstArena::new();
        let tokenizer = Tokenizer::markup();
        let end = arena.alloc_node(MlNode::new_parent(
            NodeType::EndTag,
            tokenizer.token(Some("</i>"), 1, 4, 3),
            "i",
            &[],
        ));
        let attrs = arena.alloc_attributes(&[Attribute::Html(HtmlAttribute::new(
            tokenizer.token(Some(" x"), 1, 3, 2),
            tokenizer.token(Some(" "), 1, 3, 2),
            tokenizer.token(Some("x"), 1, 4, 3),
        ))]);
        let start = MlNode::new_parent(
            NodeType::StartTag,
            tokenizer.token(Some("<i x>"), 1, 1, 0),
            "i",
            &[],
        )
        .with_attributes(attrs)
        .with_pear(end);

        let json = serde_json::to_value(start).unwrap();

        assert_eq!(json["type"], "starttag");
        assert!(json["childNodes"].as_array().unwrap().is_empty());
        assert_eq!(json["attributes"][0]["type"], "html-attr");
        assert_eq!(json["attributes"][0]["name"]["raw"], "x");
        assert!(json["attributes"][0]["value"].is_null());
        assert!(json["attributes"][0].get("potentialName").is_none());
        assert_eq!(json["pearNode"]["type"], "endtag");
        assert!(json["pearNode"].get("pearNode").is_none());
    }

    #[test]
    fn test_document_serialization() {
        let arena = AstArena::new();
        let nodes = arena.alloc_nodes(&[MlNode::new_leaf(
            NodeType::Text,
            Token::new(Some("t"), 1, 1, 0),
        )]);
        let json = serde_json::to_value(Document::new(nodes, true)).unwrap();

        assert_eq!(json["isFragment"], true);
        assert_eq!(json["nodeList"][0]["type"], "#text");
    }
}

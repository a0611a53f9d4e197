//! Node kinds.

use serde::{Deserialize, Serialize};

/// The kind of a [`MlNode`](crate::MlNode).
///
/// Dialect parsers map their own constructs onto these kinds; anything
/// structural that only exists in a template language is a
/// [`NodeType::PreprocessorBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NodeType {
    /// `<!DOCTYPE ...>`.
    #[serde(rename = "#doctype")]
    Doctype,
    /// An opening tag; owns the element's children and attributes.
    #[serde(rename = "starttag")]
    StartTag,
    /// A closing tag, reached through its start tag's pear node.
    #[serde(rename = "endtag")]
    EndTag,
    /// An element whose tags are implied by the markup rules.
    #[serde(rename = "omittedtag")]
    OmittedTag,
    /// `<!-- ... -->`.
    #[serde(rename = "#comment")]
    Comment,
    /// Character data.
    #[serde(rename = "#text")]
    Text,
    /// Dialect-specific structure such as template control flow.
    #[serde(rename = "#ps-block")]
    PreprocessorBlock,
    /// Source the parser could not classify.
    #[serde(rename = "#invalid")]
    Invalid,
}

impl NodeType {
    /// Returns true if nodes of this kind have a `child_nodes` list.
    ///
    /// End tags report true here but are never descended into; see
    /// [`NodeType::is_end_tag`].
    #[inline]
    pub const fn carries_child_nodes(&self) -> bool {
        matches!(
            self,
            NodeType::StartTag
                | NodeType::EndTag
                | NodeType::OmittedTag
                | NodeType::PreprocessorBlock
        )
    }

    /// Returns true for closing tags.
    #[inline]
    pub const fn is_end_tag(&self) -> bool {
        matches!(self, NodeType::EndTag)
    }

    /// Returns true for element-like kinds that carry a tag name.
    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(
            self,
            NodeType::StartTag | NodeType::EndTag | NodeType::OmittedTag
        )
    }

    /// The tag used in debug output and JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Doctype => "#doctype",
            NodeType::StartTag => "starttag",
            NodeType::EndTag => "endtag",
            NodeType::OmittedTag => "omittedtag",
            NodeType::Comment => "#comment",
            NodeType::Text => "#text",
            NodeType::PreprocessorBlock => "#ps-block",
            NodeType::Invalid => "#invalid",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

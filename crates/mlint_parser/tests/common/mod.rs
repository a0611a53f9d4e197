//! A deliberately tiny tag parser used to exercise the parser contract.
//!
//! It understands `<name>`, `</name>`, `{{ ... }}` and text, nothing else.

use mlint_ast::{
    AstArena, Document, MarkupPositions, MlNode, NodeType, PositionMath, TemplatePositions, Token,
    Tokenizer,
};
use mlint_parser::{ParseError, Parser};

pub struct FixtureParser<M> {
    tokenizer: Tokenizer<M>,
    name: &'static str,
    extensions: &'static [&'static str],
}

impl FixtureParser<MarkupPositions> {
    pub fn markup() -> Self {
        Self {
            tokenizer: Tokenizer::markup(),
            name: "fixture-html",
            extensions: &["html", "htm"],
        }
    }
}

impl FixtureParser<TemplatePositions> {
    pub fn template() -> Self {
        Self {
            tokenizer: Tokenizer::template(),
            name: "fixture-template",
            extensions: &["vue"],
        }
    }
}

struct Open<'a> {
    token: Token<'a>,
    name: &'a str,
    children: Vec<MlNode<'a>>,
}

fn push<'a>(stack: &mut [Open<'a>], root: &mut Vec<MlNode<'a>>, node: MlNode<'a>) {
    match stack.last_mut() {
        Some(open) => open.children.push(node),
        None => root.push(node),
    }
}

impl<M: PositionMath> Parser for FixtureParser<M> {
    fn name(&self) -> &str {
        self.name
    }

    fn extensions(&self) -> &[&str] {
        self.extensions
    }

    fn parse<'a>(
        &self,
        arena: &'a AstArena,
        source: &'a str,
    ) -> Result<Document<'a>, ParseError> {
        if !source.is_ascii() {
            return Err(ParseError::unsupported("non-ASCII source"));
        }

        let mut stack: Vec<Open<'a>> = Vec::new();
        let mut root = Vec::new();
        let mut pos = 0usize;

        while pos < source.len() {
            let rest = &source[pos..];
            let offset = pos as u32;

            let end = if rest.starts_with("{{") {
                let end = rest
                    .find("}}")
                    .map(|i| pos + i + 2)
                    .ok_or_else(|| ParseError::invalid_source_at("unterminated mustache", offset))?;
                let token = self.tokenizer.slice_fragment(source, offset, end as u32);
                let block = MlNode::new_parent(NodeType::PreprocessorBlock, token, "", &[]);
                push(&mut stack, &mut root, block);
                end
            } else if rest.starts_with('<') {
                let end = rest
                    .find('>')
                    .map(|i| pos + i + 1)
                    .ok_or_else(|| ParseError::invalid_source_at("unterminated tag", offset))?;
                let token = self.tokenizer.slice_fragment(source, offset, end as u32);

                if let Some(name) = token.raw.strip_prefix("</").and_then(|r| r.strip_suffix('>')) {
                    let open = stack.pop().ok_or_else(|| {
                        ParseError::invalid_source_at(format!("stray </{name}>"), offset)
                    })?;
                    if open.name != name {
                        return Err(ParseError::invalid_source_at(
                            format!("expected </{}>", open.name),
                            offset,
                        ));
                    }
                    let end_tag =
                        arena.alloc_node(MlNode::new_parent(NodeType::EndTag, token, name, &[]));
                    let element = MlNode::new_parent(
                        NodeType::StartTag,
                        open.token,
                        open.name,
                        arena.alloc_nodes(&open.children),
                    )
                    .with_pear(end_tag);
                    push(&mut stack, &mut root, element);
                } else {
                    let name = &token.raw[1..token.raw.len() - 1];
                    stack.push(Open {
                        token,
                        name,
                        children: Vec::new(),
                    });
                }
                end
            } else {
                let len = [rest.find('<'), rest.find("{{")]
                    .into_iter()
                    .flatten()
                    .min()
                    .unwrap_or(rest.len());
                let end = pos + len;
                let token = self.tokenizer.slice_fragment(source, offset, end as u32);
                push(&mut stack, &mut root, MlNode::new_leaf(NodeType::Text, token));
                end
            };

            pos = end;
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::invalid_source_at(
                format!("unclosed <{}>", open.name),
                open.token.start_offset,
            ));
        }

        Ok(Document::new(arena.alloc_nodes(&root), true))
    }
}

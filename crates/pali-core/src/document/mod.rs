//! Structured document model shared by conversion and search.
//!
//! A document is a list of blocks (paragraphs). Each block holds text nodes,
//! inline elements one level deep, and hyperlinks. Hyperlinks are opaque:
//! they are never indexed, converted or searched.

mod index;

pub use index::TextIndex;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Address of a node: `(block, child)` or `(block, child, nested)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpanAddress {
    pub block: usize,
    pub child: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<usize>,
}

impl SpanAddress {
    pub fn child(block: usize, child: usize) -> Self {
        Self {
            block,
            child,
            nested: None,
        }
    }

    pub fn nested(block: usize, child: usize, nested: usize) -> Self {
        Self {
            block,
            child,
            nested: Some(nested),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text {
        text: String,
    },
    Element {
        #[serde(default)]
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            class: None,
            children,
        }
    }

    pub fn element_with_class(
        tag: impl Into<String>,
        class: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            tag: tag.into(),
            class: Some(class.into()),
            children,
        }
    }

    pub fn link(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            name: Some(name.into()),
            children,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Element { class, .. } => class.as_deref(),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } | Node::Link { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Block {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One block per non-blank line, each holding a single text node.
    pub fn from_plain_text(text: &str) -> Self {
        let blocks = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Block::new(vec![Node::text(line)]))
            .collect();
        Self { blocks }
    }

    /// Text of the whole body, one line per block.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text_content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn node(&self, addr: &SpanAddress) -> Option<&Node> {
        let child = self.blocks.get(addr.block)?.children.get(addr.child)?;
        match addr.nested {
            None => Some(child),
            Some(k) => match child {
                Node::Element { children, .. } | Node::Link { children, .. } => children.get(k),
                Node::Text { .. } => None,
            },
        }
    }

    fn node_mut(&mut self, addr: &SpanAddress) -> Option<&mut Node> {
        let child = self
            .blocks
            .get_mut(addr.block)?
            .children
            .get_mut(addr.child)?;
        match addr.nested {
            None => Some(child),
            Some(k) => match child {
                Node::Element { children, .. } | Node::Link { children, .. } => {
                    children.get_mut(k)
                }
                Node::Text { .. } => None,
            },
        }
    }

    /// Text of the span at `addr`, if it addresses a text node.
    pub fn span_text(&self, addr: &SpanAddress) -> Option<&str> {
        match self.node(addr)? {
            Node::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn span_text_mut(&mut self, addr: &SpanAddress) -> Option<&mut String> {
        match self.node_mut(addr)? {
            Node::Text { text } => Some(text),
            _ => None,
        }
    }
}

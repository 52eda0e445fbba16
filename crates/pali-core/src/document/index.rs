use tracing::{debug, debug_span};

use super::{Document, Node, SpanAddress};

/// Ordered addresses of every convertible text span in a document.
///
/// The index is only valid for the block/child structure it was built from.
/// Editing that structure leaves it stale; rebuild it with [`TextIndex::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextIndex {
    spans: Vec<SpanAddress>,
}

impl TextIndex {
    /// Collect text children of each block, and text grandchildren of each
    /// non-hyperlink element. Deeper nodes and hyperlinks are not indexed.
    pub fn build(doc: &Document) -> Self {
        let _span = debug_span!("build_index", blocks = doc.blocks.len()).entered();
        let mut spans = Vec::new();
        for (i, block) in doc.blocks.iter().enumerate() {
            for (j, child) in block.children.iter().enumerate() {
                match child {
                    Node::Text { .. } => spans.push(SpanAddress::child(i, j)),
                    Node::Element { children, .. } => {
                        for (k, grandchild) in children.iter().enumerate() {
                            if matches!(grandchild, Node::Text { .. }) {
                                spans.push(SpanAddress::nested(i, j, k));
                            }
                        }
                    }
                    Node::Link { .. } => {}
                }
            }
        }
        debug!(span_count = spans.len());
        Self { spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&SpanAddress> {
        self.spans.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpanAddress> {
        self.spans.iter()
    }

    /// Addresses paired with their current text in `doc`.
    ///
    /// Addresses that no longer resolve to a text node are skipped.
    pub fn texts<'a>(&'a self, doc: &'a Document) -> impl Iterator<Item = (SpanAddress, &'a str)> {
        self.spans
            .iter()
            .filter_map(|addr| doc.span_text(addr).map(|text| (*addr, text)))
    }
}

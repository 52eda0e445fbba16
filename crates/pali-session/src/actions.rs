//! Host pass-throughs for selection, clicks and clipboard/file actions.

use pali_core::document::{Node, SpanAddress};

use crate::types::NUMBER_MARKER_CLASSES;
use crate::ViewerSession;

impl ViewerSession {
    /// Mouse-up with a text selection. A trimmed non-empty selection is
    /// looked up in the dictionary and becomes the clicked text.
    ///
    /// Returns `false` for an empty selection so the host can fall back to
    /// [`handle_click`](Self::handle_click).
    pub fn handle_selection(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.host.show_dictionary_result(text);
        self.host.notify_clicked_text(text);
        true
    }

    /// Click without a selection on the node at `addr`.
    ///
    /// The click target is the innermost element around the node: a nested
    /// address resolves to its parent element and a bare text child to its
    /// block. Paragraph-number markers report the empty string. Unresolvable
    /// addresses are ignored.
    pub fn handle_click(&self, addr: &SpanAddress) {
        if self.displayed.node(addr).is_none() {
            return;
        }
        let element_addr = SpanAddress::child(addr.block, addr.child);
        let text = match self.displayed.node(&element_addr) {
            Some(Node::Text { .. }) => self.displayed.blocks[addr.block].text_content(),
            Some(element) if is_number_marker(element) => String::new(),
            Some(element) => element.text_content(),
            None => return,
        };
        self.host.notify_clicked_text(&text);
    }

    pub fn copy_selection(&self, text: &str) {
        if !text.is_empty() {
            self.host.copy_text(text);
        }
    }

    pub fn save_selection(&self, text: &str) {
        if !text.is_empty() {
            self.host.save_text(text);
        }
    }

    /// Copy the whole displayed body, even when it is empty.
    pub fn copy_body(&self) {
        self.host.copy_text(&self.displayed.plain_text());
    }

    pub fn save_body(&self) {
        let body = self.displayed.plain_text();
        if !body.is_empty() {
            self.host.save_text(&body);
        }
    }

    pub fn open_declension(&self, term: &str) {
        let term = term.trim();
        if !term.is_empty() {
            self.host.open_declension(term);
        }
    }
}

fn is_number_marker(node: &Node) -> bool {
    node.class()
        .is_some_and(|class| NUMBER_MARKER_CLASSES.contains(&class))
}

mod search;

use std::sync::{Arc, Mutex};

use pali_core::document::{Block, Document, Node};
use pali_core::search::Selection;

use crate::{HostHandler, ViewerSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum HostEvent {
    Dictionary(String),
    Clicked(String),
    Found(bool),
    Message(String),
    Selection(Selection),
    Copy(String),
    Save(String),
    Declension(String),
}

/// Host that records every callback in order.
#[derive(Debug, Default)]
pub(super) struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    fn push(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Drain and return the events recorded so far.
    pub fn take(&self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl HostHandler for RecordingHost {
    fn show_dictionary_result(&self, text: &str) {
        self.push(HostEvent::Dictionary(text.to_string()));
    }
    fn notify_clicked_text(&self, text: &str) {
        self.push(HostEvent::Clicked(text.to_string()));
    }
    fn report_search_found(&self, found: bool) {
        self.push(HostEvent::Found(found));
    }
    fn report_message(&self, message: &str) {
        self.push(HostEvent::Message(message.to_string()));
    }
    fn show_selection(&self, selection: &Selection) {
        self.push(HostEvent::Selection(selection.clone()));
    }
    fn copy_text(&self, text: &str) {
        self.push(HostEvent::Copy(text.to_string()));
    }
    fn save_text(&self, text: &str) {
        self.push(HostEvent::Save(text.to_string()));
    }
    fn open_declension(&self, term: &str) {
        self.push(HostEvent::Declension(term.to_string()));
    }
}

/// Two paragraphs: a paragraph number, body text, a hyperlink and bold text.
pub(super) fn sample_document() -> Document {
    Document::new(vec![
        Block::new(vec![
            Node::element_with_class("span", "paranum", vec![Node::text("1")]),
            Node::text(". Evaṃ me sutaṃ. Ekaṃ samayaṃ bhagavā"),
            Node::link("P1.0001", vec![Node::text("[P1]")]),
        ]),
        Block::new(vec![
            Node::text("buddho dhammo saṅgho "),
            Node::element("b", vec![Node::text("dhammapada")]),
        ]),
    ])
}

pub(super) fn make_session() -> (ViewerSession, Arc<RecordingHost>) {
    let host = Arc::new(RecordingHost::default());
    let session = ViewerSession::new(host.clone(), sample_document());
    (session, host)
}

use std::sync::Arc;

use pali_core::search::Selection;
use pali_session::HostHandler;

use super::PaliSelection;

/// Viewer callbacks implemented on the foreign side.
#[uniffi::export(with_foreign)]
pub trait PaliHost: Send + Sync {
    fn show_dictionary_result(&self, text: String);
    fn notify_clicked_text(&self, text: String);
    fn report_search_found(&self, found: bool);
    fn report_message(&self, message: String);
    fn show_selection(&self, selection: PaliSelection);
    fn copy_text(&self, text: String);
    fn save_text(&self, text: String);
    fn open_declension(&self, term: String);
}

/// Bridges a foreign host to the session's callback trait.
pub(super) struct HostAdapter(pub(super) Arc<dyn PaliHost>);

impl HostHandler for HostAdapter {
    fn show_dictionary_result(&self, text: &str) {
        self.0.show_dictionary_result(text.to_string());
    }
    fn notify_clicked_text(&self, text: &str) {
        self.0.notify_clicked_text(text.to_string());
    }
    fn report_search_found(&self, found: bool) {
        self.0.report_search_found(found);
    }
    fn report_message(&self, message: &str) {
        self.0.report_message(message.to_string());
    }
    fn show_selection(&self, selection: &Selection) {
        self.0.show_selection(selection.into());
    }
    fn copy_text(&self, text: &str) {
        self.0.copy_text(text.to_string());
    }
    fn save_text(&self, text: &str) {
        self.0.save_text(text.to_string());
    }
    fn open_declension(&self, term: &str) {
        self.0.open_declension(term.to_string());
    }
}

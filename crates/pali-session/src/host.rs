use pali_core::search::Selection;

/// Callbacks into the embedding viewer.
///
/// All calls are fire-and-forget notifications; the session never reads
/// anything back from the host.
pub trait HostHandler: Send + Sync {
    fn show_dictionary_result(&self, text: &str);
    fn notify_clicked_text(&self, text: &str);
    fn report_search_found(&self, found: bool);
    fn report_message(&self, message: &str);
    /// Highlight and scroll to the current search match.
    fn show_selection(&self, selection: &Selection);
    fn copy_text(&self, text: &str);
    fn save_text(&self, text: &str);
    fn open_declension(&self, term: &str);
}

/// Host that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl HostHandler for NullHost {
    fn show_dictionary_result(&self, _text: &str) {}
    fn notify_clicked_text(&self, _text: &str) {}
    fn report_search_found(&self, _found: bool) {}
    fn report_message(&self, _message: &str) {}
    fn show_selection(&self, _selection: &Selection) {}
    fn copy_text(&self, _text: &str) {}
    fn save_text(&self, _text: &str) {}
    fn open_declension(&self, _term: &str) {}
}

use pali_core::search::{search_plain, search_regex, Cursor, Direction, ResultSet, Selection};
use pali_core::unicode::nfc;
use tracing::{debug, debug_span};

use crate::types::{ActiveSearch, MESSAGE_INVALID_PATTERN, MESSAGE_NOT_FOUND};
use crate::{ViewerError, ViewerSession};

impl ViewerSession {
    /// Plain search over the displayed text. Returns whether anything matched.
    ///
    /// An empty query does nothing. When nothing matches, the previous result
    /// set and cursor stay in place.
    pub fn search(&mut self, query: &str, case_sensitive: bool) -> bool {
        let query = nfc(query);
        if query.is_empty() {
            return false;
        }
        let results = search_plain(&self.displayed, &self.index, &query, case_sensitive);
        self.install_results(results)
    }

    /// Regex search over the displayed text. Returns whether anything matched.
    ///
    /// An invalid pattern is reported to the host and returned as an error;
    /// search state is left as it was.
    pub fn search_regex(
        &mut self,
        pattern: &str,
        whole_word: bool,
        case_sensitive: bool,
    ) -> Result<bool, ViewerError> {
        let pattern = nfc(pattern);
        if pattern.is_empty() {
            return Ok(false);
        }
        let results = match search_regex(
            &self.displayed,
            &self.index,
            &pattern,
            whole_word,
            case_sensitive,
            &self.config.boundaries,
        ) {
            Ok(results) => results,
            Err(e) => {
                debug!(error = %e, "regex rejected");
                self.host.report_message(MESSAGE_INVALID_PATTERN);
                return Err(e.into());
            }
        };
        Ok(self.install_results(results))
    }

    /// Step to the next or previous match, wrapping around, and show it.
    /// Returns `None` when no search is active.
    pub fn find_next(&mut self, direction: Direction) -> Option<Selection> {
        let _span = debug_span!("find_next", ?direction).entered();
        let active = self.search.as_mut()?;
        if !active.cursor.step(&active.results, direction) {
            return None;
        }
        let selection = active.results.selection(&active.cursor)?;
        debug!(result = active.cursor.result, matched = active.cursor.matched);
        self.host.show_selection(&selection);
        Some(selection)
    }

    /// Selection for the current match of the active search.
    pub fn current_selection(&self) -> Option<Selection> {
        let active = self.search.as_ref()?;
        active.results.selection(&active.cursor)
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.search.as_ref().map(|s| &s.results)
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.search.as_ref().map(|s| s.cursor)
    }

    fn install_results(&mut self, results: ResultSet) -> bool {
        if results.is_empty() {
            self.host.report_search_found(false);
            self.host.report_message(MESSAGE_NOT_FOUND);
            return false;
        }
        let count = results.match_count();
        let active = ActiveSearch {
            results,
            cursor: Cursor::default(),
        };
        if let Some(selection) = active.results.selection(&active.cursor) {
            self.host.show_selection(&selection);
        }
        self.search = Some(active);
        self.host.report_search_found(true);
        self.host.report_message(&format!("{count} found"));
        true
    }
}

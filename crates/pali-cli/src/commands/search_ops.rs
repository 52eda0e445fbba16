use std::process;
use std::sync::Arc;

use pali_core::document::{Document, SpanAddress};
use pali_core::search::{Direction, Selection};
use pali_core::settings::settings;
use pali_session::{HostHandler, ViewerConfig, ViewerSession};

use crate::input::read_document;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFlags {
    pub regex: bool,
    pub whole_word: bool,
    pub case_sensitive: bool,
}

/// Prints status messages; selections are collected by the caller.
struct ConsoleHost;

impl HostHandler for ConsoleHost {
    fn show_dictionary_result(&self, _text: &str) {}
    fn notify_clicked_text(&self, _text: &str) {}
    fn report_search_found(&self, _found: bool) {}
    fn report_message(&self, message: &str) {
        eprintln!("{message}");
    }
    fn show_selection(&self, _selection: &Selection) {}
    fn copy_text(&self, _text: &str) {}
    fn save_text(&self, _text: &str) {}
    fn open_declension(&self, _term: &str) {}
}

pub fn search_cmd(file: &str, query: &str, flags: SearchFlags) {
    let (doc, _) = die!(read_document(file), "Error: {}");
    let search_settings = &settings().search;
    let config = ViewerConfig::from_settings(settings());
    let whole_word = flags.whole_word || search_settings.whole_word;
    let case_sensitive = flags.case_sensitive || search_settings.case_sensitive;

    let mut session = ViewerSession::with_config(Arc::new(ConsoleHost), doc, config);
    let found = if flags.regex {
        die!(
            session.search_regex(query, whole_word, case_sensitive),
            "Error: {}"
        )
    } else {
        session.search(query, case_sensitive)
    };
    if !found {
        process::exit(1);
    }

    let total = session.results().map_or(0, |r| r.match_count());
    let mut current = session.current_selection();
    for _ in 0..total {
        if let Some(selection) = &current {
            println!("{}", format_hit(session.document(), selection));
        }
        current = session.find_next(Direction::Forward);
    }
}

fn format_hit(doc: &Document, selection: &Selection) -> String {
    let text = doc
        .span_text(&selection.span)
        .and_then(|t| t.get(selection.range.clone()))
        .unwrap_or_default();
    format!(
        "{}:{}: {}",
        format_address(&selection.span),
        selection.range.start,
        text
    )
}

fn format_address(addr: &SpanAddress) -> String {
    match addr.nested {
        Some(k) => format!("{}.{}.{}", addr.block, addr.child, k),
        None => format!("{}.{}", addr.block, addr.child),
    }
}

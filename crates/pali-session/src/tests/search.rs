use pali_core::document::SpanAddress;
use pali_core::script::Script;
use pali_core::search::{Cursor, Direction, SearchError, Selection};
use pali_core::translit::ConvertOptions;

use super::{make_session, HostEvent};
use crate::{ViewerError, MESSAGE_INVALID_PATTERN, MESSAGE_NOT_FOUND};

fn selection(span: SpanAddress, range: std::ops::Range<usize>) -> Selection {
    Selection { span, range }
}

#[test]
fn test_search_reports_count_and_first_match() {
    let (mut session, host) = make_session();
    assert!(session.search("Dhamm", false));
    assert_eq!(
        host.take(),
        vec![
            HostEvent::Selection(selection(SpanAddress::child(1, 0), 7..12)),
            HostEvent::Found(true),
            HostEvent::Message("2 found".to_string()),
        ]
    );
    assert_eq!(session.cursor(), Some(Cursor::default()));
}

#[test]
fn test_search_not_found_keeps_previous_results() {
    let (mut session, host) = make_session();
    session.search("dhamm", true);
    session.find_next(Direction::Forward);
    host.take();

    assert!(!session.search("nibbāna", true));
    assert_eq!(
        host.take(),
        vec![
            HostEvent::Found(false),
            HostEvent::Message(MESSAGE_NOT_FOUND.to_string()),
        ]
    );
    assert_eq!(session.results().unwrap().match_count(), 2);
    assert_eq!(session.cursor(), Some(Cursor { result: 1, matched: 0 }));
}

#[test]
fn test_empty_query_is_silent() {
    let (mut session, host) = make_session();
    assert!(!session.search("", false));
    assert_eq!(session.search_regex("", true, true), Ok(false));
    assert!(host.take().is_empty());
    assert!(session.results().is_none());
}

#[test]
fn test_query_is_nfc_normalized() {
    let (mut session, _host) = make_session();
    assert!(session.search("Evam\u{0323}", true));
    assert_eq!(
        session.current_selection(),
        Some(selection(SpanAddress::child(0, 1), 2..8))
    );
}

#[test]
fn test_find_next_wraps() {
    let (mut session, host) = make_session();
    session.search("dhamm", true);
    host.take();

    let second = session.find_next(Direction::Forward).unwrap();
    assert_eq!(second, selection(SpanAddress::nested(1, 1, 0), 0..5));
    let first = session.find_next(Direction::Forward).unwrap();
    assert_eq!(first, selection(SpanAddress::child(1, 0), 7..12));
    let back = session.find_next(Direction::Backward).unwrap();
    assert_eq!(back, second);
    assert_eq!(
        host.take(),
        vec![
            HostEvent::Selection(second.clone()),
            HostEvent::Selection(first),
            HostEvent::Selection(second),
        ]
    );
}

#[test]
fn test_find_next_without_search() {
    let (mut session, host) = make_session();
    assert_eq!(session.find_next(Direction::Forward), None);
    assert!(host.take().is_empty());
}

#[test]
fn test_search_regex_whole_word() {
    let (mut session, host) = make_session();
    assert_eq!(session.search_regex("me", true, true), Ok(true));
    assert_eq!(
        host.take(),
        vec![
            HostEvent::Selection(selection(SpanAddress::child(0, 1), 9..11)),
            HostEvent::Found(true),
            HostEvent::Message("1 found".to_string()),
        ]
    );
}

#[test]
fn test_search_regex_invalid_pattern() {
    let (mut session, host) = make_session();
    session.search("dhamm", true);
    host.take();

    let err = session.search_regex("dham(", false, true).unwrap_err();
    assert!(matches!(
        err,
        ViewerError::Search(SearchError::InvalidPattern(_))
    ));
    assert_eq!(
        host.take(),
        vec![HostEvent::Message(MESSAGE_INVALID_PATTERN.to_string())]
    );
    assert_eq!(session.results().unwrap().match_count(), 2);
}

#[test]
fn test_search_runs_on_displayed_text() {
    let (mut session, _host) = make_session();
    session
        .convert(Script::Devanagari, ConvertOptions::default())
        .unwrap();
    assert!(!session.search("dhamm", false));
    // धम्म
    assert!(session.search("\u{0927}\u{092E}\u{094D}\u{092E}", true));
    assert_eq!(session.results().unwrap().match_count(), 2);
}

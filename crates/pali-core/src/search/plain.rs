use tracing::{debug, debug_span};

use super::{MatchLocation, ResultSet, SpanMatches};
use crate::document::{Document, TextIndex};

/// Find every occurrence of `query` in each indexed span.
///
/// Each scan resumes one character after the previous match start, so
/// overlapping occurrences are all reported.
pub fn search_plain(
    doc: &Document,
    index: &TextIndex,
    query: &str,
    case_sensitive: bool,
) -> ResultSet {
    let _span = debug_span!("search_plain", query, case_sensitive).entered();
    if query.is_empty() {
        return ResultSet::default();
    }
    let folded_query = (!case_sensitive).then(|| fold(query));

    let entries = index
        .texts(doc)
        .map(|(span, text)| {
            let matches: Vec<MatchLocation> = match &folded_query {
                None => scan(text, query)
                    .map(|offset| MatchLocation::Plain {
                        offset,
                        len: query.len(),
                    })
                    .collect(),
                Some(q) => {
                    let folded = FoldedText::new(text);
                    scan(&folded.text, q)
                        .map(|at| {
                            let offset = folded.start(at);
                            let end = folded.end(at + q.len());
                            MatchLocation::Plain {
                                offset,
                                len: end - offset,
                            }
                        })
                        .collect()
                }
            };
            SpanMatches { span, matches }
        })
        .collect();

    let results = ResultSet::new(entries);
    debug!(spans = results.len(), matches = results.match_count());
    results
}

/// Start offsets of `needle` in `haystack`, overlapping included.
fn scan<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        let found = from + haystack.get(from..)?.find(needle)?;
        from = found + haystack[found..].chars().next().map_or(1, char::len_utf8);
        Some(found)
    })
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercased text with maps back to byte offsets in the source, since
/// lowercasing may change the UTF-8 length of some characters.
///
/// A folded offset inside a multi-char expansion (`İ` → `i̇`) maps to the
/// start of its source character when it opens a match and to the end when
/// it closes one.
struct FoldedText {
    text: String,
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl FoldedText {
    fn new(src: &str) -> Self {
        let mut text = String::with_capacity(src.len());
        let mut starts = Vec::with_capacity(src.len() + 1);
        let mut ends = Vec::with_capacity(src.len() + 1);
        for (at, c) in src.char_indices() {
            text.extend(c.to_lowercase());
            starts.resize(text.len(), at);
            ends.push(at);
            ends.resize(text.len(), at + c.len_utf8());
        }
        starts.push(src.len());
        ends.push(src.len());
        Self { text, starts, ends }
    }

    fn start(&self, folded_at: usize) -> usize {
        self.starts[folded_at.min(self.starts.len() - 1)]
    }

    fn end(&self, folded_at: usize) -> usize {
        self.ends[folded_at.min(self.ends.len() - 1)]
    }
}

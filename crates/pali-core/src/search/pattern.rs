use regex::{Regex, RegexBuilder};
use tracing::{debug, debug_span};

use super::{MatchLocation, ResultSet, SearchError, SpanMatches};
use crate::document::{Document, TextIndex};

pub const DEFAULT_LEADING_BOUNDARY: &str = ".[(?!‘,;:-";
pub const DEFAULT_TRAILING_BOUNDARY: &str = ".])?!’,;:-";

/// The wrapper's only capturing group opens first, so user groups come after it.
const HIT_GROUP: usize = 1;

/// Characters that delimit a whole word. Whitespace always counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    pub leading: String,
    pub trailing: String,
}

impl Default for Boundaries {
    fn default() -> Self {
        Self {
            leading: DEFAULT_LEADING_BOUNDARY.to_string(),
            trailing: DEFAULT_TRAILING_BOUNDARY.to_string(),
        }
    }
}

impl Boundaries {
    fn class(chars: &str) -> String {
        let mut class = String::from(r"[\s");
        for c in chars.chars() {
            class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
        class.push(']');
        class
    }

    /// `pattern` flanked by a boundary character or the string edge on both sides.
    fn wrap(&self, pattern: &str) -> String {
        format!(
            "(?:^|{})((?:{pattern}))(?:{}|$)",
            Self::class(&self.leading),
            Self::class(&self.trailing),
        )
    }
}

/// Regex search over each indexed span.
///
/// Free regex search is always case-sensitive; `case_sensitive` only applies
/// in whole-word mode. Empty matches are not recorded.
pub fn search_regex(
    doc: &Document,
    index: &TextIndex,
    pattern: &str,
    whole_word: bool,
    case_sensitive: bool,
    boundaries: &Boundaries,
) -> Result<ResultSet, SearchError> {
    let _span = debug_span!("search_regex", pattern, whole_word, case_sensitive).entered();

    // Validate the bare pattern so a stray `)` cannot pair with the wrapper.
    let free = Regex::new(pattern).map_err(|e| SearchError::InvalidPattern(e.to_string()))?;

    let entries = if whole_word {
        let re = RegexBuilder::new(&boundaries.wrap(pattern))
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| SearchError::InvalidPattern(e.to_string()))?;
        index
            .texts(doc)
            .map(|(span, text)| SpanMatches {
                span,
                matches: whole_word_matches(&re, text),
            })
            .collect()
    } else {
        index
            .texts(doc)
            .map(|(span, text)| SpanMatches {
                span,
                matches: free
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| MatchLocation::Regex {
                        offset: m.start(),
                        text: m.as_str().to_string(),
                    })
                    .collect(),
            })
            .collect()
    };

    let results = ResultSet::new(entries);
    debug!(spans = results.len(), matches = results.match_count());
    Ok(results)
}

/// Each search resumes at the end of the previous hit rather than past its
/// trailing boundary, so a boundary shared by two words serves both.
fn whole_word_matches(re: &Regex, text: &str) -> Vec<MatchLocation> {
    let mut matches = Vec::new();
    let mut at = 0;
    while at <= text.len() {
        let Some(hit) = re.captures_at(text, at).and_then(|caps| caps.get(HIT_GROUP)) else {
            break;
        };
        if !hit.is_empty() {
            matches.push(MatchLocation::Regex {
                offset: hit.start(),
                text: hit.as_str().to_string(),
            });
        }
        at = if hit.end() > at {
            hit.end()
        } else {
            at + text[at..].chars().next().map_or(1, char::len_utf8)
        };
    }
    matches
}

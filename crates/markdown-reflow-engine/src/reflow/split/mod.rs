//! The four splitters, leaf to root.
//!
//! Every splitter has the same shape: one left-to-right scan over a
//! fragment, emitting recognised constructs as final tokens and the text
//! between them as whitespace-trimmed [`Segment::Pending`] fragments.
//!
//! [`Segment::Pending`]: super::types::Segment::Pending

pub mod code_span;
pub mod hard_break;
pub mod link;
pub mod words;

use super::{cursor::Cursor, kinds::is_trailing_punct, types::Token};

/// Signature shared by all splitters.
pub type Splitter = for<'a> fn(&'a str) -> Vec<Token<'a>>;

/// True if the character immediately before byte `at` is whitespace.
pub(crate) fn preceded_by_space(s: &str, at: usize) -> bool {
    s.get(..at)
        .and_then(|head| head.chars().next_back())
        .is_some_and(char::is_whitespace)
}

/// Emits `s[start..end]` as a pending fragment with surrounding whitespace
/// trimmed. Whitespace-only regions emit nothing.
pub(crate) fn push_pending<'a>(out: &mut Vec<Token<'a>>, s: &'a str, start: usize, end: usize) {
    let region = &s[start..end];
    let trimmed = region.trim_start();
    let text = trimmed.trim_end();
    if text.is_empty() {
        return;
    }
    let at = start + (region.len() - trimmed.len());
    out.push(Token::pending(text, preceded_by_space(s, at)));
}

/// Glues trailing punctuation (`` `x`. `` or `[a](b),`) onto the construct
/// that just ended at the cursor.
pub(crate) fn absorb_trailing(cur: &mut Cursor<'_>) {
    cur.eat_while(is_trailing_punct);
}

/// Memoised "next `c` at or after byte `from`" over one fragment.
///
/// Consecutive lookups whose `from` falls inside the span covered by the
/// previous search reuse its answer, so repeated failed matches cost O(1)
/// and the total scanning stays linear in the fragment length.
pub(crate) struct NextChar {
    c: char,
    from: usize,
    found: Option<usize>,
}

impl NextChar {
    pub(crate) fn new(c: char) -> Self {
        Self {
            c,
            from: usize::MAX,
            found: None,
        }
    }

    pub(crate) fn find(&mut self, s: &str, from: usize) -> Option<usize> {
        let covered = from >= self.from && self.found.is_none_or(|f| from <= f);
        if !covered {
            self.from = from;
            self.found = s.get(from..).and_then(|rest| rest.find(self.c)).map(|o| from + o);
        }
        self.found
    }
}

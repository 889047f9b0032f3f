use crate::reflow::{cursor::Cursor, kinds::CodeSpan, types::Token};

use super::{absorb_trailing, preceded_by_space, push_pending};

/// Isolates backtick code spans as atomic tokens.
///
/// An opening run of `k` backticks is closed by the next run of exactly `k`
/// backticks; runs of other lengths in between are content. An opener with
/// no closer is literal text and stays in the surrounding plain fragment.
pub fn split(s: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            let start = cur.pos();
            if let Some(end) = try_code_span(&mut cur) {
                push_pending(&mut out, s, text_start, start);
                out.push(Token::atomic(&s[start..end], preceded_by_space(s, start)));
                text_start = end;
            }
            // On failure the cursor has moved past the whole opening run.
            continue;
        }
        cur.bump();
    }

    push_pending(&mut out, s, text_start, s.len());
    out
}

/// Consumes a code span at the cursor, returning its end offset (after any
/// absorbed punctuation). Returns `None` with the cursor past the opening
/// run if no closing fence of the same length exists.
///
/// A failed opener proves no later run has its length, so a fragment sees at
/// most one failed scan per distinct fence length.
fn try_code_span(cur: &mut Cursor<'_>) -> Option<usize> {
    let fence = cur.eat_run(CodeSpan::TICK);
    let mut scan = cur.clone();
    while scan.skip_to(CodeSpan::TICK) {
        if scan.eat_run(CodeSpan::TICK) == fence {
            absorb_trailing(&mut scan);
            *cur = scan;
            return Some(cur.pos());
        }
    }
    None
}

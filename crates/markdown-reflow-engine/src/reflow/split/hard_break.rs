use crate::reflow::{cursor::Cursor, kinds::HardBreak, types::Token};

use super::{preceded_by_space, push_pending};

/// Isolates `<br>`, `<br/>` and `<br />` tags (any ASCII case) as
/// forced-break tokens.
pub fn split(s: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if cur.peek() == Some(HardBreak::OPEN_CHAR) {
            let start = cur.pos();
            if let Some(end) = try_hard_break(&mut cur) {
                push_pending(&mut out, s, text_start, start);
                out.push(Token::hard_break(&s[start..end], preceded_by_space(s, start)));
                text_start = end;
                continue;
            }
        }
        cur.bump();
    }

    push_pending(&mut out, s, text_start, s.len());
    out
}

/// On failure, cursor position is restored.
fn try_hard_break(cur: &mut Cursor<'_>) -> Option<usize> {
    if !cur.starts_with_ignore_case(HardBreak::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(HardBreak::OPEN.len());
    if let Some(slash) = HardBreak::SLASHES.iter().find(|s| cur.starts_with(s)) {
        cur.bump_n(slash.len());
    }
    if cur.peek() != Some(HardBreak::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump();
    Some(cur.pos())
}

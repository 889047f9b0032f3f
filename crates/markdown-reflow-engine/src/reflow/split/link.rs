use crate::reflow::{cursor::Cursor, kinds::Link, types::Token};

use super::{NextChar, absorb_trailing, preceded_by_space, push_pending};

/// Isolates `[label](dest)` and `[label][ref]` links.
///
/// A match yields the opener (`[label](`), still pending because a long
/// label may need wrapping, followed by the destination (`dest)`) as an
/// atomic token with no leading space. Whitespace between the opener and
/// the destination is dropped, so a destination an earlier wrap pushed onto
/// its own line is glued back on. Brackets that don't form a complete link
/// stay in the surrounding plain fragment.
pub fn split(s: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(s);
    let mut closers = Closers::new();
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if cur.peek() == Some(Link::LABEL_OPEN) {
            let start = cur.pos();
            if let Some(m) = try_link(s, start, &mut closers) {
                push_pending(&mut out, s, text_start, start);
                out.push(Token::pending(
                    &s[start..m.opener_end],
                    preceded_by_space(s, start),
                ));
                out.push(Token::atomic(&s[m.dest_start..m.end], false));
                text_start = m.end;
                cur.seek(m.end);
                continue;
            }
        }
        cur.bump();
    }

    push_pending(&mut out, s, text_start, s.len());
    out
}

/// Byte offsets of a matched link.
struct LinkMatch {
    /// End of `[label](`.
    opener_end: usize,
    /// First non-whitespace byte of the destination.
    dest_start: usize,
    /// End of the destination, after absorbed punctuation.
    end: usize,
}

/// Closer lookups shared by every `[` in one fragment.
///
/// Failed candidates that start before the same `]` all resolve to the same
/// opener and destination, so each search is answered once.
struct Closers {
    label: NextChar,
    inline: NextChar,
    reference: NextChar,
    /// Last `(opener_end, dest_start)` pair.
    gap: Option<(usize, usize)>,
}

impl Closers {
    fn new() -> Self {
        Self {
            label: NextChar::new(Link::LABEL_CLOSE),
            inline: NextChar::new(Link::INLINE_CLOSE),
            reference: NextChar::new(Link::REF_CLOSE),
            gap: None,
        }
    }

    fn destination(&mut self, close: char) -> &mut NextChar {
        if close == Link::INLINE_CLOSE {
            &mut self.inline
        } else {
            &mut self.reference
        }
    }

    fn skip_gap(&mut self, s: &str, opener_end: usize) -> usize {
        if let Some((at, dest_start)) = self.gap
            && at == opener_end
        {
            return dest_start;
        }
        let mut cur = Cursor::at(s, opener_end);
        cur.eat_while(char::is_whitespace);
        self.gap = Some((opener_end, cur.pos()));
        cur.pos()
    }
}

/// Attempts to match a link whose `[` sits at byte `start`.
fn try_link(s: &str, start: usize, closers: &mut Closers) -> Option<LinkMatch> {
    // No nesting: the first `]` ends the label.
    let label_close = closers.label.find(s, start + 1)?;
    let mut cur = Cursor::at(s, label_close);
    cur.bump(); // ]
    let close = cur.peek().and_then(Link::destination_close)?;
    cur.bump(); // ( or [
    let opener_end = cur.pos();

    let dest_start = closers.skip_gap(s, opener_end);
    let dest_close = closers.destination(close).find(s, dest_start)?;
    cur.seek(dest_close);
    cur.bump();
    absorb_trailing(&mut cur);
    Some(LinkMatch {
        opener_end,
        dest_start,
        end: cur.pos(),
    })
}

//! # Paragraph Reflow
//!
//! Re-wraps one paragraph of Markdown prose to a column budget without
//! breaking inline constructs apart.
//!
//! ## Architecture
//!
//! A fixed pipeline of splitters turns the paragraph into a flat token
//! stream, which the line wrapper then packs greedily:
//!
//! 1. **`split::code_span`**: backtick code spans (raw zones)
//! 2. **`split::link`**: `[label](dest)` / `[label][ref]`
//! 3. **`split::hard_break`**: `<br>`-family tags
//! 4. **`split::words`**: whitespace-separated words
//!
//! Each splitter emits final tokens for what it recognises and
//! [`Segment::Pending`] fragments for everything else. [`tokenize`] feeds
//! each pending fragment to the next stage; this is the only recursion.
//!
//! ## Precedence
//!
//! Code spans come first: `` `[a](b)` `` is one code span, not a link, and
//! `` `<br>` `` is not a line break.

pub mod cursor;
pub mod kinds;
pub mod split;
pub mod types;
pub mod wrapper;

pub use types::{Segment, Token, columns, reconstruct};
pub use wrapper::wrap_tokens;

use crate::error::WrapError;
use split::{Splitter, code_span, hard_break, link, words};

/// The splitters in precedence order, leaf to root.
const PIPELINE: [Splitter; 4] = [code_span::split, link::split, hard_break::split, words::split];

/// Splits a paragraph into its final token stream.
///
/// No returned token is [`Segment::Pending`].
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut out = vec![];
    expand(&PIPELINE, text, false, &mut out);
    log::trace!("tokenized {} bytes into {} tokens", text.len(), out.len());
    out
}

/// Runs `stages[0]` over `text` and recurses into the remaining stages for
/// every pending fragment. The first token inherits `leading_space` from
/// the fragment it came from.
fn expand<'a>(stages: &[Splitter], text: &'a str, leading_space: bool, out: &mut Vec<Token<'a>>) {
    let Some((split, rest)) = stages.split_first() else {
        out.push(Token::word(text, leading_space));
        return;
    };
    for (i, mut token) in split(text).into_iter().enumerate() {
        if i == 0 {
            token.leading_space = leading_space;
        }
        match token.segment {
            Segment::Pending(fragment) => expand(rest, fragment, token.leading_space, out),
            _ => out.push(token),
        }
    }
}

/// Re-wraps one paragraph to at most `width` columns per line.
///
/// Lines are joined with `\n`. A single token wider than `width` occupies a
/// line of its own. Empty or blank input yields an empty string.
pub fn wrap(text: &str, width: usize) -> Result<String, WrapError> {
    if width == 0 {
        return Err(WrapError::InvalidWidth { width });
    }
    wrap_tokens(&tokenize(text), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn tokenize_flattens_all_stages_in_order() {
        let tokens = tokenize("Use `x` or [the docs](http://d.io). Then<br>go");
        let (texts, leading, splittable) = columns(&tokens);
        assert_eq!(
            texts,
            vec!["Use", "`x`", "or", "[the", "docs](", "http://d.io).", "Then", "<br>", "go"]
        );
        assert_eq!(leading, vec![F, T, T, T, T, F, T, F, F]);
        assert!(splittable.iter().all(|s| !s));
    }

    #[test]
    fn code_span_suppresses_links_and_breaks() {
        let tokens = tokenize("`[a](b) <br>` x");
        assert_eq!(
            tokens,
            vec![Token::atomic("`[a](b) <br>`", false), Token::word("x", true)]
        );
    }

    #[test]
    fn break_inside_link_label_is_still_a_break() {
        let tokens = tokenize("[a<br>b](c)");
        assert_eq!(
            tokens,
            vec![
                Token::word("[a", false),
                Token::hard_break("<br>", false),
                Token::word("b](", false),
                Token::atomic("c)", false),
            ]
        );
    }

    #[test]
    fn tokenize_reconstructs_single_spaced_input() {
        let input = "abc ``abc ``` abc[0][0] ``abc <br /><br /> [url](http://example.com) end.";
        assert_eq!(reconstruct(&tokenize(input)), input);
    }

    #[test]
    fn tokenize_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t").is_empty());
    }

    #[test]
    fn wrap_rejects_zero_width() {
        assert_eq!(wrap("a b", 0), Err(WrapError::InvalidWidth { width: 0 }));
    }

    #[test]
    fn wrap_all_constructs() {
        let input = concat!(
            "abc abc abc abc abc abc abc abc abc ``abc ``` abc[0][0] ``abc abc abc abc ",
            "<br /><br /> abc abc [url](http://example.com) ",
            "abc[url][http://example.com]abc[url][URL][url][URL]  <br/>abc<br/>"
        );
        let expected = concat!(
            "abc abc abc abc abc abc abc abc abc\n",
            "``abc ``` abc[0][0] ``abc abc abc abc <br />\n",
            "<br />\n",
            "abc abc [url](http://example.com) abc[url][\n",
            "http://example.com]abc[url][URL][url][URL] <br/>\n",
            "abc<br/>"
        );
        assert_eq!(wrap(input, 50).unwrap(), expected);
    }

    #[test]
    fn wrap_collapses_existing_line_breaks() {
        let input = "one two\nthree   four\n\tfive";
        assert_eq!(wrap(input, 80).unwrap(), "one two three four five");
    }

    #[test]
    fn wrap_empty_input() {
        assert_eq!(wrap("", 10).unwrap(), "");
        assert_eq!(wrap("   ", 10).unwrap(), "");
    }
}

/// What a token's text is, and whether a later pipeline stage may still
/// decompose it.
///
/// All variants borrow a contiguous, non-empty slice of the paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text awaiting the next splitter.
    Pending(&'a str),
    /// A single whitespace-free word produced by the final stage.
    Word(&'a str),
    /// A code span or a link destination/reference. Never split.
    Atomic(&'a str),
    /// A `<br>`-family tag. Forces a line break after it.
    HardBreak(&'a str),
}

/// One unit of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub segment: Segment<'a>,
    /// Whitespace preceded this token in the source. A single space is
    /// emitted before it when it shares a line with the previous token.
    pub leading_space: bool,
}

impl<'a> Token<'a> {
    pub fn pending(text: &'a str, leading_space: bool) -> Self {
        Self {
            segment: Segment::Pending(text),
            leading_space,
        }
    }

    pub fn word(text: &'a str, leading_space: bool) -> Self {
        Self {
            segment: Segment::Word(text),
            leading_space,
        }
    }

    pub fn atomic(text: &'a str, leading_space: bool) -> Self {
        Self {
            segment: Segment::Atomic(text),
            leading_space,
        }
    }

    pub fn hard_break(text: &'a str, leading_space: bool) -> Self {
        Self {
            segment: Segment::HardBreak(text),
            leading_space,
        }
    }

    pub fn text(&self) -> &'a str {
        match self.segment {
            Segment::Pending(t) | Segment::Word(t) | Segment::Atomic(t) | Segment::HardBreak(t) => {
                t
            }
        }
    }

    pub fn is_splittable(&self) -> bool {
        matches!(self.segment, Segment::Pending(_))
    }

    pub fn is_forced_break(&self) -> bool {
        matches!(self.segment, Segment::HardBreak(_))
    }
}

/// Unzips tokens into index-aligned `(texts, leading_spaces, splittable)`.
pub fn columns<'a>(tokens: &[Token<'a>]) -> (Vec<&'a str>, Vec<bool>, Vec<bool>) {
    let mut texts = Vec::with_capacity(tokens.len());
    let mut leading = Vec::with_capacity(tokens.len());
    let mut splittable = Vec::with_capacity(tokens.len());
    for t in tokens {
        texts.push(t.text());
        leading.push(t.leading_space);
        splittable.push(t.is_splittable());
    }
    (texts, leading, splittable)
}

/// Joins tokens back into a single line, one space wherever
/// `leading_space` is set.
pub fn reconstruct(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for (i, t) in tokens.iter().enumerate() {
        if i > 0 && t.leading_space {
            out.push(' ');
        }
        out.push_str(t.text());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_is_splittable() {
        assert!(Token::pending("a", false).is_splittable());
        assert!(!Token::word("a", false).is_splittable());
        assert!(!Token::atomic("`a`", false).is_splittable());
        assert!(!Token::hard_break("<br>", false).is_splittable());
    }

    #[test]
    fn only_hard_break_forces_a_break() {
        assert!(Token::hard_break("<br/>", true).is_forced_break());
        assert!(!Token::atomic("url]", false).is_forced_break());
    }

    #[test]
    fn reconstruct_skips_space_before_first_token() {
        let tokens = [
            Token::word("a", true),
            Token::atomic("`b`.", true),
            Token::word("c", false),
        ];
        assert_eq!(reconstruct(&tokens), "a `b`.c");
    }

    #[test]
    fn columns_are_index_aligned() {
        let tokens = [Token::pending("[a](", true), Token::atomic("b)", false)];
        let (texts, leading, splittable) = columns(&tokens);
        assert_eq!(texts, vec!["[a](", "b)"]);
        assert_eq!(leading, vec![true, false]);
        assert_eq!(splittable, vec![true, false]);
    }
}

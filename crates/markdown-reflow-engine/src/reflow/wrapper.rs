use crate::error::WrapError;

use super::types::Token;

/// The line currently being filled.
#[derive(Default)]
struct Line {
    text: String,
    /// Width in chars; `text.len()` counts bytes.
    width: usize,
}

impl Line {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Width this token adds if appended. Line starts never get a space.
    fn added_width(&self, token: &Token<'_>, token_width: usize) -> usize {
        if !self.is_empty() && token.leading_space {
            token_width + 1
        } else {
            token_width
        }
    }

    fn push(&mut self, token: &Token<'_>, token_width: usize) {
        if !self.is_empty() && token.leading_space {
            self.text.push(' ');
            self.width += 1;
        }
        self.text.push_str(token.text());
        self.width += token_width;
    }
}

/// Greedily packs `tokens` into lines of at most `width` columns.
///
/// A token that fits is appended to the current line; otherwise the line is
/// closed and the token starts the next one. Tokens are never split, so a
/// token wider than `width` sits alone on an overflowing line. A hard-break
/// token closes its line unless it is the last token.
pub fn wrap_tokens(tokens: &[Token<'_>], width: usize) -> Result<String, WrapError> {
    if width == 0 {
        return Err(WrapError::InvalidWidth { width });
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = Line::default();

    for (i, token) in tokens.iter().enumerate() {
        let token_width = token.text().chars().count();
        if !line.is_empty() && line.width + line.added_width(token, token_width) > width {
            lines.push(std::mem::take(&mut line).text);
        }
        line.push(token, token_width);

        if token.is_forced_break() && i + 1 < tokens.len() {
            lines.push(std::mem::take(&mut line).text);
        }
    }
    if !line.is_empty() {
        lines.push(line.text);
    }

    Ok(lines.join("\n"))
}

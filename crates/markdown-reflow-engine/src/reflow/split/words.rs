use crate::reflow::types::Token;

/// Final stage: one word token per whitespace-separated run.
pub fn split(s: &str) -> Vec<Token<'_>> {
    s.split_whitespace()
        .enumerate()
        .map(|(i, word)| Token::word(word, i > 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflow::types::columns;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_spaces() {
        let input = ["a"; 10].join(" ");
        let tokens = split(&input);
        let (texts, leading, splittable) = columns(&tokens);
        assert_eq!(texts, vec!["a"; 10]);
        let mut expected_leading = vec![true; 10];
        expected_leading[0] = false;
        assert_eq!(leading, expected_leading);
        assert_eq!(splittable, vec![false; 10]);
    }

    #[test]
    fn collapses_mixed_whitespace_runs() {
        let tokens = split("a \t b\n\nc");
        assert_eq!(columns(&tokens).0, vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_input_has_no_words() {
        assert!(split(" \n ").is_empty());
    }
}

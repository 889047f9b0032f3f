//! Whole-document reflow: find the paragraphs, rewrap each, copy the rest.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::error::WrapError;
use crate::reflow::wrap;

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES
}

/// Re-wraps every top-level paragraph of `source` to `width` columns.
///
/// Bytes outside those paragraphs are copied unchanged. A paragraph is left
/// as written when it sits inside a list item, block quote, footnote or
/// table, when it contains a CommonMark hard line break, or when the
/// rewrapped text would no longer parse as a single paragraph.
pub fn reflow_document(source: &str, width: usize) -> Result<String, WrapError> {
    if width == 0 {
        return Err(WrapError::InvalidWidth { width });
    }

    let mut containers: Vec<Range<usize>> = vec![];
    let mut paragraphs: Vec<Range<usize>> = vec![];
    let mut hard_breaks: Vec<usize> = vec![];

    for (event, range) in Parser::new_ext(source, parser_options()).into_offset_iter() {
        match event {
            Event::Start(Tag::Paragraph) => paragraphs.push(range),
            Event::Start(
                Tag::Item | Tag::BlockQuote(_) | Tag::FootnoteDefinition(_) | Tag::Table(_),
            ) => containers.push(range),
            Event::HardBreak => hard_breaks.push(range.start),
            _ => {}
        }
    }

    let mut out = String::with_capacity(source.len());
    let mut copied = 0;

    for para in paragraphs {
        if containers
            .iter()
            .any(|c| c.start <= para.start && para.end <= c.end)
        {
            log::debug!("keeping nested paragraph at {para:?}");
            continue;
        }
        if hard_breaks.iter().any(|b| para.contains(b)) {
            log::debug!("keeping paragraph with hard line break at {para:?}");
            continue;
        }

        let raw = &source[para.clone()];
        let body = raw.trim_end();
        let wrapped = wrap(body, width)?;
        if !parses_as_single_paragraph(&wrapped) {
            log::debug!("keeping paragraph at {para:?}: rewrapping would change its structure");
            continue;
        }

        out.push_str(&source[copied..para.start]);
        out.push_str(&wrapped);
        out.push_str(&raw[body.len()..]);
        copied = para.end;
    }
    out.push_str(&source[copied..]);

    Ok(out)
}

/// A wrapped line may begin with `- `, `# ` or similar and turn into a
/// different block.
fn parses_as_single_paragraph(text: &str) -> bool {
    let mut paragraphs = 0;
    for event in Parser::new_ext(text, parser_options()) {
        match event {
            Event::Start(Tag::Paragraph) => paragraphs += 1,
            Event::Start(
                Tag::Heading { .. }
                | Tag::List(_)
                | Tag::BlockQuote(_)
                | Tag::CodeBlock(_)
                | Tag::HtmlBlock
                | Tag::Table(_)
                | Tag::FootnoteDefinition(_),
            )
            | Event::Rule => return false,
            _ => {}
        }
    }
    paragraphs == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewraps_top_level_paragraphs_only() {
        let source = "# A heading that is rather long\n\nalpha beta gamma delta\nepsilon\n\n- list item alpha beta gamma delta\n";
        let expected = "# A heading that is rather long\n\nalpha beta\ngamma delta\nepsilon\n\n- list item alpha beta gamma delta\n";
        assert_eq!(reflow_document(source, 12).unwrap(), expected);
    }

    #[test]
    fn joins_short_lines() {
        let source = "one\ntwo\nthree\n";
        assert_eq!(reflow_document(source, 80).unwrap(), "one two three\n");
    }

    #[test]
    fn code_blocks_are_untouched() {
        let source = "```\nsome code that is long\n```\n\nfour five six\n";
        assert_eq!(
            reflow_document(source, 9).unwrap(),
            "```\nsome code that is long\n```\n\nfour five\nsix\n"
        );
    }

    #[test]
    fn block_quotes_are_untouched() {
        let source = "> quoted words\n> more quoted words\n";
        assert_eq!(reflow_document(source, 5).unwrap(), source);
    }

    #[test]
    fn paragraph_with_hard_line_break_is_untouched() {
        let source = "first line  \nsecond line\n";
        assert_eq!(reflow_document(source, 80).unwrap(), source);
    }

    #[test]
    fn paragraph_that_would_become_a_list_is_untouched() {
        let source = "aaaa - bbbb\n";
        assert_eq!(reflow_document(source, 5).unwrap(), source);
    }

    #[test]
    fn br_tags_force_lines() {
        let source = "a<br>b c\n";
        assert_eq!(reflow_document(source, 80).unwrap(), "a<br>\nb c\n");
    }

    #[test]
    fn titled_link_split_from_its_label_is_stable() {
        let source = "see the docs [guide](http://x.io \"The Guide\") now\n";
        let expected = "see the docs\n[guide](\nhttp://x.io \"The Guide\")\nnow\n";
        let once = reflow_document(source, 20).unwrap();
        assert_eq!(once, expected);
        assert_eq!(reflow_document(&once, 20).unwrap(), once);
    }

    #[test]
    fn empty_document() {
        assert_eq!(reflow_document("", 80).unwrap(), "");
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            reflow_document("text", 0),
            Err(WrapError::InvalidWidth { width: 0 })
        );
    }
}

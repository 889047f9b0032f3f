//! # Inline Kinds
//!
//! Each construct the splitters recognise owns its delimiter constants here.
//! Splitter code refers to these constants; it never hardcodes `` ` ``,
//! `[` or `<br`.
//!
//! - **`CodeSpan`**: `TICK` - fences of matching length delimit a raw zone
//! - **`Link`**: `LABEL_OPEN`/`LABEL_CLOSE` plus the inline (`(`..`)`) and
//!   reference (`[`..`]`) destination delimiters
//! - **`HardBreak`**: the case-insensitive `<br`, `/`, ` /`, `>` pieces

pub mod code_span;
pub mod hard_break;
pub mod link;

pub use code_span::CodeSpan;
pub use hard_break::HardBreak;
pub use link::Link;

/// Characters that may follow an atomic construct and are glued onto it.
///
/// Letters and digits are never absorbed, nor is anything that opens
/// another construct.
pub fn is_trailing_punct(c: char) -> bool {
    !c.is_whitespace()
        && !c.is_alphanumeric()
        && c != CodeSpan::TICK
        && c != Link::LABEL_OPEN
        && c != HardBreak::OPEN_CHAR
}

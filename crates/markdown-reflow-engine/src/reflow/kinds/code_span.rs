/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: backticks, brackets and tags inside them are
/// literal text and no later splitter ever sees them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}

/// Link inline type: `[label](dest)` or `[label][ref]`.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: char = '[';
    pub const LABEL_CLOSE: char = ']';
    pub const INLINE_OPEN: char = '(';
    pub const INLINE_CLOSE: char = ')';
    pub const REF_OPEN: char = '[';
    pub const REF_CLOSE: char = ']';

    /// The character closing the destination opened by `open`, if `open`
    /// starts one.
    pub fn destination_close(open: char) -> Option<char> {
        match open {
            Self::INLINE_OPEN => Some(Self::INLINE_CLOSE),
            Self::REF_OPEN => Some(Self::REF_CLOSE),
            _ => None,
        }
    }
}

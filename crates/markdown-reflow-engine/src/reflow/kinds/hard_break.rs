/// HTML line-break tag: `<br>`, `<br/>` or `<br />`, any ASCII case.
pub struct HardBreak;

impl HardBreak {
    pub const OPEN_CHAR: char = '<';
    pub const OPEN: &'static str = "<br";
    /// Self-closing variants, longest first.
    pub const SLASHES: [&'static str; 2] = [" /", "/"];
    pub const CLOSE: char = '>';
}

/// A cursor for character-by-character scanning of a paragraph fragment.
///
/// Positions are byte offsets into `s` and always sit on a `char` boundary,
/// so any `s[a..b]` taken between two cursor positions is a valid slice.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The fragment being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Creates a cursor at byte `i` of `s`. `i` must be a char boundary.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Like [`Cursor::starts_with`], ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, pat: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..pat.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pat.as_bytes()))
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers only pass lengths of ASCII patterns
    /// they have just matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to byte `i`, which must be a char boundary.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }

    /// Consumes a maximal run of `c`, returning its length in characters.
    pub fn eat_run(&mut self, c: char) -> usize {
        let mut n = 0;
        while self.peek() == Some(c) {
            self.bump();
            n += 1;
        }
        n
    }

    /// Consumes characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Advances to the next occurrence of `c`, leaving the cursor on it.
    ///
    /// Returns false (with the cursor at eof) if `c` does not occur again.
    pub fn skip_to(&mut self, c: char) -> bool {
        match self.rest().find(c) {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }

    fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }
}

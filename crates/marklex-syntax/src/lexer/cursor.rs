/// A cursor for character-by-character scanning of a single line.
///
/// Positions are byte offsets into the line, always on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned, without its terminator.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of line.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unscanned remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.i += ch.len_utf8();
        Some(ch)
    }

    /// Advances by `n` bytes. Caller must land on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Slice of the line between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}

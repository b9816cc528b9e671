use crate::lexer::Segment;

/// The characters immediately around a candidate marker.
///
/// `left` is the last char of the previous segment, `right` the first char
/// of the next one. Either is absent at the edges of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanks {
    pub left: Option<char>,
    pub right: Option<char>,
}

impl Flanks {
    pub fn around(segments: &[Segment<'_>], index: usize) -> Self {
        let left = index
            .checked_sub(1)
            .and_then(|i| segments.get(i))
            .and_then(Segment::last_char);
        let right = segments.get(index + 1).and_then(Segment::first_char);
        Self { left, right }
    }

    /// Word characters on both sides: the marker splits a word.
    pub fn is_intraword(&self) -> bool {
        self.left.is_some_and(is_word_char) && self.right.is_some_and(is_word_char)
    }

    pub fn can_open(&self) -> bool {
        !self.is_intraword() && self.right.is_some_and(|ch| !ch.is_whitespace())
    }

    pub fn can_close(&self) -> bool {
        !self.is_intraword() && self.left.is_some_and(|ch| !ch.is_whitespace())
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

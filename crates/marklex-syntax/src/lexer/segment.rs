/// A raw, not-yet-validated piece of a line.
///
/// Segments borrow from the source text; concatenating the segments of a
/// [`Line`] reproduces that line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of ordinary characters, a lone escape marker, or the line terminator.
    Literal(&'a str),
    /// Text matching a block or paired catalog marker.
    Candidate(&'a str),
    /// The single character neutralized by a preceding escape marker.
    EscapedLiteral(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Literal(text) | Segment::Candidate(text) | Segment::EscapedLiteral(text) => {
                text
            }
        }
    }

    pub fn first_char(&self) -> Option<char> {
        self.text().chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.text().chars().next_back()
    }

    /// True when the segment holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text().chars().all(char::is_whitespace)
    }
}

/// The segments of one source line, terminator included.
///
/// Lines are the unit of validation: no delimiter pairs across them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line<'a> {
    pub segments: Vec<Segment<'a>>,
}

impl<'a> Line<'a> {
    pub fn new(segments: Vec<Segment<'a>>) -> Self {
        Self { segments }
    }

    /// Reassembles the source text of the line.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

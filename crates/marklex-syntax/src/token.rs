use std::fmt;

/// A validated token. The kind is decided once by the validator and never
/// changes afterwards.
///
/// Every variant carries the exact source text it covers, so concatenating
/// [`Token::text`] over a token stream reproduces the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// Literal content, rendered verbatim.
    Text(&'a str),
    /// A paired marker with a matching [`Token::CloseDelimiter`] later on the same line.
    OpenDelimiter(&'a str),
    /// A paired marker closing the innermost open delimiter of the same value.
    CloseDelimiter(&'a str),
    /// A marker leading its line.
    BlockMarker(&'a str),
}

/// The variant of a [`Token`], without its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    OpenDelimiter,
    CloseDelimiter,
    BlockMarker,
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Token::Text(text)
            | Token::OpenDelimiter(text)
            | Token::CloseDelimiter(text)
            | Token::BlockMarker(text) => text,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::OpenDelimiter(_) => TokenKind::OpenDelimiter,
            Token::CloseDelimiter(_) => TokenKind::CloseDelimiter,
            Token::BlockMarker(_) => TokenKind::BlockMarker,
        }
    }

    /// True for confirmed open or close delimiters.
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::OpenDelimiter(_) | Token::CloseDelimiter(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Text => "Text",
            TokenKind::OpenDelimiter => "OpenDelimiter",
            TokenKind::CloseDelimiter => "CloseDelimiter",
            TokenKind::BlockMarker => "BlockMarker",
        };
        f.write_str(name)
    }
}

//! # Lexer - Splitting Lines into Raw Segments
//!
//! The first stage of the pipeline. Input is split into lines, and each
//! line is scanned left to right against the [`MarkerCatalog`] using
//! longest match. The lexer never decides whether a marker is *valid*
//! markup; it only records candidates for the validator.
//!
//! ## The Lossless Guarantee
//!
//! Every byte of the input appears in exactly one segment, and segments
//! borrow from the input rather than copying it:
//!
//! ```
//! use marklex_syntax::{MarkerCatalog, lexer::Lexer};
//!
//! let catalog = MarkerCatalog::markdown();
//! let input = "# Hello, _world_!\n";
//! let lines = Lexer::new(&catalog).tokenize(input);
//!
//! let reconstructed: String = lines.iter().map(|l| l.text()).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Escapes
//!
//! The escape marker is emitted as its own [`Segment::Literal`]. If the
//! single character after it begins any catalog marker, that character is
//! emitted as a [`Segment::EscapedLiteral`] and never takes part in pairing.
//! Any other character simply continues the literal run. The escape never
//! consumes the line terminator.
//!
//! ```text
//! "\_a_\n" → [Literal("\"), EscapedLiteral("_"), Literal("a"), Candidate("_"), Literal("\n")]
//! ```

pub mod cursor;
pub mod segment;

pub use segment::{Line, Segment};

use crate::catalog::{MarkerCatalog, MarkerCategory};
use cursor::Cursor;

/// Line terminator. Each line keeps its own as a final literal segment.
pub const TERMINATOR: char = '\n';

/// Scans text into per-line raw segments.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'c> {
    catalog: &'c MarkerCatalog,
}

impl<'c> Lexer<'c> {
    pub fn new(catalog: &'c MarkerCatalog) -> Self {
        Self { catalog }
    }

    /// Lex the input into lines of raw segments.
    ///
    /// A final line without a terminator gets no terminator segment, so the
    /// segments always reproduce `text` exactly. Empty input yields no lines.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Line<'a>> {
        let lines: Vec<Line<'a>> = text
            .split_inclusive(TERMINATOR)
            .map(|line| self.lex_line(line))
            .collect();

        log::debug!("lexed {} bytes into {} lines", text.len(), lines.len());
        lines
    }

    /// Lex a single line. `line` may end with the terminator.
    pub fn lex_line<'a>(&self, line: &'a str) -> Line<'a> {
        let (body, terminator) = match line.strip_suffix(TERMINATOR) {
            Some(body) => (body, Some(&line[body.len()..])),
            None => (line, None),
        };

        let mut cur = Cursor::new(body);
        let mut segments = Vec::new();
        let mut run_start = cur.pos();

        // Helper to flush the pending literal run
        fn flush<'a>(segments: &mut Vec<Segment<'a>>, cur: &Cursor<'a>, start: usize) {
            let run = cur.since(start);
            if !run.is_empty() {
                segments.push(Segment::Literal(run));
            }
        }

        while !cur.eof() {
            let Some(marker) = self.catalog.longest_match(cur.rest()) else {
                cur.bump();
                continue;
            };

            flush(&mut segments, &cur, run_start);
            let start = cur.pos();
            cur.bump_n(marker.literal.len());

            if marker.category != MarkerCategory::Escape {
                segments.push(Segment::Candidate(cur.since(start)));
                run_start = cur.pos();
                continue;
            }

            segments.push(Segment::Literal(cur.since(start)));
            run_start = cur.pos();

            // Single-char lookup, not a longest match
            let Some(next) = cur.peek() else {
                break;
            };
            cur.bump();
            if self.catalog.starts_marker(next) {
                segments.push(Segment::EscapedLiteral(cur.since(run_start)));
                run_start = cur.pos();
            }
        }

        flush(&mut segments, &cur, run_start);
        if let Some(terminator) = terminator {
            segments.push(Segment::Literal(terminator));
        }

        Line::new(segments)
    }
}

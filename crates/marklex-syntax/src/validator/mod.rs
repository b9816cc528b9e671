//! # Validator - Resolving Candidates into Tokens
//!
//! The second stage of the pipeline. Each raw [`Segment`] becomes exactly
//! one [`Token`]; nothing is merged or dropped. Lines are validated
//! independently, so no delimiter ever pairs across a line boundary.
//!
//! ## Block markers
//!
//! A candidate whose catalog category is `Block` becomes a
//! [`Token::BlockMarker`] only when it is the first segment of its line.
//! Anywhere else it is text.
//!
//! ## Paired markers
//!
//! Paired candidates are matched with a per-line stack of pending openers.
//! For each candidate the neighbouring characters ([`Flanks`]) decide what
//! it may do:
//!
//! | Rule | Condition |
//! |------|-----------|
//! | intraword | word chars on both sides: always text |
//! | can close | non-whitespace on the left, same literal on top of the stack |
//! | can open | non-whitespace on the right |
//!
//! A close is rejected when only whitespace (or nothing) sits between it
//! and its opener. A close whose opener is buried under other pending
//! entries is a crossing: the candidate stays text, every entry above the
//! opener is dropped, and the opener can never close.
//!
//! Stack lookups are amortized constant time, so a line costs time linear
//! in its segment count however its markers nest or cross.
//!
//! ```text
//! "__a _b_ c__" → Open(__) a  Open(_) b Close(_)  c Close(__)
//! "_a __b_ c__" → all four markers stay text (crossing)
//! ```
//!
//! Anything still pending at end of line is text.

pub mod flanking;
pub mod stack;


pub use flanking::Flanks;
use stack::{DelimiterStack, Lookup};

use crate::catalog::{MarkerCatalog, MarkerCategory};
use crate::lexer::{Line, Segment};
use crate::token::Token;

/// How a single segment was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Text,
    Open,
    Close,
    Block,
}

/// Turns lexed lines into a flat, validated token stream.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'c> {
    catalog: &'c MarkerCatalog,
}

impl<'c> Validator<'c> {
    pub fn new(catalog: &'c MarkerCatalog) -> Self {
        Self { catalog }
    }

    /// Validate every line and flatten the result, preserving line order.
    pub fn validate<'a>(&self, lines: &[Line<'a>]) -> Vec<Token<'a>> {
        let tokens: Vec<Token<'a>> = lines
            .iter()
            .flat_map(|line| self.validate_line(line))
            .collect();

        log::debug!("validated {} lines into {} tokens", lines.len(), tokens.len());
        tokens
    }

    /// Validate a single line. Independent of every other line.
    pub fn validate_line<'a>(&self, line: &Line<'a>) -> Vec<Token<'a>> {
        let mut scan = LineScan::new(&line.segments);

        for (index, segment) in line.segments.iter().enumerate() {
            let Segment::Candidate(literal) = *segment else {
                continue;
            };

            match self.catalog.category_of(literal) {
                Some(MarkerCategory::Block) if index == 0 => {
                    scan.resolved[index] = Resolution::Block;
                }
                Some(MarkerCategory::Paired) => scan.resolve_paired(index, literal),
                _ => {}
            }
        }

        scan.finish()
    }
}

/// Working state for one line: the pending stack and a decision per segment.
struct LineScan<'s, 'a> {
    segments: &'s [Segment<'a>],
    content: ContentIndex,
    stack: DelimiterStack<'a>,
    resolved: Vec<Resolution>,
}

impl<'s, 'a> LineScan<'s, 'a> {
    fn new(segments: &'s [Segment<'a>]) -> Self {
        Self {
            segments,
            content: ContentIndex::new(segments),
            stack: DelimiterStack::default(),
            resolved: vec![Resolution::Text; segments.len()],
        }
    }

    /// Decide one paired candidate against the pending stack.
    fn resolve_paired(&mut self, index: usize, literal: &'a str) {
        let flanks = Flanks::around(self.segments, index);
        if flanks.is_intraword() {
            return;
        }

        if flanks.can_close() {
            match self.stack.lookup(literal) {
                Lookup::Top(opener) if self.content.between(opener.index, index) => {
                    self.stack.pop();
                    self.resolved[opener.index] = Resolution::Open;
                    self.resolved[index] = Resolution::Close;
                    return;
                }
                Lookup::Buried { depth } => {
                    let crossed = self.stack.cross_above(depth);
                    log::trace!(
                        "{literal:?} at segment {index} crosses {crossed} pending delimiter(s)"
                    );
                    return;
                }
                Lookup::Top(_) | Lookup::Missing => {}
            }
        }

        if flanks.can_open() {
            self.stack.push(literal, index);
        }
    }

    /// Build the tokens. Openers still pending stay text.
    fn finish(self) -> Vec<Token<'a>> {
        for pending in self.stack.into_unclosed() {
            log::trace!(
                "unclosed {:?} at segment {} stays text",
                pending.literal,
                pending.index
            );
        }

        self.segments
            .iter()
            .zip(self.resolved)
            .map(|(segment, resolution)| {
                let text = segment.text();
                match resolution {
                    Resolution::Text => Token::Text(text),
                    Resolution::Open => Token::OpenDelimiter(text),
                    Resolution::Close => Token::CloseDelimiter(text),
                    Resolution::Block => Token::BlockMarker(text),
                }
            })
            .collect()
    }
}

/// Running count of non-blank segments, so "is there content between
/// these two segments" is answered without rescanning the line.
struct ContentIndex {
    /// `counts[i]` = non-blank segments in `segments[..i]`.
    counts: Vec<usize>,
}

impl ContentIndex {
    fn new(segments: &[Segment<'_>]) -> Self {
        let mut counts = Vec::with_capacity(segments.len() + 1);
        let mut seen = 0;
        counts.push(seen);
        for segment in segments {
            if !segment.is_blank() {
                seen += 1;
            }
            counts.push(seen);
        }
        Self { counts }
    }

    /// True if anything other than whitespace lies strictly between `open` and `close`.
    fn between(&self, open: usize, close: usize) -> bool {
        self.counts[close] > self.counts[open + 1]
    }
}

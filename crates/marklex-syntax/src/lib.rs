//! # marklex-syntax
//!
//! A lossless, line-scoped markup tokenizer. Raw text goes in; an ordered
//! stream of classified [`Token`]s comes out, ready for a renderer.
//!
//! ## Architecture Overview
//!
//! The pipeline has two stages, both driven by a [`MarkerCatalog`]:
//!
//! ```text
//! Source Text → Lexer → Lines of Segments → Validator → Tokens
//!               (longest match,             (delimiter stack,
//!                escapes)                    flanking rules)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Splits the input into lines and scans each one for catalog markers,
//! producing raw [`Segment`]s: literal runs, marker candidates, and
//! escape-neutralized characters.
//!
//! ```text
//! "_ab_\n" → [Candidate("_"), Literal("ab"), Candidate("_"), Literal("\n")]
//! ```
//!
//! ### 2. Validator ([`validator`] module)
//!
//! Decides, line by line, which candidates are real markup. Paired markers
//! are matched on a LIFO stack; block markers must lead their line. Every
//! candidate that fails falls back to [`Token::Text`] with its original
//! characters; there is no error path.
//!
//! ```text
//! → [OpenDelimiter("_"), Text("ab"), CloseDelimiter("_"), Text("\n")]
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! marklex-syntax/
//! ├── lib.rs          # This file - public API and end-to-end tests
//! ├── catalog.rs      # MarkerCatalog, Marker, MarkerCategory
//! ├── token.rs        # Token (Text / OpenDelimiter / CloseDelimiter / BlockMarker)
//! ├── invariants.rs   # Losslessness and pairing checks for tests
//! ├── lexer/
//! │   ├── mod.rs      # Lexer: lines → segments
//! │   ├── cursor.rs   # Char-aware scanning cursor
//! │   └── segment.rs  # Segment and Line
//! └── validator/
//!     ├── mod.rs      # Validator: segments → tokens
//!     ├── flanking.rs # Left/right context rules
//!     └── stack.rs    # Pending-open delimiter stack
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use marklex_syntax::{tokenize, MarkerCatalog, Token};
//!
//! let catalog = MarkerCatalog::markdown();
//! let tokens = tokenize(&catalog, "# Title with __strong__\n");
//!
//! assert_eq!(tokens[0], Token::BlockMarker("# "));
//! assert_eq!(tokens[2], Token::OpenDelimiter("__"));
//!
//! // The tokens preserve all text
//! let text: String = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(text, "# Title with __strong__\n");
//! ```
//!
//! ## Line Independence
//!
//! No state crosses a line boundary, so callers that want to fan work out
//! can lex once and run [`Validator::validate_line`] per line, then
//! concatenate the results in line order.

pub mod catalog;
pub mod invariants;
pub mod lexer;
pub mod token;
pub mod validator;

pub use catalog::{CatalogError, Marker, MarkerCatalog, MarkerCategory};
pub use lexer::{Lexer, Line, Segment};
pub use token::{Token, TokenKind};
pub use validator::Validator;

/// Lex and validate `text` in one pass.
pub fn tokenize<'a>(catalog: &MarkerCatalog, text: &'a str) -> Vec<Token<'a>> {
    let lines = Lexer::new(catalog).tokenize(text);
    Validator::new(catalog).validate(&lines)
}

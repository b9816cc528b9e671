//! # Marker Catalog
//!
//! The catalog is the set of literal strings the lexer recognizes as markup.
//! It is plain configuration: built once, then shared read-only by the
//! [`Lexer`](crate::lexer::Lexer) and the validator.
//!
//! Entries are partitioned into three categories:
//!
//! | Category | Example | Meaning |
//! |----------|---------|---------|
//! | [`Block`](MarkerCategory::Block) | `# ` | valid only as the first segment of a line |
//! | [`Paired`](MarkerCategory::Paired) | `__` | needs a matching close on the same line |
//! | [`Escape`](MarkerCategory::Escape) | `\` | neutralizes the next character |
//!
//! Markers are kept sorted by descending literal length, so a linear scan
//! finds the longest match first (`__` wins over `_` at the same position).

use std::collections::HashSet;

use thiserror::Error;

/// Which role a marker literal plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    Block,
    Paired,
    Escape,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub literal: String,
    pub category: MarkerCategory,
}

impl Marker {
    pub fn new(literal: impl Into<String>, category: MarkerCategory) -> Self {
        Self {
            literal: literal.into(),
            category,
        }
    }

    pub fn block(literal: impl Into<String>) -> Self {
        Self::new(literal, MarkerCategory::Block)
    }

    pub fn paired(literal: impl Into<String>) -> Self {
        Self::new(literal, MarkerCategory::Paired)
    }

    pub fn escape(literal: impl Into<String>) -> Self {
        Self::new(literal, MarkerCategory::Escape)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("marker literal must not be empty")]
    EmptyLiteral,

    #[error("marker literal {0:?} must not contain a line terminator")]
    ContainsNewline(String),

    #[error("marker literal {0:?} is listed more than once")]
    Duplicate(String),

    #[error("catalog has no escape marker")]
    MissingEscape,

    #[error("catalog has more than one escape marker: {first:?} and {second:?}")]
    MultipleEscapes { first: String, second: String },

    #[error("escape marker {0:?} must be exactly one character")]
    EscapeNotSingleChar(String),
}

/// An immutable, length-ordered set of markers.
#[derive(Debug, Clone)]
pub struct MarkerCatalog {
    markers: Vec<Marker>,
    escape: char,
}

impl MarkerCatalog {
    /// Validates `markers` and orders them for longest-match lookup.
    pub fn new(markers: impl IntoIterator<Item = Marker>) -> Result<Self, CatalogError> {
        let markers: Vec<Marker> = markers.into_iter().collect();
        let mut seen = HashSet::new();
        let mut escape: Option<&Marker> = None;

        for marker in &markers {
            if marker.literal.is_empty() {
                return Err(CatalogError::EmptyLiteral);
            }
            if marker.literal.contains('\n') {
                return Err(CatalogError::ContainsNewline(marker.literal.clone()));
            }
            if !seen.insert(marker.literal.as_str()) {
                return Err(CatalogError::Duplicate(marker.literal.clone()));
            }
            if marker.category == MarkerCategory::Escape {
                if let Some(first) = escape {
                    return Err(CatalogError::MultipleEscapes {
                        first: first.literal.clone(),
                        second: marker.literal.clone(),
                    });
                }
                escape = Some(marker);
            }
        }

        let escape = match escape {
            None => return Err(CatalogError::MissingEscape),
            Some(marker) => single_char(&marker.literal)
                .ok_or_else(|| CatalogError::EscapeNotSingleChar(marker.literal.clone()))?,
        };

        Ok(Self::ordered(markers, escape))
    }

    fn ordered(mut markers: Vec<Marker>, escape: char) -> Self {
        markers.sort_by(|a, b| {
            b.literal
                .len()
                .cmp(&a.literal.len())
                .then_with(|| a.literal.cmp(&b.literal))
        });
        Self { markers, escape }
    }

    /// The catalog used when no configuration is supplied: ATX headings,
    /// list and quote prefixes as block markers, emphasis/strong/strike as
    /// paired markers, backslash as escape.
    pub fn markdown() -> Self {
        let mut markers: Vec<Marker> = (1..=6)
            .map(|level| Marker::block(format!("{} ", "#".repeat(level))))
            .collect();
        markers.extend([Marker::block("- "), Marker::block("> ")]);
        markers.extend(["_", "__", "*", "**", "~~"].map(Marker::paired));
        markers.push(Marker::escape("\\"));

        Self::ordered(markers, '\\')
    }

    /// All markers, longest literal first.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The escape character.
    pub fn escape(&self) -> char {
        self.escape
    }

    /// Returns the longest marker that `rest` starts with.
    pub fn longest_match(&self, rest: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| rest.starts_with(&m.literal))
    }

    /// Whether any marker literal begins with `ch`.
    pub fn starts_marker(&self, ch: char) -> bool {
        self.markers.iter().any(|m| m.literal.starts_with(ch))
    }

    pub fn category_of(&self, literal: &str) -> Option<MarkerCategory> {
        self.markers
            .iter()
            .find(|m| m.literal == literal)
            .map(|m| m.category)
    }
}

impl Default for MarkerCatalog {
    fn default() -> Self {
        Self::markdown()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

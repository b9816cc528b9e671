use std::collections::HashMap;

/// A tentative open delimiter awaiting its close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending<'a> {
    pub literal: &'a str,
    /// Segment index within the line.
    pub index: usize,
}

/// Outcome of looking for an opener for a closing candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The innermost pending entry matches.
    Top(Pending<'a>),
    /// A matching entry exists at `depth` but something sits on top of it.
    Buried { depth: usize },
    /// Nothing to close.
    Missing,
}

/// Per-line LIFO stack of pending open delimiters.
///
/// A crossing close removes every entry above its opener; those can never
/// close again. The opener and everything below it stay pending but are
/// sealed: a crossed entry conceptually still sits on top of them, so they
/// are never the innermost entry again.
///
/// Each literal keeps its own stack of positions, so lookups and crossings
/// are amortized O(1) per candidate.
#[derive(Debug, Default)]
pub struct DelimiterStack<'a> {
    entries: Vec<Pending<'a>>,
    by_literal: HashMap<&'a str, Vec<usize>>,
    /// Entries below this position are sealed.
    sealed: usize,
}

impl<'a> DelimiterStack<'a> {
    pub fn push(&mut self, literal: &'a str, index: usize) {
        self.by_literal
            .entry(literal)
            .or_default()
            .push(self.entries.len());
        self.entries.push(Pending { literal, index });
    }

    /// Finds the nearest pending entry with the given literal.
    pub fn lookup(&self, literal: &str) -> Lookup<'a> {
        let Some(&depth) = self.by_literal.get(literal).and_then(|d| d.last()) else {
            return Lookup::Missing;
        };

        if depth + 1 == self.entries.len() && depth >= self.sealed {
            Lookup::Top(self.entries[depth])
        } else {
            Lookup::Buried { depth }
        }
    }

    pub fn pop(&mut self) -> Option<Pending<'a>> {
        let pending = self.entries.pop()?;
        self.forget(pending.literal);
        Some(pending)
    }

    /// Drops every entry above `depth` and seals the rest. Returns how many
    /// entries were dropped.
    pub fn cross_above(&mut self, depth: usize) -> usize {
        let keep = (depth + 1).min(self.entries.len());
        let dropped = self.entries.len() - keep;
        while self.entries.len() > keep {
            if let Some(pending) = self.entries.pop() {
                self.forget(pending.literal);
            }
        }
        self.sealed = keep;
        dropped
    }

    fn forget(&mut self, literal: &str) {
        if let Some(depths) = self.by_literal.get_mut(literal) {
            depths.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the stack, yielding entries that were never closed.
    pub fn into_unclosed(self) -> impl Iterator<Item = Pending<'a>> {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_on_empty_stack() {
        let stack = DelimiterStack::default();
        assert_eq!(stack.lookup("_"), Lookup::Missing);
        assert!(stack.is_empty());
    }

    #[test]
    fn lookup_finds_top() {
        let mut stack = DelimiterStack::default();
        stack.push("__", 0);
        stack.push("_", 2);
        assert_eq!(
            stack.lookup("_"),
            Lookup::Top(Pending {
                literal: "_",
                index: 2,
            })
        );
    }

    #[test]
    fn lookup_reports_buried_match() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("__", 2);
        stack.push("*", 4);
        assert_eq!(stack.lookup("_"), Lookup::Buried { depth: 0 });
        assert_eq!(stack.lookup("~~"), Lookup::Missing);
    }

    #[test]
    fn lookup_prefers_nearest_entry() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("*", 1);
        stack.push("_", 2);
        assert_eq!(
            stack.lookup("_"),
            Lookup::Top(Pending {
                literal: "_",
                index: 2,
            })
        );
    }

    #[test]
    fn crossing_drops_entries_above_and_seals_opener() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("__", 2);
        assert_eq!(stack.cross_above(0), 1);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.lookup("__"), Lookup::Missing);
        // The opener is alone now but a crossed entry still covers it
        assert_eq!(stack.lookup("_"), Lookup::Buried { depth: 0 });
    }

    #[test]
    fn entries_pushed_after_crossing_can_close() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("*", 1);
        stack.cross_above(0);
        stack.push("*", 5);

        assert_eq!(
            stack.lookup("*"),
            Lookup::Top(Pending {
                literal: "*",
                index: 5,
            })
        );
        assert_eq!(stack.lookup("_"), Lookup::Buried { depth: 0 });
    }

    #[test]
    fn crossing_lower_opener_seals_everything() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("*", 1);
        stack.push("~~", 2);
        stack.cross_above(1);
        stack.push("**", 4);
        stack.cross_above(0);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.lookup("*"), Lookup::Missing);
        assert_eq!(stack.lookup("**"), Lookup::Missing);
        assert_eq!(stack.lookup("_"), Lookup::Buried { depth: 0 });
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("__", 1);
        assert_eq!(stack.pop().map(|p| p.literal), Some("__"));
        assert_eq!(stack.lookup("__"), Lookup::Missing);
        assert_eq!(stack.pop().map(|p| p.literal), Some("_"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn into_unclosed_yields_remaining() {
        let mut stack = DelimiterStack::default();
        stack.push("_", 0);
        stack.push("__", 3);
        let indices: Vec<usize> = stack.into_unclosed().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }
}

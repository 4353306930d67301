//! FAQ accordion selection state.

use std::fmt;

/// Which FAQ entry is expanded, if any.
///
/// At most one entry is open at a time. The page starts with nothing open and
/// only [`FaqSelection::toggle`] moves between states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqSelection(Option<usize>);

impl FaqSelection {
    /// All entries collapsed.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Entry `index` expanded.
    pub const fn open(index: usize) -> Self {
        Self(Some(index))
    }

    /// Header click on entry `index`: collapses it if it is the open one,
    /// otherwise opens it (implicitly collapsing any other).
    pub fn toggle(&mut self, index: usize) {
        self.0 = if self.0 == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn open_index(self) -> Option<usize> {
        self.0
    }
}

impl fmt::Display for FaqSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "open({index})"),
            None => f.write_str("none"),
        }
    }
}

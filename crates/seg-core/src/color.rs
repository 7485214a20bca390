//! Agent color — the two-valued group membership driving the decision rule.

use std::fmt;

/// The two agent populations.  `Red` is the minority color: at model
/// construction an agent is `Red` with probability `minority_fraction`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// `true` for the minority color.
    #[inline]
    pub fn is_minority(self) -> bool {
        self == Color::Red
    }

    /// The other color.
    #[inline]
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Lowercase CSS-friendly name, used by output rows and the viz snapshot.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

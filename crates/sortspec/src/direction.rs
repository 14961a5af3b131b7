use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Direction
///
/// Closed ordering direction for one sort field.
///
/// A leading `-` on a raw sort token selects `Desc`; bare tokens are `Asc`.
/// Serializes as `"asc"` / `"desc"`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Return the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Return true when this direction is descending.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascending() {
        assert_eq!(Direction::default(), Direction::Asc);
    }

    #[test]
    fn reversed_flips_both_variants() {
        assert_eq!(Direction::Asc.reversed(), Direction::Desc);
        assert_eq!(Direction::Desc.reversed(), Direction::Asc);
    }

    #[test]
    fn only_desc_is_descending() {
        assert!(Direction::Desc.is_descending());
        assert!(!Direction::Asc.is_descending());
    }

    #[test]
    fn serializes_as_lowercase_labels() {
        assert_eq!(serde_json::to_string(&Direction::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&Direction::Desc).unwrap(), "\"desc\"");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Direction::Desc.to_string(), "desc");
        assert_eq!(Direction::Asc.label(), "asc");
    }
}

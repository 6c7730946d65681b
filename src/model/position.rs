use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The role an applicant is applying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    /// No position chosen yet.
    #[default]
    #[serde(rename = "")]
    Unselected,
    Developer,
    Designer,
    Manager,
}

static ALL_POSITIONS: &[Position] = &[
    Position::Unselected,
    Position::Developer,
    Position::Designer,
    Position::Manager,
];

/// Returned when text does not name a known position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position: {0}")]
pub struct ParsePositionError(pub String);

impl Position {
    /// Returns the value used for this position in the application record.
    ///
    /// [`Position::Unselected`] is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Unselected => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Returns the text shown in the position selector.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Unselected => "Select a position",
            other => other.as_str(),
        }
    }

    /// Returns all positions in selector order, starting with `Unselected`.
    pub fn all() -> &'static [Position] {
        ALL_POSITIONS
    }

    /// Whether the relevant experience field applies to this position.
    pub fn uses_relevant_experience(&self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }

    /// Whether the portfolio URL field applies to this position.
    pub fn uses_portfolio(&self) -> bool {
        matches!(self, Position::Designer)
    }

    /// Whether the management experience field applies to this position.
    pub fn uses_management_experience(&self) -> bool {
        matches!(self, Position::Manager)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_POSITIONS
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An additional skill an applicant can tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

static ALL_SKILLS: &[Skill] = &[Skill::JavaScript, Skill::Css, Skill::Python];

/// Returned when text does not name a known skill.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill: {0}")]
pub struct ParseSkillError(pub String);

impl Skill {
    /// Returns the display name of this skill.
    pub fn name(&self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }

    /// Returns all skills in checkbox order.
    pub fn all() -> &'static [Skill] {
        ALL_SKILLS
    }
}

impl FromStr for Skill {
    type Err = ParseSkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SKILLS
            .iter()
            .copied()
            .find(|skill| skill.name() == s)
            .ok_or_else(|| ParseSkillError(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The checkbox group of additional skills, one flag per [`Skill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(rename = "JavaScript")]
    javascript: bool,
    #[serde(rename = "CSS")]
    css: bool,
    #[serde(rename = "Python")]
    python: bool,
}

impl Skills {
    /// Returns whether `skill` is ticked.
    pub fn get(&self, skill: Skill) -> bool {
        match skill {
            Skill::JavaScript => self.javascript,
            Skill::Css => self.css,
            Skill::Python => self.python,
        }
    }

    /// Sets one skill's flag, leaving the others untouched.
    pub fn set(&mut self, skill: Skill, checked: bool) {
        let flag = match skill {
            Skill::JavaScript => &mut self.javascript,
            Skill::Css => &mut self.css,
            Skill::Python => &mut self.python,
        };
        *flag = checked;
    }

    /// Returns `true` if at least one skill is ticked.
    pub fn any(&self) -> bool {
        Skill::all().iter().any(|&s| self.get(s))
    }

    /// Returns the ticked skills in checkbox order.
    pub fn selected(&self) -> Vec<Skill> {
        Skill::all().iter().copied().filter(|&s| self.get(s)).collect()
    }
}

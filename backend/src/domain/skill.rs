//! Closed enumeration of technology tags a developer can list.
//!
//! Skills travel on the wire under their display names, so `NodeJs` is
//! serialised as `"Node.js"`. No free-form values are accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recognised technology tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    React,
    TypeScript,
    JavaScript,
    Python,
    #[serde(rename = "Node.js")]
    NodeJs,
    #[serde(rename = "SQL")]
    Sql,
    Docker,
}

impl Skill {
    /// Every skill, in the order dashboards and filter menus present them.
    pub const ALL: [Skill; 7] = [
        Skill::React,
        Skill::TypeScript,
        Skill::JavaScript,
        Skill::Python,
        Skill::NodeJs,
        Skill::Sql,
        Skill::Docker,
    ];

    /// Display name, identical to the serialised form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::NodeJs => "Node.js",
            Self::Sql => "SQL",
            Self::Docker => "Docker",
        }
    }

    /// Position of the skill within [`Skill::ALL`].
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Self::React => 0,
            Self::TypeScript => 1,
            Self::JavaScript => 2,
            Self::Python => 3,
            Self::NodeJs => 4,
            Self::Sql => 5,
            Self::Docker => 6,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name a member of [`Skill::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill: {value}")]
pub struct UnknownSkillError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Skill {
    type Err = UnknownSkillError;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| UnknownSkillError {
                value: s.to_owned(),
            })
    }
}

/// Toggle `skill` within `skills`: remove it when present, append otherwise.
///
/// Profile editors use this to keep a developer's skill list free of
/// duplicates while preserving the order in which skills were picked.
///
/// # Examples
/// ```
/// use portfolio::domain::{Skill, toggle_skill};
///
/// let skills = toggle_skill(&[Skill::React], Skill::Python);
/// assert_eq!(skills, vec![Skill::React, Skill::Python]);
/// assert_eq!(toggle_skill(&skills, Skill::React), vec![Skill::Python]);
/// ```
pub fn toggle_skill(skills: &[Skill], skill: Skill) -> Vec<Skill> {
    if skills.contains(&skill) {
        skills.iter().copied().filter(|s| *s != skill).collect()
    } else {
        let mut toggled = skills.to_vec();
        toggled.push(skill);
        toggled
    }
}

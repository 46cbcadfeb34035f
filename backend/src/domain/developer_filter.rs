//! Free-text and skill filtering for developer listings.

use std::fmt;
use std::str::FromStr;

use super::{Developer, Skill, UnknownSkillError};

/// Skill restriction applied by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    /// No restriction.
    #[default]
    All,
    /// Only developers listing this skill.
    Only(Skill),
}

impl SkillFilter {
    fn admits(self, developer: &Developer) -> bool {
        match self {
            Self::All => true,
            Self::Only(skill) => developer.has_skill(skill),
        }
    }
}

impl From<Skill> for SkillFilter {
    fn from(skill: Skill) -> Self {
        Self::Only(skill)
    }
}

impl FromStr for SkillFilter {
    type Err = UnknownSkillError;

    /// `"All"` selects everything; otherwise the text must name a skill.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for SkillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(skill) => f.write_str(skill.as_str()),
        }
    }
}

/// Narrow `records` to those matching `query` and `skill`.
///
/// A record matches the query when the query is empty or, ignoring case,
/// appears within the record's name, title, or email. Matching records keep
/// their original relative order.
///
/// # Examples
/// ```
/// use portfolio::domain::{
///     Developer, DeveloperId, DeveloperProfile, Skill, SkillFilter, filter_developers,
/// };
///
/// let jane = Developer::new(DeveloperId::new(2), DeveloperProfile::new("Jane Doe", "jane@example.com"));
/// let hits = filter_developers(&[jane], "JANE", SkillFilter::All);
/// assert_eq!(hits.len(), 1);
/// assert!(filter_developers(&hits, "", SkillFilter::Only(Skill::Python)).is_empty());
/// ```
pub fn filter_developers(records: &[Developer], query: &str, skill: SkillFilter) -> Vec<Developer> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle) && skill.admits(record))
        .cloned()
        .collect()
}

fn matches_query(developer: &Developer, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let profile = developer.profile();
    [&profile.name, &profile.title, &profile.email]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

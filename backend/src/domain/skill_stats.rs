//! Aggregate statistics over developer records.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Developer, Skill};

/// Number of developers listing each [`Skill`].
///
/// Every skill is always present, starting at zero, and iteration follows
/// [`Skill::ALL`]. Serialises as a JSON object keyed by skill name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillCounts([usize; Skill::ALL.len()]);

impl SkillCounts {
    /// Count recorded for `skill`.
    pub fn get(&self, skill: Skill) -> usize {
        self.0.get(skill.ordinal()).copied().unwrap_or_default()
    }

    /// `(skill, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, usize)> + '_ {
        Skill::ALL.into_iter().map(|skill| (skill, self.get(skill)))
    }

    /// Sum of all counters, i.e. the number of skill entries counted.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    fn increment(&mut self, skill: Skill) {
        if let Some(slot) = self.0.get_mut(skill.ordinal()) {
            *slot += 1;
        }
    }
}

impl Serialize for SkillCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Skill::ALL.len()))?;
        for (skill, count) in self.iter() {
            map.serialize_entry(skill.as_str(), &count)?;
        }
        map.end()
    }
}

/// Reduce records to per-skill counts.
///
/// Every skill entry of every record adds one to its counter, so a record
/// listing the same skill twice contributes twice.
///
/// # Examples
/// ```
/// use portfolio::domain::{Skill, count_by_skill};
///
/// let counts = count_by_skill(&[]);
/// assert!(Skill::ALL.iter().all(|skill| counts.get(*skill) == 0));
/// ```
pub fn count_by_skill(records: &[Developer]) -> SkillCounts {
    let mut counts = SkillCounts::default();
    for skill in records.iter().flat_map(|record| &record.profile().skills) {
        counts.increment(*skill);
    }
    counts
}

/// Dashboard figures for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_developers: usize,
    pub professional_developers: usize,
    pub non_professional_developers: usize,
    pub total_skill_entries: usize,
    pub tracked_skills: usize,
    pub skill_counts: SkillCounts,
}

impl PortfolioSummary {
    /// Summarise `records`.
    pub fn from_records(records: &[Developer]) -> Self {
        let total_developers = records.len();
        let professional_developers = count_professionals(records);
        let skill_counts = count_by_skill(records);
        Self {
            total_developers,
            professional_developers,
            non_professional_developers: total_developers.saturating_sub(professional_developers),
            total_skill_entries: skill_counts.total(),
            tracked_skills: Skill::ALL.len(),
            skill_counts,
        }
    }
}

/// Number of records flagged as professional.
pub fn count_professionals(records: &[Developer]) -> usize {
    records
        .iter()
        .filter(|record| record.profile().is_professional)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeveloperId, DeveloperProfile};
    use rstest::{fixture, rstest};

    fn developer(id: u64, skills: &[Skill], is_professional: bool) -> Developer {
        let mut profile = DeveloperProfile::new(format!("Dev {id}"), format!("dev{id}@example.com"));
        profile.skills = skills.to_vec();
        profile.is_professional = is_professional;
        Developer::new(DeveloperId::new(id), profile)
    }

    #[fixture]
    fn records() -> Vec<Developer> {
        vec![
            developer(1, &[Skill::React, Skill::TypeScript, Skill::Python], true),
            developer(2, &[Skill::React, Skill::JavaScript], false),
            developer(3, &[], false),
        ]
    }

    #[test]
    fn empty_input_maps_every_skill_to_zero() {
        let counts = count_by_skill(&[]);
        assert_eq!(counts.iter().count(), Skill::ALL.len());
        assert!(counts.iter().all(|(_, count)| count == 0));
        assert_eq!(counts.total(), 0);
    }

    #[rstest]
    fn counts_each_skill_entry(records: Vec<Developer>) {
        let counts = count_by_skill(&records);
        assert_eq!(counts.get(Skill::React), 2);
        assert_eq!(counts.get(Skill::TypeScript), 1);
        assert_eq!(counts.get(Skill::Docker), 0);
    }

    #[rstest]
    fn total_matches_number_of_skill_entries(records: Vec<Developer>) {
        let entries: usize = records.iter().map(|r| r.profile().skills.len()).sum();
        assert_eq!(count_by_skill(&records).total(), entries);
    }

    #[rstest]
    fn result_is_independent_of_input_order(mut records: Vec<Developer>) {
        let forward = count_by_skill(&records);
        records.reverse();
        assert_eq!(count_by_skill(&records), forward);
    }

    #[test]
    fn duplicate_entries_count_twice() {
        let counts = count_by_skill(&[developer(1, &[Skill::Sql, Skill::Sql], false)]);
        assert_eq!(counts.get(Skill::Sql), 2);
    }

    #[test]
    fn serialises_in_enumeration_order() {
        let counts = count_by_skill(&[developer(1, &[Skill::NodeJs], false)]);
        let json = serde_json::to_string(&counts).expect("serialise");
        assert_eq!(
            json,
            r#"{"React":0,"TypeScript":0,"JavaScript":0,"Python":0,"Node.js":1,"SQL":0,"Docker":0}"#
        );
    }

    #[rstest]
    fn summary_reports_dashboard_figures(records: Vec<Developer>) {
        let summary = PortfolioSummary::from_records(&records);
        assert_eq!(summary.total_developers, 3);
        assert_eq!(summary.professional_developers, 1);
        assert_eq!(summary.non_professional_developers, 2);
        assert_eq!(summary.total_skill_entries, 5);
        assert_eq!(summary.tracked_skills, 7);
    }
}

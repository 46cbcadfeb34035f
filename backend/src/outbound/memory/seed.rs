//! Example portfolio loaded at startup.

use crate::domain::{Developer, DeveloperId, DeveloperProfile, Skill};

/// The two example records shipped with the portfolio, ids 1 and 2.
pub fn seed_developers() -> Vec<Developer> {
    vec![
        Developer::new(
            DeveloperId::new(1),
            DeveloperProfile {
                name: "Ahmeduddin Mohammed".into(),
                email: "ahmed@example.com".into(),
                title: "Full-Stack Engineer".into(),
                bio: Some("Working on secure user management, AI/ML, and cloud-native apps.".into()),
                location: Some("Harrison, NJ".into()),
                skills: vec![
                    Skill::React,
                    Skill::TypeScript,
                    Skill::Python,
                    Skill::Sql,
                    Skill::Docker,
                ],
                years_experience: 2,
                github_url: Some("https://github.com/MohammedAhmeduddin".into()),
                linkedin_url: Some("https://linkedin.com".into()),
                is_professional: true,
            },
        ),
        Developer::new(
            DeveloperId::new(2),
            DeveloperProfile {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                title: "Frontend Developer".into(),
                bio: Some("Loves building clean UIs and design systems.".into()),
                location: Some("New York, NY".into()),
                skills: vec![Skill::React, Skill::JavaScript, Skill::TypeScript],
                years_experience: 1,
                github_url: None,
                linkedin_url: None,
                is_professional: false,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PortfolioSummary;

    #[test]
    fn seed_records_pass_validation() {
        for record in seed_developers() {
            assert!(record.into_profile().validated().is_ok());
        }
    }

    #[test]
    fn seed_summary_matches_dashboard_figures() {
        let summary = PortfolioSummary::from_records(&seed_developers());
        assert_eq!(summary.total_developers, 2);
        assert_eq!(summary.professional_developers, 1);
        assert_eq!(summary.total_skill_entries, 8);
        assert_eq!(summary.skill_counts.get(Skill::React), 2);
    }
}

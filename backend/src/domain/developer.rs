//! Developer records tracked by the portfolio.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Skill;

/// Store-assigned developer identifier.
///
/// Identifiers are allocated by the developer store, never reused, and never
/// change once a record exists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DeveloperId(u64);

impl DeveloperId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier allocated after this one, or `None` once the space
    /// is exhausted.
    pub(crate) const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u64> for DeveloperId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures for developer profiles submitted by editors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeveloperValidationError {
    /// Name was missing or blank once trimmed.
    EmptyName,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
}

impl DeveloperValidationError {
    /// Name of the offending field as it appears on the wire.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail => "email",
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyEmail => "empty_email",
        }
    }
}

impl fmt::Display for DeveloperValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for DeveloperValidationError {}

/// Everything a developer record holds apart from its identifier.
///
/// This is the shape accepted by the "new developer" flow; the store assigns
/// the identifier. `skills` keeps selection order and the store does not
/// reject duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperProfile {
    pub name: String,
    pub email: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_professional: bool,
}

impl DeveloperProfile {
    /// Start a profile with the two required fields and defaults elsewhere.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Check the required fields and normalise blank optional text to `None`.
    ///
    /// Values are otherwise kept exactly as submitted; URLs are not checked.
    ///
    /// # Examples
    /// ```
    /// use portfolio::domain::{DeveloperProfile, DeveloperValidationError};
    ///
    /// let mut profile = DeveloperProfile::new("Sam", "sam@example.com");
    /// profile.bio = Some("   ".into());
    /// let profile = profile.validated().unwrap();
    /// assert_eq!(profile.bio, None);
    ///
    /// let err = DeveloperProfile::new(" ", "x@example.com").validated().unwrap_err();
    /// assert_eq!(err, DeveloperValidationError::EmptyName);
    /// ```
    pub fn validated(self) -> Result<Self, DeveloperValidationError> {
        if self.name.trim().is_empty() {
            return Err(DeveloperValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(DeveloperValidationError::EmptyEmail);
        }

        Ok(Self {
            bio: non_blank(self.bio),
            location: non_blank(self.location),
            github_url: non_blank(self.github_url),
            linkedin_url: non_blank(self.linkedin_url),
            ..self
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// A tracked developer: an identifier plus profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    id: DeveloperId,
    #[serde(flatten)]
    profile: DeveloperProfile,
}

impl Developer {
    /// Pair a profile with its identifier.
    pub fn new(id: DeveloperId, profile: DeveloperProfile) -> Self {
        Self { id, profile }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> DeveloperId {
        self.id
    }

    /// Profile data.
    pub fn profile(&self) -> &DeveloperProfile {
        &self.profile
    }

    /// Drop the identifier and keep the profile.
    pub fn into_profile(self) -> DeveloperProfile {
        self.profile
    }

    /// Whether the developer lists `skill`.
    pub fn has_skill(&self, skill: Skill) -> bool {
        self.profile.skills.contains(&skill)
    }
}

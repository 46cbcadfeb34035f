//! Sign-in credentials.
//!
//! Inbound adapters build [`LoginCredentials`] from raw form input before
//! handing them to the session guard, so blank submissions never reach the
//! credential comparison.

use std::fmt;

use zeroize::Zeroizing;

/// Raised when a sign-in form is submitted with a blank field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was missing or blank once trimmed.
    EmptyPassword,
}

impl LoginValidationError {
    /// Name of the offending field as it appears on the wire.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "empty_email",
            Self::EmptyPassword => "empty_password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email is required"),
            Self::EmptyPassword => write!(f, "password is required"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Email and password submitted on the sign-in form.
///
/// ## Invariants
/// - Neither field is blank once trimmed.
/// - Both fields keep the caller's exact bytes, surrounding whitespace
///   included, because the credential check compares them verbatim.
///
/// # Examples
/// ```
/// use portfolio::domain::{LoginCredentials, LoginValidationError};
///
/// let creds = LoginCredentials::try_from_parts("admin@example.com", "password123").unwrap();
/// assert_eq!(creds.email(), "admin@example.com");
///
/// let err = LoginCredentials::try_from_parts("", "x").unwrap_err();
/// assert_eq!(err, LoginValidationError::EmptyEmail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw form fields.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        if email.trim().is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.trim().is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Email of the single demo administrator.
pub const ADMIN_EMAIL: &str = "admin@example.com";
/// Plaintext password of the demo administrator.
pub const ADMIN_PASSWORD: &str = "password123";

/// Whether `credentials` are exactly the administrator pair.
pub(crate) fn is_admin(credentials: &LoginCredentials) -> bool {
    credentials.email() == ADMIN_EMAIL && credentials.password() == ADMIN_PASSWORD
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("admin@example.com", "", LoginValidationError::EmptyPassword)]
    #[case("admin@example.com", " \t ", LoginValidationError::EmptyPassword)]
    #[case("", "", LoginValidationError::EmptyEmail)]
    fn blank_fields_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("blank inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("admin@example.com", "password123", true)]
    #[case(" admin@example.com", "password123", false)]
    #[case("ADMIN@example.com", "password123", false)]
    #[case("admin@example.com", "password123 ", false)]
    #[case("jane@example.com", "password123", false)]
    fn only_the_exact_admin_pair_matches(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        let creds = LoginCredentials::try_from_parts(email, password).expect("non-blank");
        assert_eq!(is_admin(&creds), expected);
    }
}

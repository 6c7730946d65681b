use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::application::{Application, Field};

/// A violated form rule. The `Display` text is shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full Name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Phone Number is required")]
    PhoneNumberRequired,
    #[error("Phone Number must be a valid number")]
    PhoneNumberNotNumeric,
    #[error("Relevant Experience is required")]
    RelevantExperienceRequired,
    #[error("Relevant Experience must be a number greater than 0")]
    RelevantExperienceNotPositive,
    #[error("Portfolio URL is required")]
    PortfolioUrlRequired,
    #[error("Portfolio URL must be a valid URL")]
    PortfolioUrlInvalid,
    #[error("Management Experience is required")]
    ManagementExperienceRequired,
    #[error("At least one skill must be selected")]
    NoSkillSelected,
    #[error("Preferred Interview Time is required")]
    InterviewTimeRequired,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid hardcoded regex"));

static PORTFOLIO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://.*\..*").expect("valid hardcoded regex"));

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid hardcoded regex")
});

static RADIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").expect("valid hardcoded regex")
});

/// Whitespace and line terminators skipped around a numeric string.
/// Narrower than `char::is_whitespace`: U+0085 is not included.
fn is_number_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Converts form text to a number the way a browser's `Number()` does.
///
/// Surrounding whitespace is ignored and blank text is `0`. Returns `None`
/// where the browser would produce `NaN`.
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_matches(is_number_whitespace);
    match s {
        "" => Some(0.0),
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if RADIX_RE.is_match(s) => {
            let radix = match s.as_bytes()[1] {
                b'x' | b'X' => 16,
                b'o' | b'O' => 8,
                _ => 2,
            };
            s[2..]
                .chars()
                .map(|c| c.to_digit(radix))
                .try_fold(0.0_f64, |acc, d| Some(acc * f64::from(radix) + f64::from(d?)))
        }
        _ if DECIMAL_RE.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

/// How the "greater than 0" relevant-experience rule is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceRule {
    /// The rule runs whenever the required check does not fire, whatever the
    /// position. Blank experience counts as 0, so Manager and unselected
    /// applications always fail it.
    #[default]
    Ungated,
    /// The rule only runs for positions that show the experience field.
    Gated,
}

/// Field-keyed validation failures from one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorMap {
    /// Returns `true` if no rule was violated.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Returns `true` if `field` failed.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

/// Checks an [`Application`] against the form rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    experience_rule: ExperienceRule,
}

impl Validator {
    /// Creates a validator with the given experience rule scope.
    pub fn new(experience_rule: ExperienceRule) -> Self {
        Self { experience_rule }
    }

    /// Returns the experience rule scope in use.
    pub fn experience_rule(&self) -> ExperienceRule {
        self.experience_rule
    }

    /// Evaluates every rule independently and collects all failures.
    pub fn validate(&self, app: &Application) -> ErrorMap {
        let mut errors = ErrorMap::default();
        let position = app.position;

        if app.full_name.is_empty() {
            errors.insert(Field::FullName, ValidationError::FullNameRequired);
        }

        if app.email.is_empty() {
            errors.insert(Field::Email, ValidationError::EmailRequired);
        } else if !EMAIL_RE.is_match(&app.email) {
            errors.insert(Field::Email, ValidationError::EmailInvalid);
        }

        if app.phone_number.is_empty() {
            errors.insert(Field::PhoneNumber, ValidationError::PhoneNumberRequired);
        } else if parse_number(&app.phone_number).is_none() {
            errors.insert(Field::PhoneNumber, ValidationError::PhoneNumberNotNumeric);
        }

        if position.uses_relevant_experience() && app.relevant_experience.is_empty() {
            errors.insert(
                Field::RelevantExperience,
                ValidationError::RelevantExperienceRequired,
            );
        } else if self.checks_experience_value(app)
            && parse_number(&app.relevant_experience).is_some_and(|years| years <= 0.0)
        {
            errors.insert(
                Field::RelevantExperience,
                ValidationError::RelevantExperienceNotPositive,
            );
        }

        if position.uses_portfolio() && app.portfolio_url.is_empty() {
            errors.insert(Field::PortfolioUrl, ValidationError::PortfolioUrlRequired);
        } else if !app.portfolio_url.is_empty() && !PORTFOLIO_URL_RE.is_match(&app.portfolio_url) {
            errors.insert(Field::PortfolioUrl, ValidationError::PortfolioUrlInvalid);
        }

        if position.uses_management_experience() && app.management_experience.is_empty() {
            errors.insert(
                Field::ManagementExperience,
                ValidationError::ManagementExperienceRequired,
            );
        }

        if !app.additional_skills.any() {
            errors.insert(Field::AdditionalSkills, ValidationError::NoSkillSelected);
        }

        if app.preferred_interview_time.is_empty() {
            errors.insert(
                Field::PreferredInterviewTime,
                ValidationError::InterviewTimeRequired,
            );
        }

        debug!(errors = errors.len(), %position, "validated application");
        errors
    }

    fn checks_experience_value(&self, app: &Application) -> bool {
        match self.experience_rule {
            ExperienceRule::Ungated => true,
            ExperienceRule::Gated => app.position.uses_relevant_experience(),
        }
    }
}

/// Validates with the default [`Validator`].
pub fn validate(app: &Application) -> ErrorMap {
    Validator::default().validate(app)
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::Position;
use super::skill::Skills;

/// A job application record, as entered on the form.
///
/// The record itself enforces nothing. [`FormController`](super::FormController)
/// owns the live copy and keeps position-dependent fields cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    /// Years of relevant experience, as typed.
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: Skills,
    /// Date-time literal such as `2024-01-01T10:00`.
    pub preferred_interview_time: String,
}

impl Application {
    /// Returns the value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Email => &self.email,
            TextField::PhoneNumber => &self.phone_number,
            TextField::RelevantExperience => &self.relevant_experience,
            TextField::PortfolioUrl => &self.portfolio_url,
            TextField::ManagementExperience => &self.management_experience,
            TextField::PreferredInterviewTime => &self.preferred_interview_time,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::Email => &mut self.email,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::RelevantExperience => &mut self.relevant_experience,
            TextField::PortfolioUrl => &mut self.portfolio_url,
            TextField::ManagementExperience => &mut self.management_experience,
            TextField::PreferredInterviewTime => &mut self.preferred_interview_time,
        }
    }
}

/// Every named field of an [`Application`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

static ALL_FIELDS: &[Field] = &[
    Field::FullName,
    Field::Email,
    Field::PhoneNumber,
    Field::Position,
    Field::RelevantExperience,
    Field::PortfolioUrl,
    Field::ManagementExperience,
    Field::AdditionalSkills,
    Field::PreferredInterviewTime,
];

/// Returned when text does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct ParseFieldError(pub String);

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the record key of this field (e.g. `fullName`).
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Position => "position",
            Field::RelevantExperience => "relevantExperience",
            Field::PortfolioUrl => "portfolioUrl",
            Field::ManagementExperience => "managementExperience",
            Field::AdditionalSkills => "additionalSkills",
            Field::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    /// Returns the label shown next to the field's input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Position => "Applying for Position",
            Field::RelevantExperience => "Relevant Experience (years)",
            Field::PortfolioUrl => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::AdditionalSkills => "Additional Skills",
            Field::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    /// Returns the text field backing this field, if it is free text.
    pub fn as_text(&self) -> Option<TextField> {
        match self {
            Field::FullName => Some(TextField::FullName),
            Field::Email => Some(TextField::Email),
            Field::PhoneNumber => Some(TextField::PhoneNumber),
            Field::RelevantExperience => Some(TextField::RelevantExperience),
            Field::PortfolioUrl => Some(TextField::PortfolioUrl),
            Field::ManagementExperience => Some(TextField::ManagementExperience),
            Field::PreferredInterviewTime => Some(TextField::PreferredInterviewTime),
            Field::Position | Field::AdditionalSkills => None,
        }
    }
}

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The free-text subset of [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FullName,
    Email,
    PhoneNumber,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    PreferredInterviewTime,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::FullName => Field::FullName,
            TextField::Email => Field::Email,
            TextField::PhoneNumber => Field::PhoneNumber,
            TextField::RelevantExperience => Field::RelevantExperience,
            TextField::PortfolioUrl => Field::PortfolioUrl,
            TextField::ManagementExperience => Field::ManagementExperience,
            TextField::PreferredInterviewTime => Field::PreferredInterviewTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Skill;

    #[test]
    fn default_is_all_empty() {
        let app = Application::default();
        assert_eq!(app.full_name, "");
        assert_eq!(app.position, Position::Unselected);
        assert!(!app.additional_skills.any());
        assert_eq!(app.preferred_interview_time, "");
    }

    #[test]
    fn field_keys_round_trip_through_from_str() {
        for field in Field::all() {
            assert_eq!(field.key().parse::<Field>(), Ok(*field));
        }
    }

    #[test]
    fn unknown_field_key() {
        assert_eq!(
            "favouriteColour".parse::<Field>(),
            Err(ParseFieldError("favouriteColour".to_string()))
        );
    }

    #[test]
    fn text_fields_map_back_to_fields() {
        for field in Field::all() {
            if let Some(text) = field.as_text() {
                assert_eq!(Field::from(text), *field);
            }
        }
        assert_eq!(Field::Position.as_text(), None);
        assert_eq!(Field::AdditionalSkills.as_text(), None);
    }

    #[test]
    fn text_accessor_reads_each_field() {
        let app = Application {
            email: "a@b.co".into(),
            portfolio_url: "https://x.io".into(),
            ..Application::default()
        };
        assert_eq!(app.text(TextField::Email), "a@b.co");
        assert_eq!(app.text(TextField::PortfolioUrl), "https://x.io");
        assert_eq!(app.text(TextField::FullName), "");
    }

    #[test]
    fn serializes_with_record_keys() {
        let mut app = Application {
            full_name: "A".into(),
            position: Position::Developer,
            relevant_experience: "2".into(),
            ..Application::default()
        };
        app.additional_skills.set(Skill::JavaScript, true);

        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["fullName"], "A");
        assert_eq!(json["position"], "Developer");
        assert_eq!(json["relevantExperience"], "2");
        assert_eq!(json["additionalSkills"]["JavaScript"], true);
        assert_eq!(json["preferredInterviewTime"], "");
    }

    #[test]
    fn deserializes_partial_record() {
        let app: Application =
            serde_json::from_str(r#"{"email": "bad", "position": "Manager"}"#).unwrap();
        assert_eq!(app.email, "bad");
        assert_eq!(app.position, Position::Manager);
        assert_eq!(app.full_name, "");
    }
}

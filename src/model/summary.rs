//! Read-only projection of a submitted application.

use chrono::NaiveDateTime;

use super::application::{Application, Field};

/// Input format of the interview time field.
const INTERVIEW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Display format used when the interview time parses.
const INTERVIEW_TIME_DISPLAY: &str = "%a %d %b %Y %H:%M";

/// One labelled line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Labelled rows describing an application, in form order.
///
/// Position-dependent fields only appear for the positions that use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    rows: Vec<SummaryRow>,
}

impl Summary {
    /// Builds the summary for `app`.
    pub fn new(app: &Application) -> Self {
        let position = app.position;
        let rows = Field::all()
            .iter()
            .filter_map(|&field| {
                let value = match field {
                    Field::FullName => app.full_name.clone(),
                    Field::Email => app.email.clone(),
                    Field::PhoneNumber => app.phone_number.clone(),
                    Field::Position => position.as_str().to_string(),
                    Field::RelevantExperience if position.uses_relevant_experience() => {
                        app.relevant_experience.clone()
                    }
                    Field::PortfolioUrl if position.uses_portfolio() => app.portfolio_url.clone(),
                    Field::ManagementExperience if position.uses_management_experience() => {
                        app.management_experience.clone()
                    }
                    Field::RelevantExperience
                    | Field::PortfolioUrl
                    | Field::ManagementExperience => return None,
                    Field::AdditionalSkills => skills_line(app),
                    Field::PreferredInterviewTime => {
                        format_interview_time(&app.preferred_interview_time)
                    }
                };
                Some(SummaryRow {
                    label: summary_label(field),
                    value,
                })
            })
            .collect();
        Self { rows }
    }

    /// Returns the rows in display order.
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Returns the value shown for `label`, if that row is present.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

fn summary_label(field: Field) -> &'static str {
    match field {
        Field::RelevantExperience => "Relevant Experience",
        other => other.label(),
    }
}

/// Ticked skill names joined with `", "`.
fn skills_line(app: &Application) -> String {
    app.additional_skills
        .selected()
        .iter()
        .map(|skill| skill.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the interview time as entered, followed by a readable form in
/// parentheses when it is a valid `YYYY-MM-DDTHH:MM` value.
pub fn format_interview_time(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, INTERVIEW_TIME_FORMAT) {
        Ok(dt) => format!("{raw} ({})", dt.format(INTERVIEW_TIME_DISPLAY)),
        Err(_) => raw.to_string(),
    }
}

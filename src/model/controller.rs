//! Form state controller: the only writer of the live [`Application`].

use tracing::debug;

use super::application::{Application, Field, TextField};
use super::position::Position;
use super::skill::Skill;

/// A single edit applied through [`FormController::set_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Overwrite a free-text field.
    Text(TextField, String),
    /// Select a position; dependent fields are cleared before the edit returns.
    Position(Position),
    /// Tick or untick one skill.
    Skill(Skill, bool),
}

/// Owns the application record being edited and keeps it consistent with
/// the selected position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    application: Application,
}

impl FormController {
    /// Creates a controller over an empty application.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of an existing record, clearing any field its
    /// position does not use.
    pub fn from_application(application: Application) -> Self {
        let mut controller = Self { application };
        controller.on_position_change();
        controller
    }

    /// Returns the current record.
    pub fn application(&self) -> &Application {
        &self.application
    }

    /// Returns the selected position.
    pub fn position(&self) -> Position {
        self.application.position
    }

    /// Applies one edit to the record.
    ///
    /// Text edits to fields the current position hides are dropped.
    pub fn set_field(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Text(field, value) => {
                let position = self.application.position;
                if !shows(position, field.into()) {
                    debug!(%position, field = %Field::from(field), "ignoring edit to hidden field");
                    return;
                }
                *self.application.text_mut(field) = value;
            }
            FieldEdit::Position(position) => {
                debug!(from = %self.application.position, to = %position, "position changed");
                self.application.position = position;
                self.on_position_change();
            }
            FieldEdit::Skill(skill, checked) => {
                debug!(%skill, checked, "skill toggled");
                self.application.additional_skills.set(skill, checked);
            }
        }
    }

    /// Clears every field the selected position does not use.
    ///
    /// Called synchronously after each position change, so no reader ever
    /// sees a stale dependent field.
    pub fn on_position_change(&mut self) {
        let position = self.application.position;
        let app = &mut self.application;
        if !position.uses_relevant_experience() && !app.relevant_experience.is_empty() {
            debug!(%position, "clearing relevant experience");
            app.relevant_experience.clear();
        }
        if !position.uses_portfolio() && !app.portfolio_url.is_empty() {
            debug!(%position, "clearing portfolio url");
            app.portfolio_url.clear();
        }
        if !position.uses_management_experience() && !app.management_experience.is_empty() {
            debug!(%position, "clearing management experience");
            app.management_experience.clear();
        }
    }

    /// Returns the fields shown for the current position, in form order.
    pub fn visible_fields(&self) -> Vec<Field> {
        let position = self.application.position;
        Field::all()
            .iter()
            .copied()
            .filter(|&field| shows(position, field))
            .collect()
    }
}

/// Whether `field` is part of the form for `position`.
fn shows(position: Position, field: Field) -> bool {
    match field {
        Field::RelevantExperience => position.uses_relevant_experience(),
        Field::PortfolioUrl => position.uses_portfolio(),
        Field::ManagementExperience => position.uses_management_experience(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn text(field: TextField, value: &str) -> FieldEdit {
        FieldEdit::Text(field, value.to_string())
    }

    fn dependent_fields_cleared(app: &Application) -> bool {
        (app.position.uses_relevant_experience() || app.relevant_experience.is_empty())
            && (app.position.uses_portfolio() || app.portfolio_url.is_empty())
            && (app.position.uses_management_experience() || app.management_experience.is_empty())
    }

    mod set_field {
        use super::*;

        #[test]
        fn overwrites_text() {
            let mut controller = FormController::new();
            controller.set_field(text(TextField::FullName, "Ada"));
            controller.set_field(text(TextField::FullName, "Ada Lovelace"));
            assert_eq!(controller.application().full_name, "Ada Lovelace");
        }

        #[test]
        fn skill_edit_leaves_other_skills() {
            let mut controller = FormController::new();
            controller.set_field(FieldEdit::Skill(Skill::JavaScript, true));
            controller.set_field(FieldEdit::Skill(Skill::Python, true));
            controller.set_field(FieldEdit::Skill(Skill::JavaScript, false));
            let skills = controller.application().additional_skills;
            assert!(!skills.get(Skill::JavaScript));
            assert!(!skills.get(Skill::Css));
            assert!(skills.get(Skill::Python));
        }

        #[test]
        fn hidden_field_edit_is_dropped() {
            let mut controller = FormController::new();
            controller.set_field(FieldEdit::Position(Position::Manager));
            controller.set_field(text(TextField::RelevantExperience, "5"));
            controller.set_field(text(TextField::PortfolioUrl, "https://ex.com"));
            assert_eq!(controller.application().relevant_experience, "");
            assert_eq!(controller.application().portfolio_url, "");
        }

        #[test]
        fn unselected_drops_every_dependent_edit() {
            let mut controller = FormController::new();
            controller.set_field(text(TextField::ManagementExperience, "2"));
            assert_eq!(controller.application().management_experience, "");
        }

        #[test]
        fn position_edit_selects_position() {
            let mut controller = FormController::new();
            controller.set_field(FieldEdit::Position(Position::Designer));
            assert_eq!(controller.position(), Position::Designer);
        }
    }

    mod position_change {
        use super::*;

        fn filled_designer() -> FormController {
            let mut controller = FormController::new();
            controller.set_field(FieldEdit::Position(Position::Designer));
            controller.set_field(text(TextField::RelevantExperience, "4"));
            controller.set_field(text(TextField::PortfolioUrl, "https://ex.com"));
            controller
        }

        #[test]
        fn designer_to_developer_clears_portfolio_only() {
            let mut controller = filled_designer();
            controller.set_field(FieldEdit::Position(Position::Developer));
            assert_eq!(controller.application().relevant_experience, "4");
            assert_eq!(controller.application().portfolio_url, "");
        }

        #[test]
        fn designer_to_manager_clears_both() {
            let mut controller = filled_designer();
            controller.set_field(FieldEdit::Position(Position::Manager));
            assert_eq!(controller.application().relevant_experience, "");
            assert_eq!(controller.application().portfolio_url, "");
        }

        #[test]
        fn manager_to_unselected_clears_management_experience() {
            let mut controller = FormController::new();
            controller.set_field(FieldEdit::Position(Position::Manager));
            controller.set_field(text(TextField::ManagementExperience, "5 years"));
            controller.set_field(FieldEdit::Position(Position::Unselected));
            assert_eq!(controller.application().management_experience, "");
        }

        #[test]
        fn reselecting_same_position_keeps_values() {
            let mut controller = filled_designer();
            controller.set_field(FieldEdit::Position(Position::Designer));
            assert_eq!(controller.application().relevant_experience, "4");
            assert_eq!(controller.application().portfolio_url, "https://ex.com");
        }

        #[test]
        fn unrelated_fields_survive() {
            let mut controller = filled_designer();
            controller.set_field(text(TextField::Email, "a@b.co"));
            controller.set_field(FieldEdit::Skill(Skill::Css, true));
            controller.set_field(FieldEdit::Position(Position::Manager));
            assert_eq!(controller.application().email, "a@b.co");
            assert!(controller.application().additional_skills.get(Skill::Css));
        }

        #[test]
        fn from_application_normalizes_record() {
            let app = Application {
                position: Position::Manager,
                relevant_experience: "3".into(),
                portfolio_url: "https://ex.com".into(),
                management_experience: "lots".into(),
                ..Application::default()
            };
            let controller = FormController::from_application(app);
            assert_eq!(controller.application().relevant_experience, "");
            assert_eq!(controller.application().portfolio_url, "");
            assert_eq!(controller.application().management_experience, "lots");
        }

        #[quickcheck]
        fn dependent_fields_always_cleared(edits: Vec<FieldEdit>) -> bool {
            let mut controller = FormController::new();
            edits.into_iter().all(|edit| {
                controller.set_field(edit);
                dependent_fields_cleared(controller.application())
            })
        }
    }

    mod visibility {
        use super::*;

        fn visible_for(position: Position) -> Vec<Field> {
            let mut controller = FormController::new();
            controller.set_field(FieldEdit::Position(position));
            controller.visible_fields()
        }

        #[test]
        fn unselected_hides_all_dependent_fields() {
            assert_eq!(
                visible_for(Position::Unselected),
                vec![
                    Field::FullName,
                    Field::Email,
                    Field::PhoneNumber,
                    Field::Position,
                    Field::AdditionalSkills,
                    Field::PreferredInterviewTime,
                ]
            );
        }

        #[test]
        fn developer_shows_relevant_experience() {
            let fields = visible_for(Position::Developer);
            assert!(fields.contains(&Field::RelevantExperience));
            assert!(!fields.contains(&Field::PortfolioUrl));
            assert!(!fields.contains(&Field::ManagementExperience));
        }

        #[test]
        fn designer_shows_experience_and_portfolio() {
            let fields = visible_for(Position::Designer);
            assert!(fields.contains(&Field::RelevantExperience));
            assert!(fields.contains(&Field::PortfolioUrl));
            assert!(!fields.contains(&Field::ManagementExperience));
        }

        #[test]
        fn manager_shows_management_experience_after_position() {
            let fields = visible_for(Position::Manager);
            assert_eq!(fields[3], Field::Position);
            assert_eq!(fields[4], Field::ManagementExperience);
            assert_eq!(fields.len(), 7);
        }
    }
}

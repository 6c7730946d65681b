//! Application form screen — field entry with position-dependent fields.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{info, warn};

use crate::model::{
    Application, ErrorMap, Field, FieldEdit, FormController, Position, Skill, TextField,
    Validator,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, ROW_HEIGHT, draw_form};

/// State for the application form screen.
#[derive(Debug, Clone)]
pub struct ApplicationFormState {
    controller: FormController,
    validator: Validator,
    errors: ErrorMap,
    /// Fields currently shown, parallel to the form's rows.
    fields: Vec<Field>,
    form: Form,
    skill_cursor: Skill,
}

impl Default for ApplicationFormState {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}

impl ApplicationFormState {
    /// Creates an empty form checked by `validator` on submit.
    pub fn new(validator: Validator) -> Self {
        let mut state = Self {
            controller: FormController::new(),
            validator,
            errors: ErrorMap::default(),
            fields: Vec::new(),
            form: Form::new(Vec::new()),
            skill_cursor: Skill::JavaScript,
        };
        state.sync();
        state
    }

    /// Returns the record being edited.
    pub fn application(&self) -> &Application {
        self.controller.application()
    }

    /// Returns the errors from the last submit attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the field that has focus.
    pub fn focused_field(&self) -> Field {
        self.fields
            .get(self.form.focus())
            .copied()
            .unwrap_or(Field::FullName)
    }

    /// Returns the skill the checkbox cursor is on.
    pub fn skill_cursor(&self) -> Skill {
        self.skill_cursor
    }

    /// Errors for fields that are not currently shown, joined for display.
    ///
    /// Only the ungated experience rule can produce these.
    pub fn hidden_error(&self) -> Option<String> {
        let messages: Vec<String> = self
            .errors
            .iter()
            .filter(|(field, _)| !self.fields.contains(field))
            .map(|(_, err)| err.to_string())
            .collect();
        (!messages.is_empty()).then(|| messages.join("; "))
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => {
                match self.focused_field() {
                    Field::Position => self.handle_position_key(key.code),
                    Field::AdditionalSkills => self.handle_skills_key(key.code),
                    field => {
                        if let Some(text) = field.as_text() {
                            self.handle_text_key(text, key.code);
                        }
                    }
                }
                Action::None
            }
        }
    }

    fn handle_position_key(&mut self, code: KeyCode) {
        let forward = match code {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            _ => return,
        };
        let position = cycle(Position::all(), self.controller.position(), forward);
        self.apply(FieldEdit::Position(position));
    }

    fn handle_skills_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right => self.skill_cursor = cycle(Skill::all(), self.skill_cursor, true),
            KeyCode::Left => self.skill_cursor = cycle(Skill::all(), self.skill_cursor, false),
            KeyCode::Char(' ') => {
                let skill = self.skill_cursor;
                let checked = self.application().additional_skills.get(skill);
                self.apply(FieldEdit::Skill(skill, !checked));
                return;
            }
            _ => return,
        }
        self.sync();
    }

    fn handle_text_key(&mut self, field: TextField, code: KeyCode) {
        let mut value = self.application().text(field).to_string();
        match code {
            KeyCode::Char(ch) => match accept_char(field, ch) {
                Some(ch) => value.push(ch),
                None => return,
            },
            KeyCode::Backspace => {
                if value.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }
        self.apply(FieldEdit::Text(field, value));
    }

    fn apply(&mut self, edit: FieldEdit) {
        self.controller.set_field(edit);
        self.sync();
    }

    /// Runs validation; the app moves to the summary only when nothing fails.
    fn submit(&mut self) -> Action {
        self.errors = self.validator.validate(self.application());
        self.sync();

        if self.errors.is_empty() {
            info!(position = %self.controller.position(), "application submitted");
            Action::Submit
        } else {
            warn!(errors = self.errors.len(), "submit rejected");
            Action::None
        }
    }

    /// Rebuilds the form rows from the record, keeping focus on the same field.
    fn sync(&mut self) {
        let focused = self.focused_field();
        self.fields = self.controller.visible_fields();
        let rows = self.fields.iter().map(|&field| self.row(field)).collect();
        self.form.set_fields(rows);
        if let Some(index) = self.fields.iter().position(|&f| f == focused) {
            self.form.set_focus(index);
        }
    }

    fn row(&self, field: Field) -> FormField {
        let app = self.application();
        let label = field.label();
        let error = self.errors.get(field).map(|e| e.to_string());
        let row = match field {
            Field::Position => FormField::select(label, false, app.position.label()),
            Field::AdditionalSkills => {
                let options = Skill::all()
                    .iter()
                    .map(|&s| (s.name().to_string(), app.additional_skills.get(s)))
                    .collect();
                let cursor = Skill::all()
                    .iter()
                    .position(|&s| s == self.skill_cursor)
                    .unwrap_or(0);
                FormField::check_group(label, true, options, cursor)
            }
            Field::PreferredInterviewTime => FormField::new(
                "Preferred Interview Time (YYYY-MM-DDTHH:MM)",
                true,
            )
            .with_value(app.preferred_interview_time.as_str()),
            other => {
                let value = other.as_text().map(|t| app.text(t)).unwrap_or_default();
                FormField::new(label, true).with_value(value)
            }
        };
        row.with_error(error)
    }
}

impl ScreenState for ApplicationFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        ApplicationFormState::handle_key(self, key)
    }
}

/// Filters typed characters the way each input type would.
fn accept_char(field: TextField, ch: char) -> Option<char> {
    match field {
        TextField::RelevantExperience => {
            (ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')).then_some(ch)
        }
        TextField::PreferredInterviewTime => match ch {
            't' | 'T' => Some('T'),
            '0'..='9' | '-' | ':' => Some(ch),
            _ => None,
        },
        _ => Some(ch),
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the application form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_application_form(state: &ApplicationFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Job Application Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = ROW_HEIGHT * state.form().fields().len() as u16;
    let [form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    if let Some(err) = state.hidden_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  \u{2190}/\u{2192}/Space: choose  Enter: submit  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

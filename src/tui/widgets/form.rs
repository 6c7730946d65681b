//! Reusable form widget: labelled inputs with focus management.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// How a [`FormField`] is edited and drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text with a cursor.
    Text,
    /// One choice out of several, cycled with arrow keys.
    Select,
    /// A row of checkboxes; `cursor` is the option arrow keys act on.
    CheckGroup {
        options: Vec<(String, bool)>,
        cursor: usize,
    },
}

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Current text value (the selected option for [`FieldKind::Select`]).
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field is marked as required.
    pub required: bool,
    /// Editing style of the field.
    pub kind: FieldKind,
}

impl FormField {
    /// Creates a new empty text field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
            required,
            kind: FieldKind::Text,
        }
    }

    /// Creates a select field showing `value`.
    pub fn select(label: impl Into<String>, required: bool, value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Select,
            ..Self::new(label, required).with_value(value)
        }
    }

    /// Creates a checkbox group.
    pub fn check_group(
        label: impl Into<String>,
        required: bool,
        options: Vec<(String, bool)>,
        cursor: usize,
    ) -> Self {
        Self {
            kind: FieldKind::CheckGroup { options, cursor },
            ..Self::new(label, required)
        }
    }

    /// Sets the text value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets or clears the error message.
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// A multi-field form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Focuses the field at `index`; out-of-range indices are clamped.
    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.fields.len().saturating_sub(1));
    }

    /// Replaces all fields, keeping focus in range.
    pub fn set_fields(&mut self, fields: Vec<FormField>) {
        self.fields = fields;
        self.set_focus(self.focus);
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Height of one field row, border included.
pub const ROW_HEIGHT: u16 = 3;

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(field_line(field, is_focused)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error text sits on the bottom border of the row
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + ROW_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

fn field_line(field: &FormField, is_focused: bool) -> Line<'_> {
    match &field.kind {
        FieldKind::Text => {
            let mut spans = vec![Span::raw(field.value.as_str())];
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        }
        FieldKind::Select if is_focused => Line::from(vec![
            Span::styled("\u{25c0} ", Style::default().fg(Color::Yellow)),
            Span::raw(field.value.as_str()),
            Span::styled(" \u{25b6}", Style::default().fg(Color::Yellow)),
        ]),
        FieldKind::Select => Line::from(field.value.as_str()),
        FieldKind::CheckGroup { options, cursor } => {
            let mut spans = Vec::new();
            for (i, (name, checked)) in options.iter().enumerate() {
                let mark = if *checked { "[x]" } else { "[ ]" };
                let style = if is_focused && i == *cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!("{mark} {name}"), style));
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        }
    }
}

//! Summary screen — read-only view of a submitted application.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Application, Summary};
use crate::tui::action::{Action, ScreenState};

/// State for the summary screen. The application itself stays with the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryState;

impl SummaryState {
    /// Creates the summary screen state.
    pub fn new() -> Self {
        Self
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('e') | KeyCode::Enter => Action::Edit,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

impl ScreenState for SummaryState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        SummaryState::handle_key(self, key)
    }
}

/// Renders the summary of `application`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_summary(application: &Application, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Application Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from("")];
    for row in Summary::new(application).rows() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", row.label), label_style),
            Span::raw(row.value.clone()),
        ]));
    }

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(content, content_area);

    let footer = Paragraph::new(Line::from("e/Enter: edit  q/Esc: quit"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::{Position, Skill};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn render(application: &Application, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_summary(application, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn e_and_enter_edit() {
        let mut state = SummaryState::new();
        assert_eq!(state.handle_key(press(KeyCode::Char('e'))), Action::Edit);
        assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::Edit);
    }

    #[test]
    fn q_and_esc_quit() {
        let mut state = SummaryState::new();
        assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn other_keys_ignored() {
        let mut state = SummaryState::new();
        assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn renders_rows_and_skills() {
        let mut app = Application {
            full_name: "Ada Lovelace".into(),
            email: "ada@ex.com".into(),
            phone_number: "123".into(),
            position: Position::Developer,
            relevant_experience: "7".into(),
            preferred_interview_time: "2024-01-01T10:00".into(),
            ..Application::default()
        };
        app.additional_skills.set(Skill::JavaScript, true);
        app.additional_skills.set(Skill::Python, true);

        let output = render(&app, 70, 16);
        assert!(output.contains("Application Summary"));
        assert!(output.contains("Full Name: Ada Lovelace"));
        assert!(output.contains("Relevant Experience: 7"));
        assert!(output.contains("Additional Skills: JavaScript, Python"));
        assert!(!output.contains("Portfolio URL"));
        assert!(output.contains("e/Enter: edit"));
    }
}

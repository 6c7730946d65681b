//! Status bar widget — one-line summary of the form session.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Position;

/// Data passed to the status bar widget; decoupled from `App`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The selected position.
    pub position: Position,
    /// Whether the application has been submitted.
    pub submitted: bool,
    /// Number of fields failing the last submit attempt.
    pub error_count: usize,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned):
/// - Editing, no errors:   `Developer  EDITING`
/// - Editing, with errors: `Developer  EDITING  3 errors` (count in Red)
/// - Submitted:            `Developer  SUBMITTED` (in Green)
/// - No position:          `No position  EDITING`
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);

    let position = match ctx.position {
        Position::Unselected => "No position",
        other => other.as_str(),
    };

    let mut spans = vec![Span::styled(position, cyan), Span::styled("  ", cyan)];

    if ctx.submitted {
        spans.push(Span::styled("SUBMITTED", green));
    } else {
        spans.push(Span::styled("EDITING", cyan));
        match ctx.error_count {
            0 => {}
            1 => spans.push(Span::styled("  1 error", red)),
            n => spans.push(Span::styled(format!("  {n} errors"), red)),
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

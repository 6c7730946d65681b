use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::info;

use crate::model::{Application, Validator};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ApplicationFormState, HelpState, SummaryState, draw_application_form, draw_help,
    draw_summary,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter and correct the application.
    Form,
    /// Read-only view of the submitted application.
    Summary,
    /// Show keybinding help.
    Help,
}

/// Whether the application is still being edited or has been submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Editing,
    Submitted,
}

/// Top-level application state, passed whole to rendering.
pub struct App {
    screen: Screen,
    stage: Stage,
    form: ApplicationFormState,
    summary: SummaryState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::Form`] screen with an empty application.
    pub fn new(validator: Validator) -> Self {
        Self {
            screen: Screen::Form,
            stage: Stage::Editing,
            form: ApplicationFormState::new(validator),
            summary: SummaryState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Form => draw_application_form(&self.form, frame, main_area),
            Screen::Summary => draw_summary(self.form.application(), frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        draw_status_bar(&self.status_context(), frame, status_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Form => ScreenState::handle_key(&mut self.form, key),
            Screen::Summary => ScreenState::handle_key(&mut self.summary, key),
            Screen::Help => ScreenState::handle_key(&mut self.help, key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit => {
                info!("showing summary");
                self.stage = Stage::Submitted;
                self.screen = Screen::Summary;
            }
            Action::Edit => {
                info!("returning to form");
                self.stage = Stage::Editing;
                self.screen = Screen::Form;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            position: self.form.application().position,
            submitted: self.stage == Stage::Submitted,
            error_count: self.form.errors().len(),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns whether the application is being edited or was submitted.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the form screen state.
    pub fn form(&self) -> &ApplicationFormState {
        &self.form
    }

    /// Returns the application if it has been submitted.
    pub fn submitted_application(&self) -> Option<&Application> {
        (self.stage == Stage::Submitted).then(|| self.form.application())
    }
}

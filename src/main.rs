#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use jobform::config::Config;
use jobform::logging;
use jobform::tui::{App, AppError};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), AppError> {
    let config = Config::load()?;
    let logged = logging::default_log_path().map(|path| logging::init(&config.log_filter, &path));
    if let Some(Err(e)) = logged {
        eprintln!("jobform: logging disabled: {e}");
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config.validator());
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    result?;
    restore_result?;

    if let Some(application) = app.submitted_application() {
        println!("{}", serde_json::to_string_pretty(application)?);
    }
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}

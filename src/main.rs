use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

use wikitype::{
    app::App,
    runtime::{AppEvent, CrosstermEventSource, EventSource},
    sample,
    term::TerminalGuard,
};

/// terminal typing practice against random wikipedia summaries
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Fetches a random Wikipedia page summary and runs an interactive typing test against it. Accented characters in the sample are folded to plain ASCII, so you can type them without a special keyboard layout."
)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // Fetch before touching terminal modes; a failed fetch degrades to
    // the fallback sample and the test still runs.
    let mut app = App::new(sample::fetch_sample());

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut CrosstermEventSource);

    // Leave the interactive region before printing anything, and before
    // surfacing any terminal fault.
    terminal.show_cursor()?;
    guard.restore()?;
    result?;

    let message = app.final_message();
    if !message.is_empty() {
        println!("{message}");
    }

    Ok(())
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut dyn EventSource,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match events.next()? {
            AppEvent::Key(key) => app.on_key(key),
            AppEvent::Resize => {}
        }

        if app.screen.is_terminal() {
            return Ok(());
        }
    }
}

//! The app loop: draw, pump events, route them.

use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::api::SummarizeClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(
    runtime: tokio::runtime::Handle,
    config: Config,
    config_path: PathBuf,
    initial_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let client = SummarizeClient::new(&config.service)?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(runtime, client, config, config_path, events.sender());

    // The CLI channel goes through the same select() as the typed one.
    if let Some(path) = initial_file {
        app.select_path(&path);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SubmissionDone(result)) => app.on_submission_done(result),
            Ok(AppEvent::DownloadDone(result)) => app.on_download_done(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

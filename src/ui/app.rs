//! The app: owns the workflow controller, routes intents, spawns the one
//! outstanding request.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{ApiError, SummarizeClient, SummarizeResponse};
use crate::config::Config;
use crate::ui::clipboard::ClipboardHandler;
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::notice::NoticeBoard;
use crate::ui::screen::{Control, ScreenIntent, ScreenReducer, ScreenState};
use crate::workflow::{SubmissionController, WorkflowError, NO_FILE_MESSAGE};

const NOTICE_TTL: Duration = Duration::from_secs(4);

pub struct App {
    should_quit: bool,
    screen: ScreenState,
    controller: SubmissionController,
    client: SummarizeClient,
    config: Config,
    config_path: PathBuf,
    dark_mode: bool,
    notices: NoticeBoard,
    events_tx: Sender<AppEvent>,
    runtime: tokio::runtime::Handle,
    /// One artifact retrieval at a time; independent of the submit guard.
    downloading: bool,
    /// Created on first copy; headless environments may have none.
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(
        runtime: tokio::runtime::Handle,
        client: SummarizeClient,
        config: Config,
        config_path: PathBuf,
        events_tx: Sender<AppEvent>,
    ) -> Self {
        let dark_mode = config.effective_dark_mode();
        Self {
            should_quit: false,
            screen: ScreenState::default(),
            controller: SubmissionController::new(),
            client,
            config,
            config_path,
            dark_mode,
            notices: NoticeBoard::new(NOTICE_TTL),
            events_tx,
            runtime,
            downloading: false,
            clipboard: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn server_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn is_downloading(&self) -> bool {
        self.downloading
    }

    fn dispatch(&mut self, intent: ScreenIntent) {
        self.screen = ScreenReducer::reduce(std::mem::take(&mut self.screen), intent);
    }

    pub fn on_tick(&mut self) {
        self.notices.prune();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('d') => self.start_download(),
                KeyCode::Char('s') => self.start_submission(),
                KeyCode::Char('y') => self.copy_summary(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.dispatch(ScreenIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.dispatch(ScreenIntent::FocusPrev),
            KeyCode::Enter => match self.screen.focused {
                Control::PathInput => self.select_from_input(),
                Control::Submit => self.start_submission(),
                _ => {}
            },
            KeyCode::Left => self.adjust_focused_param(-1),
            KeyCode::Right => self.adjust_focused_param(1),
            KeyCode::Char(c) => match self.screen.focused {
                Control::PathInput => self.dispatch(ScreenIntent::TypeChar(c)),
                focused if focused.is_parameter() && (c == '+' || c == '=') => {
                    self.adjust_focused_param(1)
                }
                focused if focused.is_parameter() && c == '-' => self.adjust_focused_param(-1),
                _ => {}
            },
            KeyCode::Backspace => self.dispatch(ScreenIntent::Backspace),
            _ => {}
        }
    }

    fn adjust_focused_param(&mut self, delta: i32) {
        match self.screen.focused {
            Control::Ratio => self.controller.params_mut().step_ratio(delta),
            Control::MinSentences => self.controller.params_mut().step_min_sentences(delta),
            Control::MaxSentences => self.controller.params_mut().step_max_sentences(delta),
            _ => {}
        }
    }

    fn select_from_input(&mut self) {
        let raw = self.screen.path_input.trim().to_string();
        if raw.is_empty() {
            return;
        }
        self.select_path(Path::new(&raw));
    }

    /// Single selection entry point for both input channels (typed path,
    /// CLI argument): identical validation and reset side effects.
    pub fn select_path(&mut self, path: &Path) {
        let selected = self
            .controller
            .select_file(path)
            .map(|document| format!("File \"{}\" selected!", document.name()));
        match selected {
            Ok(text) => {
                self.dispatch(ScreenIntent::SetInput(path.display().to_string()));
                self.notices.info(text);
            }
            // Advisory only: held document and outcome stay untouched.
            Err(err) => self.notices.error(err.to_string()),
        }
    }

    /// Admission plus dispatch. The submit control is suppressed while the
    /// controller reports busy, so a second request cannot start.
    fn start_submission(&mut self) {
        if self.controller.is_busy() {
            return;
        }
        match self.controller.begin() {
            Ok(request) => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                self.runtime.spawn(async move {
                    let result = client.summarize(&request).await;
                    let _ = tx.send(AppEvent::SubmissionDone(result));
                });
            }
            Err(WorkflowError::NoFileSelected) => self.notices.error(NO_FILE_MESSAGE),
            Err(WorkflowError::SubmissionInFlight) => {}
            Err(err @ WorkflowError::DocumentRead { .. }) => self.notices.error(err.to_string()),
        }
    }

    pub fn on_submission_done(&mut self, result: Result<SummarizeResponse, ApiError>) {
        self.controller.finish(result);
        let failure = self
            .controller
            .outcome()
            .failure_message()
            .map(str::to_string);
        match failure {
            None => self.notices.success("Summary generated successfully!"),
            Some(message) => self.notices.error(message),
        }
    }

    /// Resolve the stored artifact into a local file. Only reachable when
    /// the outcome holds a descriptor; retrieval may still fail on its own.
    fn start_download(&mut self) {
        if self.downloading {
            return;
        }
        let Some(artifact) = self.controller.outcome().artifact().cloned() else {
            return;
        };
        self.downloading = true;
        self.notices.info("Downloading summary...");

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = match client.download(&artifact).await {
                Ok(bytes) => {
                    let target = PathBuf::from(&artifact.download_name);
                    std::fs::write(&target, bytes)
                        .map(|_| target)
                        .map_err(|e| format!("could not save '{}': {}", artifact.download_name, e))
                }
                Err(err) => Err(err.user_message()),
            };
            let _ = tx.send(AppEvent::DownloadDone(result));
        });
    }

    pub fn on_download_done(&mut self, result: Result<PathBuf, String>) {
        self.downloading = false;
        match result {
            Ok(path) => self.notices.success(format!("Saved {}", path.display())),
            Err(message) => self.notices.error(message),
        }
    }

    /// Copy the displayed summary to the system clipboard.
    fn copy_summary(&mut self) {
        let Some(summary) = self.controller.outcome().summary().map(str::to_string) else {
            return;
        };
        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard unavailable");
                    self.notices.error("Clipboard unavailable");
                    return;
                }
            }
        }
        let Some(handler) = self.clipboard.as_mut() else {
            return;
        };
        match handler.set_text(&summary) {
            Ok(()) => self.notices.success("Copied!"),
            Err(message) => self.notices.error(message),
        }
    }

    fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.config.appearance.dark_mode = Some(self.dark_mode);
        if let Err(err) = self.config.save(&self.config_path) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }
}

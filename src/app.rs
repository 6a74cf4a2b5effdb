//! Application controller: key handling and the generation request

use crate::agent::{AgentClientTrait, AGENT_ID};
use crate::state::{
    AppState, FieldEdit, FocusTarget, Form, GenerationOutcome, Preset, NETWORK_FAILURE_MESSAGE,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Agent client used for generation requests
    client: Arc<dyn AgentClientTrait>,
    /// Outcomes of finished requests, drained by the event loop
    outcome_tx: mpsc::UnboundedSender<GenerationOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<GenerationOutcome>,
    /// The single request allowed in flight
    pending: Option<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn AgentClientTrait>, preset: Preset) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(preset),
            client,
            outcome_tx,
            outcome_rx,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while a generation request is outstanding
    pub fn request_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and, if valid, send it to the agent in the
    /// background. Also serves as the manual retry.
    pub fn generate(&mut self) {
        if self.request_in_flight() {
            return;
        }
        let Some(prompt) = self.state.begin_generation() else {
            return;
        };

        info!(agent_id = AGENT_ID, bytes = prompt.len(), "sending generation request");
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            let reply = client.generate(&prompt, AGENT_ID).await;
            if let Err(err) = &reply {
                error!(error = %err, "agent request failed");
            }
            let _ = tx.send(GenerationOutcome::from_reply(&reply));
        }));
    }

    /// Apply any finished request to the state
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }

        // The task sends before it finishes, so a finished task with an
        // empty channel died without reporting.
        if self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            let outcome = self.outcome_rx.try_recv().unwrap_or_else(|_| {
                error!("generation task ended without an outcome");
                GenerationOutcome::Failure {
                    message: NETWORK_FAILURE_MESSAGE.to_string(),
                }
            });
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: GenerationOutcome) {
        self.pending = None;
        self.state.finish_generation(outcome);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global quit
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit = true;
            return Ok(());
        }

        // Fallback screen only offers "try again"
        if self.state.render_fault.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                info!("recovering from render fault");
                self.state.clear_render_fault();
            }
            return Ok(());
        }

        // Everything is disabled while the request is in flight
        if self.state.is_loading() {
            return Ok(());
        }

        self.state.status_message = None;

        match key.code {
            KeyCode::Char('g') if ctrl => self.generate(),
            KeyCode::Char('t') if ctrl => {
                self.state.toggle_sample();
            }
            KeyCode::Char('r') if ctrl && self.state.submission.has_outcome() => {
                self.state.reset();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_pdf_url();
            }
            KeyCode::Esc => {
                self.state.dismiss_banner();
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => match self.state.focused() {
                FocusTarget::GenerateButton => self.generate(),
                FocusTarget::ResetButton => {
                    self.state.reset();
                }
                FocusTarget::Field(_) => self.state.next_focus(),
            },
            KeyCode::Right => {
                self.state.apply_edit(FieldEdit::NextChoice);
            }
            KeyCode::Left => {
                self.state.apply_edit(FieldEdit::PrevChoice);
            }
            KeyCode::Backspace => {
                self.state.apply_edit(FieldEdit::Backspace);
            }
            KeyCode::Char(' ') if self.focused_on_choice() => {
                self.state.apply_edit(FieldEdit::NextChoice);
            }
            KeyCode::Char(c) if !ctrl => {
                self.state.apply_edit(FieldEdit::Insert(c));
            }
            _ => {}
        }
        Ok(())
    }

    fn focused_on_choice(&self) -> bool {
        matches!(
            self.state.focused(),
            FocusTarget::Field(field) if field.kind().choices().is_some()
        )
    }

    /// Put the generated document link on the system clipboard
    fn copy_pdf_url(&mut self) {
        let Some(url) = self.state.submission.pdf_url().map(str::to_string) else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(url)) {
            Ok(()) => {
                self.state.status_message = Some("PDF link copied to clipboard".to_string());
            }
            Err(err) => {
                warn!(error = %err, "clipboard unavailable");
                self.state.status_message = Some("Could not access the clipboard".to_string());
            }
        }
    }
}

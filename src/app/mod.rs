//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AnalysisLink`] - debounced hand-off of edits to the analyzer
//! - [`FlushOutcome`] - what a debounce flush did

mod handlers;
mod link;

pub use link::{AnalysisLink, FlushOutcome};

use std::time::Instant;

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::warn;

use crate::models::Language;
use crate::state::{Action, Effect, Page, ViewState};
use crate::websocket::{WsConnectionState, WsIncomingMessage};
use crate::widgets::CodeEditor;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// View-state store (page, snippet, language, latest result)
    pub state: ViewState,
    /// Source editor on the dashboard
    pub editor: CodeEditor,
    /// Debounced link to the analyzer
    pub link: AnalysisLink,
    /// Endpoint shown on the About page
    pub endpoint: String,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
}

impl App {
    pub fn new(link: AnalysisLink, endpoint: impl Into<String>) -> Self {
        let mut state = ViewState::new();
        state.apply(Action::ConnectionChanged(link.connection_state()));
        Self {
            state,
            editor: CodeEditor::new(),
            link,
            endpoint: endpoint.into(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Preload the editor and schedule the first analysis.
    pub fn with_snippet(mut self, code: &str) -> Self {
        self.editor.set_text(code);
        self.sync_snippet(Instant::now());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.state.apply(Action::SelectLanguage(language));
        self
    }

    pub fn page(&self) -> Page {
        self.state.page()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Run an action through the reducer and carry out its effect.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        self.mark_dirty();
        if let Some(effect) = self.state.apply(action) {
            match effect {
                Effect::ScheduleAnalysis(code) => self.link.schedule(code, now),
            }
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.dispatch(Action::Navigate(page), Instant::now());
    }

    pub fn handle_incoming(&mut self, msg: WsIncomingMessage) {
        self.dispatch(Action::Incoming(msg), Instant::now());
    }

    pub fn handle_connection_state(&mut self, state: WsConnectionState) {
        if state != self.state.connection() {
            self.dispatch(Action::ConnectionChanged(state), Instant::now());
        }
    }

    /// Apply every message already waiting on `rx`, oldest first.
    ///
    /// Returns how many were applied.
    pub fn drain_incoming(&mut self, rx: &mut broadcast::Receiver<WsIncomingMessage>) -> usize {
        let mut applied = 0;
        loop {
            match rx.try_recv() {
                Ok(msg) => {
                    self.handle_incoming(msg);
                    applied += 1;
                }
                Err(TryRecvError::Lagged(n)) => {
                    warn!("Skipped {} analysis results", n);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        applied
    }

    /// Push the editor buffer into the view-state if it changed.
    pub(crate) fn sync_snippet(&mut self, now: Instant) {
        let text = self.editor.text();
        if text != self.state.snippet() {
            self.dispatch(Action::EditSnippet(text), now);
        }
    }

    /// Flush the debounced snippet if due.
    pub async fn flush_due(&mut self, now: Instant) -> FlushOutcome {
        self.link.flush_due(now).await
    }

    /// Discard pending work and close the connection.
    pub async fn unmount(&mut self) {
        self.link.unmount().await;
    }
}

//! The single view-state container and its reducer.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::models::{AnalysisResult, Language};
use crate::scoring::{self, ScoreBreakdown};
use crate::websocket::{WsConnectionState, WsIncomingMessage};

use super::Page;

/// Everything that can change the view-state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Page),
    EditSnippet(String),
    SelectLanguage(Language),
    CycleLanguage,
    Incoming(WsIncomingMessage),
    ConnectionChanged(WsConnectionState),
}

/// Side effects requested by the reducer, carried out by the app glue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send this snippet for analysis once edits settle
    ScheduleAnalysis(String),
}

/// View-state store: current page, snippet, language and latest analysis.
#[derive(Debug, Clone)]
pub struct ViewState {
    page: Page,
    snippet: String,
    language: Language,
    result: AnalysisResult,
    connection: WsConnectionState,
    last_update: Option<DateTime<Local>>,
    received_count: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            page: Page::default(),
            snippet: String::new(),
            language: Language::default(),
            result: AnalysisResult::placeholder(),
            connection: WsConnectionState::default(),
            last_update: None,
            received_count: 0,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn connection(&self) -> WsConnectionState {
        self.connection
    }

    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.last_update
    }

    /// Whether any analysis has arrived yet (false while the placeholder shows).
    pub fn has_analysis(&self) -> bool {
        self.received_count > 0
    }

    pub fn received_count(&self) -> u64 {
        self.received_count
    }

    /// Composite score of the current result.
    pub fn score(&self) -> ScoreBreakdown {
        scoring::composite_score(&self.result)
    }

    /// Apply an action and report any effect the app should carry out.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Navigate(page) => {
                debug!("Navigate {:?} -> {:?}", self.page, page);
                self.page = page;
                None
            }
            Action::EditSnippet(code) => {
                if code == self.snippet {
                    return None;
                }
                self.snippet = code;
                Some(Effect::ScheduleAnalysis(self.snippet.clone()))
            }
            Action::SelectLanguage(language) => {
                self.language = language;
                None
            }
            Action::CycleLanguage => {
                self.language = self.language.next();
                None
            }
            Action::Incoming(WsIncomingMessage::Analysis(result)) => {
                self.result = *result;
                self.last_update = Some(Local::now());
                self.received_count += 1;
                None
            }
            Action::Incoming(WsIncomingMessage::Rejected { error }) => {
                warn!("Analyzer rejected snippet, keeping previous result: {}", error);
                None
            }
            Action::ConnectionChanged(state) => {
                self.connection = state;
                None
            }
        }
    }
}

//! Color theme constants for the solidlens UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::models::PrincipleStatus;
use crate::scoring::{ScoreBand, StatusLabel};
use crate::websocket::WsConnectionState;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the active tab
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Verdict Colors
// ============================================================================

pub const COLOR_GOOD: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_FAIR: Color = Color::Yellow;

pub const COLOR_BAD: Color = Color::Red;

/// Neutral verdict (review / unknown)
pub const COLOR_NEUTRAL: Color = Color::Rgb(0, 122, 204); // blue #007ACC

pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => COLOR_GOOD,
        ScoreBand::Fair => COLOR_FAIR,
        ScoreBand::Weak => COLOR_BAD,
    }
}

pub fn status_label_color(label: StatusLabel) -> Color {
    match label {
        StatusLabel::Excellent | StatusLabel::Good => COLOR_GOOD,
        StatusLabel::Poor => COLOR_BAD,
        StatusLabel::Review => COLOR_NEUTRAL,
    }
}

pub fn principle_color(status: PrincipleStatus) -> Color {
    match status {
        PrincipleStatus::Pass => COLOR_GOOD,
        PrincipleStatus::Violation => COLOR_BAD,
        PrincipleStatus::Unknown => COLOR_NEUTRAL,
    }
}

pub fn connection_color(state: WsConnectionState) -> Color {
    match state {
        WsConnectionState::Open => COLOR_GOOD,
        WsConnectionState::Connecting => COLOR_FAIR,
        WsConnectionState::Closed => COLOR_BAD,
    }
}

//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the few sizing
//! questions the pages ask: stack or split, how many card columns.

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Editor and score panel go top/bottom instead of side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Editor/score split as `(left, right)` percentages.
    pub fn two_column_percents(&self) -> (u16, u16) {
        if self.width < breakpoints::MD_WIDTH {
            (55, 45)
        } else {
            (60, 40)
        }
    }

    /// Number of card columns that fit side by side.
    pub fn card_columns(&self) -> usize {
        if self.width < breakpoints::XS_WIDTH {
            1
        } else if self.width < breakpoints::MD_WIDTH {
            2
        } else {
            3
        }
    }
}

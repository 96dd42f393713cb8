//! Report pages and the navigation switch between them.

/// A page of the dashboard. Navigation is a flat switch: no history, no guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Results,
    SolidReport,
    ComplexityReport,
    CleanCodeReport,
    About,
    Help,
}

impl Page {
    /// All pages in tab order.
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Results,
        Page::SolidReport,
        Page::ComplexityReport,
        Page::CleanCodeReport,
        Page::About,
        Page::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Results => "Results",
            Page::SolidReport => "SOLID",
            Page::ComplexityReport => "Complexity",
            Page::CleanCodeReport => "Clean Code",
            Page::About => "About",
            Page::Help => "Help",
        }
    }

    /// Position in [`Page::ALL`], used to highlight the active tab.
    pub fn index(&self) -> usize {
        Page::ALL
            .iter()
            .position(|p| p == self)
            .unwrap_or_default()
    }

    /// Function key bound to this page (F1 = Dashboard ... F7 = Help).
    pub fn function_key(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_function_key(n: u8) -> Option<Page> {
        n.checked_sub(1)
            .and_then(|i| Page::ALL.get(i as usize))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_dashboard() {
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn test_function_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_function_key(page.function_key()), Some(page));
        }
        assert_eq!(Page::from_function_key(0), None);
        assert_eq!(Page::from_function_key(8), None);
    }
}

//! Sidebar pages.

use std::fmt;

/// The seven dashboard pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Analytics,
    Researchers,
    SurveyStatus,
    Schedule,
    Settings,
    Help,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Analytics,
        Page::Researchers,
        Page::SurveyStatus,
        Page::Schedule,
        Page::Settings,
        Page::Help,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Analytics => "analytics",
            Page::Researchers => "researchers",
            Page::SurveyStatus => "survey-status",
            Page::Schedule => "schedule",
            Page::Settings => "settings",
            Page::Help => "help",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Analytics => "Analytics",
            Page::Researchers => "Researchers",
            Page::SurveyStatus => "Survey Status",
            Page::Schedule => "Schedule",
            Page::Settings => "Settings",
            Page::Help => "Help & Support",
        }
    }

    /// Position in the sidebar, starting at 0.
    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// `'1'..='7'` to the page at that sidebar position.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Page::ALL.iter().copied().find(|p| p.id() == id)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

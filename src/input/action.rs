//! User actions produced by key presses.

use chrono::{DateTime, Local};

use crate::state::{Event, Page, PAGE_SCROLL};

/// Everything a key can do, independent of which key does it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit (q, Ctrl+C)
    Quit,
    /// Refetch both datasets (r)
    Refresh,
    /// Write the filtered view to CSV (e)
    Export,

    // =========================================================================
    // Navigation
    // =========================================================================
    /// Jump to a page (1-7)
    SelectPage(Page),
    /// Tab
    NextPage,
    /// Shift+Tab
    PrevPage,
    ScrollDown(usize),
    ScrollUp(usize),

    // =========================================================================
    // Layout and filters
    // =========================================================================
    ToggleSidebar,
    ToggleDarkMode,
    CycleModeFilter,
    CycleStatusFilter,

    // =========================================================================
    // Search box
    // =========================================================================
    StartSearch,
    EndSearch,
    SearchInput(char),
    SearchBackspace,
}

impl Action {
    /// Store event for this action; `now` stamps a refresh.
    pub fn into_event(self, now: DateTime<Local>) -> Event {
        match self {
            Action::Quit => Event::Quit,
            Action::Refresh => Event::Refresh { now },
            Action::Export => Event::Export,
            Action::SelectPage(page) => Event::SelectPage(page),
            Action::NextPage => Event::NextPage,
            Action::PrevPage => Event::PrevPage,
            Action::ScrollDown(n) => Event::ScrollDown(n),
            Action::ScrollUp(n) => Event::ScrollUp(n),
            Action::ToggleSidebar => Event::ToggleSidebar,
            Action::ToggleDarkMode => Event::ToggleDarkMode,
            Action::CycleModeFilter => Event::CycleModeFilter,
            Action::CycleStatusFilter => Event::CycleStatusFilter,
            Action::StartSearch => Event::StartSearch,
            Action::EndSearch => Event::EndSearch,
            Action::SearchInput(c) => Event::SearchInput(c),
            Action::SearchBackspace => Event::SearchBackspace,
        }
    }

    pub fn page_down() -> Self {
        Action::ScrollDown(PAGE_SCROLL)
    }

    pub fn page_up() -> Self {
        Action::ScrollUp(PAGE_SCROLL)
    }
}

//! Default keybindings for the dashboard.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::action::Action;
use crate::state::Page;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active while browsing pages
    pub browse: HashMap<KeyCombo, Action>,
    /// Active while the search box has focus; other characters are typed
    pub search_editing: HashMap<KeyCombo, Action>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            browse: HashMap::new(),
            search_editing: HashMap::new(),
        };
        config.setup_browse_bindings();
        config.setup_search_bindings();
        config
    }

    fn setup_browse_bindings(&mut self) {
        let b = &mut self.browse;

        b.insert(KeyCombo::plain(KeyCode::Char('q')), Action::Quit);
        b.insert(KeyCombo::ctrl(KeyCode::Char('c')), Action::Quit);
        b.insert(KeyCombo::plain(KeyCode::Char('r')), Action::Refresh);
        b.insert(KeyCombo::plain(KeyCode::Char('e')), Action::Export);

        for page in Page::ALL {
            let digit = char::from(b'1' + page.index() as u8);
            b.insert(KeyCombo::plain(KeyCode::Char(digit)), Action::SelectPage(page));
        }
        b.insert(KeyCombo::plain(KeyCode::Tab), Action::NextPage);
        // Terminals disagree on whether BackTab carries SHIFT
        b.insert(KeyCombo::plain(KeyCode::BackTab), Action::PrevPage);
        b.insert(KeyCombo::shift(KeyCode::BackTab), Action::PrevPage);

        b.insert(KeyCombo::plain(KeyCode::Char('j')), Action::ScrollDown(1));
        b.insert(KeyCombo::plain(KeyCode::Down), Action::ScrollDown(1));
        b.insert(KeyCombo::plain(KeyCode::Char('k')), Action::ScrollUp(1));
        b.insert(KeyCombo::plain(KeyCode::Up), Action::ScrollUp(1));
        b.insert(KeyCombo::plain(KeyCode::PageDown), Action::page_down());
        b.insert(KeyCombo::plain(KeyCode::PageUp), Action::page_up());

        b.insert(KeyCombo::plain(KeyCode::Char('b')), Action::ToggleSidebar);
        b.insert(KeyCombo::plain(KeyCode::Char('d')), Action::ToggleDarkMode);
        b.insert(KeyCombo::plain(KeyCode::Char('m')), Action::CycleModeFilter);
        b.insert(KeyCombo::plain(KeyCode::Char('s')), Action::CycleStatusFilter);
        b.insert(KeyCombo::plain(KeyCode::Char('/')), Action::StartSearch);
    }

    fn setup_search_bindings(&mut self) {
        let s = &mut self.search_editing;

        s.insert(KeyCombo::ctrl(KeyCode::Char('c')), Action::Quit);
        s.insert(KeyCombo::plain(KeyCode::Enter), Action::EndSearch);
        s.insert(KeyCombo::plain(KeyCode::Esc), Action::EndSearch);
        s.insert(KeyCombo::plain(KeyCode::Backspace), Action::SearchBackspace);
    }

    pub fn get_browse(&self, combo: &KeyCombo) -> Option<Action> {
        self.browse.get(combo).copied()
    }

    pub fn get_search_editing(&self, combo: &KeyCombo) -> Option<Action> {
        self.search_editing.get(combo).copied()
    }
}

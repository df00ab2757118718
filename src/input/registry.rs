//! Maps key events to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to actions.
///
/// While the search box has focus, its own bindings win and any other
/// printable character is typed into the box. Otherwise the browse bindings
/// apply.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    config: KeybindingConfig,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Action for `key`, or `None` when the key is unbound.
    pub fn dispatch(&self, key: KeyEvent, searching: bool) -> Option<Action> {
        let combo = normalize(key);

        if searching {
            if let Some(action) = self.config.get_search_editing(&combo) {
                return Some(action);
            }
            return match combo.code {
                KeyCode::Char(c) if !combo.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::SearchInput(c))
                }
                _ => None,
            };
        }

        self.config.get_browse(&combo)
    }
}

/// Drop SHIFT from characters; the case already carries it.
fn normalize(key: KeyEvent) -> KeyCombo {
    match key.code {
        KeyCode::Char(_) => KeyCombo::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        _ => KeyCombo::new(key.code, key.modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Page;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_keys() {
        let registry = ActionRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('6')), false),
            Some(Action::SelectPage(Page::Settings))
        );
        assert_eq!(registry.dispatch(key(KeyCode::Tab), false), Some(Action::NextPage));
        assert_eq!(
            registry.dispatch(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), false),
            Some(Action::PrevPage)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn test_search_mode_types_characters() {
        let registry = ActionRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), true),
            Some(Action::SearchInput('q'))
        );
        assert_eq!(
            registry.dispatch(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT), true),
            Some(Action::SearchInput('S'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('+')), true),
            Some(Action::SearchInput('+'))
        );
        assert_eq!(registry.dispatch(key(KeyCode::Esc), true), Some(Action::EndSearch));
        assert_eq!(
            registry.dispatch(key(KeyCode::Backspace), true),
            Some(Action::SearchBackspace)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Tab), true), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let registry = ActionRegistry::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_c, false), Some(Action::Quit));
        assert_eq!(registry.dispatch(ctrl_c, true), Some(Action::Quit));
    }
}

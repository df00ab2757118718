//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> ActionRegistry::dispatch() -> Action -> Event -> DashboardState
//! ```
//!
//! - [`action`]: the [`Action`] enum of user intents
//! - [`keybindings`]: default key map
//! - [`registry`]: [`ActionRegistry`] choosing bindings by search focus

pub mod action;
pub mod keybindings;
pub mod registry;

pub use action::Action;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::ActionRegistry;

//! View state for decoupling UI rendering from the store.
//!
//! Rendering is a pure function of [`RenderContext`]: the event loop builds
//! one from the [`crate::state::DashboardState`] for each frame and the `ui`
//! module only reads it.
//!
//! - [`RenderContext`]: borrowed roster plus precomputed metrics
//! - [`Theme`]: light and dark palettes

mod render_context;
mod theme;

pub use render_context::RenderContext;
pub use theme::Theme;

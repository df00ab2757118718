//! UI rendering for the dashboard
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ title        │ / search ...             │ last updated   │
//! ├──────────┬───────────────────────────────────────────────┤
//! │ sidebar  │ current page                                  │
//! │ 1..7     │                                               │
//! ├──────────┴───────────────────────────────────────────────┤
//! │ notice or keybind hints                                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering never mutates the store; everything is read through a
//! [`RenderContext`] built once per frame.

pub mod content;
mod footer;
mod header;
pub mod pages;
mod sidebar;
pub mod widgets;

use ratatui::{
    layout::{Constraint, Layout},
    widgets::Block,
    Frame,
};

use crate::state::DashboardState;
use crate::view_state::RenderContext;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame of the dashboard.
pub fn render(frame: &mut Frame, state: &DashboardState) {
    let ctx = RenderContext::new(state);
    let area = frame.area();

    frame.render_widget(Block::default().style(ctx.theme.base()), area);

    let [header_area, body, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);
    let [sidebar_area, page_area] = Layout::horizontal([
        Constraint::Length(sidebar::width(state.sidebar_open)),
        Constraint::Min(10),
    ])
    .areas(body);

    header::render(frame, header_area, &ctx);
    sidebar::render(frame, sidebar_area, &ctx);
    pages::render(frame, page_area, &ctx);
    footer::render(frame, footer_area, &ctx);
}

//! One module per sidebar page.

pub mod analytics;
pub mod dashboard;
pub mod help;
pub mod researchers;
pub mod schedule;
pub mod settings;
pub mod survey_status;

use ratatui::{layout::Rect, Frame};

use crate::state::Page;
use crate::view_state::RenderContext;

/// Render the current page into `area`.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    match ctx.state.page {
        Page::Dashboard => dashboard::render(frame, area, ctx),
        Page::Analytics => analytics::render(frame, area, ctx),
        Page::Researchers => researchers::render(frame, area, ctx),
        Page::SurveyStatus => survey_status::render(frame, area, ctx),
        Page::Schedule => schedule::render(frame, area, ctx),
        Page::Settings => settings::render(frame, area, ctx),
        Page::Help => help::render(frame, area, ctx),
    }
}

//! Bottom line: transient notice or keybind hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::RenderContext;

const BROWSE_HINTS: &str =
    "1-7 pages  Tab next  / search  m mode  s status  j/k scroll  e export  r refresh  b sidebar  d dark  q quit";
const SEARCH_HINTS: &str = "type to filter  Backspace delete  Enter/Esc done";

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let line = match &ctx.state.notice {
        Some(notice) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(theme.accent),
        )),
        None => {
            let hints = if ctx.state.searching {
                SEARCH_HINTS
            } else {
                BROWSE_HINTS
            };
            Line::from(Span::styled(hints, Style::default().fg(theme.dim)))
        }
    };
    frame.render_widget(Paragraph::new(line).style(theme.base()), area);
}

//! Page navigation sidebar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::content::{BRAND, BRAND_SUBTITLE};
use crate::state::Page;
use crate::view_state::RenderContext;

/// Width of the open sidebar.
pub const OPEN_WIDTH: u16 = 24;
/// Width of the collapsed sidebar: page numbers only.
pub const COLLAPSED_WIDTH: u16 = 5;

pub fn width(open: bool) -> u16 {
    if open {
        OPEN_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let open = ctx.state.sidebar_open;
    let mut lines = Vec::with_capacity(Page::ALL.len() + 3);

    if open {
        lines.push(Line::from(Span::styled(
            BRAND,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            BRAND_SUBTITLE,
            Style::default().fg(theme.dim),
        )));
        lines.push(Line::default());
    }

    for page in Page::ALL {
        let selected = page == ctx.state.page;
        let style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text)
        };
        let text = if open {
            format!(" {} {} ", page.index() + 1, page.label())
        } else {
            format!(" {} ", page.index() + 1)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .style(theme.base());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

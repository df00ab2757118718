//! Top bar: title, search box, last-updated clock and loading indicator.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::content::{SEARCH_PLACEHOLDER, TITLE};
use super::widgets::section;
use crate::view_state::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let [title_area, search_area, status_area] = Layout::horizontal([
        Constraint::Length(TITLE.len() as u16 + 2),
        Constraint::Min(20),
        Constraint::Length(34),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .style(theme.base());
    frame.render_widget(title, inset(title_area));

    frame.render_widget(search_box(ctx), search_area);

    let mut status = vec![Span::styled(
        format!("Last updated: {}", ctx.state.last_updated.format("%H:%M:%S")),
        Style::default().fg(theme.dim),
    )];
    if ctx.state.loading {
        status.push(Span::styled(
            "  \u{27f3} Loading",
            Style::default().fg(theme.waiting),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(status)).style(theme.base()),
        inset(status_area),
    );
}

fn search_box<'a>(ctx: &RenderContext) -> Paragraph<'a> {
    let theme = &ctx.theme;
    let search = &ctx.state.filter.search;
    let line = if search.is_empty() && !ctx.state.searching {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(theme.dim),
        ))
    } else {
        let mut spans = vec![Span::styled(search.clone(), Style::default().fg(theme.text))];
        if ctx.state.searching {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };
    let mut block = section("/ Search", theme);
    if ctx.state.searching {
        block = block.border_style(Style::default().fg(theme.accent));
    }
    Paragraph::new(line).block(block)
}

/// One row down from the top border line of a 3-row area.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(1),
        height: area.height.saturating_sub(1).min(1),
    }
}

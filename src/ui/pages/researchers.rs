//! Researcher profiles, one card per roster entry.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::metrics::initials;
use crate::models::Researcher;
use crate::ui::widgets::{mode_span, progress_spans, render_banner, section, stars, status_span};
use crate::view_state::{RenderContext, Theme};

/// Lines per card, including the blank separator.
pub const CARD_HEIGHT: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [banner, list] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(area);

    render_banner(
        frame,
        banner,
        "Researcher Management",
        format!(
            "Comprehensive researcher profiles and management \u{2022} {} Total",
            ctx.derived.total
        ),
        &ctx.theme,
    );

    let visible = usize::from(list.height.saturating_sub(2)) / CARD_HEIGHT + 1;
    let lines: Vec<Line> = ctx
        .roster()
        .iter()
        .skip(ctx.state.scroll)
        .take(visible)
        .flat_map(|r| card(r, &ctx.theme))
        .collect();

    let title = format!("Researchers ({})", ctx.roster().len());
    frame.render_widget(
        Paragraph::new(lines).block(section(title, &ctx.theme)),
        list,
    );
}

fn card(r: &Researcher, theme: &Theme) -> Vec<Line<'static>> {
    let dim = Style::default().fg(theme.dim);
    let mut progress = vec![Span::raw("      ")];
    progress.extend(progress_spans(r.survey_progress, 20, theme));
    progress.push(Span::styled(format!("   Last active: {}", r.last_activity), dim));

    vec![
        Line::from(vec![
            Span::styled(
                format!("[{:^3}] ", initials(&r.name)),
                Style::default().fg(theme.mode_color(r.mode)),
            ),
            Span::styled(
                r.name.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(stars(r.rating), Style::default().fg(theme.waiting)),
            Span::styled(format!(" {:.1}  ", r.rating), dim),
            mode_span(r.mode, theme),
            Span::raw("  "),
            status_span(r.status, theme),
        ]),
        Line::from(Span::styled(
            format!(
                "      {} \u{00b7} {} \u{00b7} {} years",
                r.specialty, r.unit, r.experience
            ),
            dim,
        )),
        Line::from(Span::styled(
            format!("      {}  {}  {}", r.mobile, r.email, r.location),
            dim,
        )),
        Line::from(progress),
        Line::default(),
    ]
}

//! Analytics page: response rate, department and geographic breakdowns.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::widgets::{bar_line, render_banner, render_metric_card, section};
use crate::view_state::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [banner, cards, breakdowns] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .areas(area);

    render_banner(
        frame,
        banner,
        "Advanced Analytics",
        "Comprehensive insights and performance metrics".to_string(),
        &ctx.theme,
    );
    render_cards(frame, cards, ctx);

    let [departments, locations] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(breakdowns);
    render_departments(frame, departments, ctx);
    render_locations(frame, locations, ctx);
}

fn render_cards(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let d = &ctx.derived;
    let theme = &ctx.theme;
    let [rate, active, average] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);

    render_metric_card(
        frame,
        rate,
        "Response Rate",
        format!("{}%", d.completion_rate),
        format!("{} of {} completed", d.completed, d.total),
        theme.success,
        theme,
    );
    render_metric_card(
        frame,
        active,
        "Active Surveys",
        d.in_progress.to_string(),
        "In progress right now".to_string(),
        theme.active,
        theme,
    );
    render_metric_card(
        frame,
        average,
        "Average Progress",
        format!("{}%", ctx.average_progress),
        "Overall completion".to_string(),
        theme.waiting,
        theme,
    );
}

fn render_departments(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let bar_width = area.width.saturating_sub(40).max(4);
    let mut lines: Vec<Line> = Vec::with_capacity(ctx.departments.len() * 2);
    for group in &ctx.departments {
        lines.push(bar_line(
            &group.name,
            18,
            group.completed,
            group.total,
            bar_width,
            format!("{}%", group.percentage),
            theme.accent,
            theme,
        ));
        lines.push(Line::from(Span::styled(
            format!("  {}/{} completed", group.completed, group.total),
            Style::default().fg(theme.dim),
        )));
    }
    if lines.is_empty() {
        lines.push(empty_line(ctx));
    }
    frame.render_widget(
        Paragraph::new(lines).block(section("Performance by Department", theme)),
        area,
    );
}

fn render_locations(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let bar_width = area.width.saturating_sub(44).max(4);
    let total = ctx.roster().len() as u32;
    let mut lines: Vec<Line> = ctx
        .locations
        .iter()
        .map(|loc| {
            let plural = if loc.count == 1 { "" } else { "s" };
            bar_line(
                &loc.location,
                18,
                loc.count,
                total,
                bar_width,
                format!("{} researcher{}  {}%", loc.count, plural, loc.percentage),
                theme.gc,
                theme,
            )
        })
        .collect();
    if lines.is_empty() {
        lines.push(empty_line(ctx));
    }
    frame.render_widget(
        Paragraph::new(lines).block(section("Geographic Distribution", theme)),
        area,
    );
}

fn empty_line(ctx: &RenderContext) -> Line<'static> {
    Line::from(Span::styled(
        "No researcher data",
        Style::default().fg(ctx.theme.dim),
    ))
}

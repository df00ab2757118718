//! Survey status page: activity feed, completion timeline and progress table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::metrics::{completed_timeline, initials};
use crate::ui::content::RECENT_ACTIVITIES;
use crate::ui::widgets::{progress_spans, render_banner, section, status_span, truncate};
use crate::view_state::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [banner, feeds, table] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(7),
        Constraint::Min(5),
    ])
    .areas(area);

    render_banner(
        frame,
        banner,
        "Survey Status Tracking",
        format!(
            "Real-time survey completion monitoring \u{2022} {}/{} Completed",
            ctx.derived.completed, ctx.derived.total
        ),
        &ctx.theme,
    );

    let [activity, timeline] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(feeds);
    render_activity(frame, activity, ctx);
    render_timeline(frame, timeline, ctx);
    render_progress_table(frame, table, ctx);
}

fn render_activity(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let lines: Vec<Line> = RECENT_ACTIVITIES
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::styled(format!("[{:^3}] ", initials(a.name)), Style::default().fg(theme.accent)),
                Span::styled(format!("{} ", a.name), Style::default().fg(theme.text)),
                Span::styled(format!("{} \u{00b7} {}  ", a.action, a.time), Style::default().fg(theme.dim)),
                status_span(a.status, theme),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(section("Recent Survey Activities", theme)),
        area,
    );
}

fn render_timeline(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let mut lines: Vec<Line> = completed_timeline(ctx.roster())
        .into_iter()
        .map(|r| {
            Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(theme.success)),
                Span::styled(format!("{}  ", r.name), Style::default().fg(theme.text)),
                Span::styled(
                    format!("Completed on {}", r.completion_date.as_deref().unwrap_or("-")),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No completed surveys yet",
            Style::default().fg(theme.dim),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(section("Survey Completion Timeline", theme)),
        area,
    );
}

fn render_progress_table(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let header = Row::new(vec!["Researcher", "Department", "Progress", "Status", "Last Update"])
        .style(
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::BOLD),
        );
    let rows = ctx.roster().iter().skip(ctx.state.scroll).map(|r| {
        Row::new(vec![
            Cell::from(truncate(&r.name, 24)),
            Cell::from(truncate(&r.unit, 20)),
            Cell::from(Line::from(progress_spans(r.survey_progress, 12, theme))),
            Cell::from(status_span(r.status, theme)),
            Cell::from(r.last_activity.clone()),
        ])
    });
    let widths = [
        Constraint::Length(24),
        Constraint::Length(20),
        Constraint::Length(17),
        Constraint::Length(12),
        Constraint::Min(10),
    ];
    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(section("Detailed Survey Progress", theme))
            .style(theme.base()),
        area,
    );
}

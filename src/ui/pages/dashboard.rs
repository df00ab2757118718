//! Overview page: metric cards, distributions and the researcher table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::metrics::percent;
use crate::models::{Mode, SurveyStatus};
use crate::ui::widgets::{
    bar_line, mode_span, progress_spans, render_banner, render_metric_card, section, status_span,
    truncate,
};
use crate::view_state::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [banner, cards, distributions, table] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Min(5),
    ])
    .areas(area);

    render_banner(
        frame,
        banner,
        "Overview",
        "Real-time survey monitoring and researcher management".to_string(),
        &ctx.theme,
    );
    render_cards(frame, cards, ctx);

    let [modes, statuses] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(distributions);
    render_mode_distribution(frame, modes, ctx);
    render_status_overview(frame, statuses, ctx);

    if ctx.state.loading {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading dashboard data...",
                Style::default().fg(ctx.theme.dim),
            ))
            .block(section("Researcher Details", &ctx.theme)),
            table,
        );
    } else {
        render_table(frame, table, ctx);
    }
}

fn render_cards(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let d = &ctx.derived;
    let theme = &ctx.theme;
    let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    render_metric_card(
        frame,
        cols[0],
        "Total Researchers",
        d.total.to_string(),
        format!("{} CP / {} GC", d.cp, d.gc),
        theme.text,
        theme,
    );
    render_metric_card(
        frame,
        cols[1],
        "Completion Rate",
        format!("{}%", d.completion_rate),
        "of all surveys".to_string(),
        theme.success,
        theme,
    );
    render_metric_card(
        frame,
        cols[2],
        "Completed Surveys",
        d.completed.to_string(),
        format!("{} of {}", d.completed, d.total),
        theme.success,
        theme,
    );
    render_metric_card(
        frame,
        cols[3],
        "Pending Surveys",
        d.open_surveys().to_string(),
        "Needs attention".to_string(),
        theme.waiting,
        theme,
    );
}

fn render_mode_distribution(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let d = &ctx.derived;
    let theme = &ctx.theme;
    let bar_width = area.width.saturating_sub(36).max(4);
    let lines: Vec<Line> = [(Mode::Cp, d.cp), (Mode::Gc, d.gc)]
        .iter()
        .map(|(mode, count)| {
            bar_line(
                mode.description(),
                22,
                *count,
                d.total,
                bar_width,
                format!("{} ({}%)", count, percent(*count, d.total)),
                theme.mode_color(*mode),
                theme,
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(section("Mode Distribution", theme)),
        area,
    );
}

fn render_status_overview(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let d = &ctx.derived;
    let theme = &ctx.theme;
    let rows = [
        (SurveyStatus::Completed, "Completed", d.completed),
        (SurveyStatus::InProgress, "In Progress", d.in_progress),
        (SurveyStatus::Pending, "Pending", d.pending),
        (SurveyStatus::NotStarted, "Not Started", d.not_started),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(status, label, count)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", label),
                    Style::default().fg(theme.status_color(*status)),
                ),
                Span::styled(
                    count.to_string(),
                    Style::default()
                        .fg(theme.status_color(*status))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(section("Survey Status Overview", theme)),
        area,
    );
}

fn render_table(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let filter = &ctx.state.filter;
    let title = format!(
        "Researcher Details ({} of {})  [m] {}  [s] {}",
        ctx.filtered.len(),
        ctx.roster().len(),
        filter.mode.label(),
        filter.status.label()
    );
    let block = section(title, theme);

    if ctx.filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No researchers match the current filters",
                Style::default().fg(theme.dim),
            ))
            .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        "Researcher",
        "Contact",
        "Unit & Specialty",
        "Assignment",
        "Mode",
        "Status",
        "Progress",
        "Location",
    ])
    .style(
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::BOLD),
    );

    let rows = ctx.filtered.iter().skip(ctx.state.scroll).map(|r| {
        Row::new(vec![
            Cell::from(truncate(&r.name, 22)),
            Cell::from(r.mobile.clone()),
            Cell::from(truncate(&format!("{} / {}", r.unit, r.specialty), 30)),
            Cell::from(truncate(&format!("ZSM: {} BDM: {}", r.zsm, r.bdm), 30)),
            Cell::from(mode_span(r.mode, theme)),
            Cell::from(status_span(r.status, theme)),
            Cell::from(Line::from(progress_spans(r.survey_progress, 8, theme))),
            Cell::from(truncate(&r.location, 18)),
        ])
    });

    let widths = [
        Constraint::Length(22),
        Constraint::Length(14),
        Constraint::Min(16),
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Length(11),
        Constraint::Length(13),
        Constraint::Length(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(theme.base());
    frame.render_widget(table, area);
}

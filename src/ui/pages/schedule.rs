//! Schedule page: today's appointments, deadlines and the survey timeline.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::metrics::initials;
use crate::models::{Researcher, SurveyStatus};
use crate::ui::content::{Priority, DEADLINES, TODAYS_SCHEDULE};
use crate::ui::widgets::{render_banner, section};
use crate::view_state::{RenderContext, Theme};

/// Researchers listed in the survey timeline.
pub const TIMELINE_LEN: usize = 6;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [banner, lists, timeline] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Min(4),
    ])
    .areas(area);

    render_banner(
        frame,
        banner,
        "Survey Schedule",
        format!(
            "Manage survey timelines \u{2022} {} Active \u{2022} {} Pending",
            ctx.derived.in_progress, ctx.derived.pending
        ),
        &ctx.theme,
    );

    let [today, deadlines] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lists);
    render_today(frame, today, &ctx.theme);
    render_deadlines(frame, deadlines, &ctx.theme);
    render_timeline(frame, timeline, ctx);
}

fn render_today(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = TODAYS_SCHEDULE
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::styled(format!("{}  ", a.time), Style::default().fg(theme.accent)),
                Span::styled(format!("{}  ", a.researcher), Style::default().fg(theme.text)),
                Span::styled(a.kind, Style::default().fg(theme.dim)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(section("Today's Schedule", theme)),
        area,
    );
}

fn render_deadlines(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = DEADLINES
        .iter()
        .map(|d| {
            let color = match d.priority {
                Priority::High => theme.error,
                Priority::Medium => theme.waiting,
                Priority::Low => theme.success,
            };
            Line::from(vec![
                Span::styled(format!("{}  ", d.date), Style::default().fg(theme.accent)),
                Span::styled(format!("{}  ", d.researcher), Style::default().fg(theme.text)),
                Span::styled(format!("{}  ", d.task), Style::default().fg(theme.dim)),
                Span::styled(d.priority.label(), Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(section("Upcoming Deadlines", theme)),
        area,
    );
}

fn render_timeline(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let lines: Vec<Line> = ctx
        .roster()
        .iter()
        .take(TIMELINE_LEN)
        .map(|r| {
            Line::from(vec![
                Span::styled(
                    format!("[{:^3}] ", initials(&r.name)),
                    Style::default().fg(theme.mode_color(r.mode)),
                ),
                Span::styled(format!("{}  ", r.name), Style::default().fg(theme.text)),
                Span::styled(
                    schedule_label(r),
                    Style::default().fg(theme.status_color(r.status)),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(section("Survey Timeline", theme)),
        area,
    );
}

pub fn schedule_label(r: &Researcher) -> String {
    match r.status {
        SurveyStatus::Completed => format!(
            "Completed {}",
            r.completion_date.as_deref().unwrap_or_default()
        )
        .trim_end()
        .to_string(),
        SurveyStatus::InProgress => "In Progress".to_string(),
        SurveyStatus::Pending => "Pending Start".to_string(),
        SurveyStatus::NotStarted => "Not Started".to_string(),
    }
}

//! Settings page: display preferences and export.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::export::EXPORT_FILE_NAME;
use crate::ui::widgets::{render_banner, section};
use crate::view_state::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let [banner, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(6)]).areas(area);
    let [prefs, export] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    render_banner(
        frame,
        banner,
        "Settings & Configuration",
        "Manage system preferences and data export options".to_string(),
        theme,
    );

    let toggle = |on: bool| {
        if on {
            Span::styled(
                "[ON ]",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[OFF]", Style::default().fg(theme.dim))
        }
    };
    let heading = |s: &'static str| {
        Span::styled(s, Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
    };
    let note = |s: String| Line::from(Span::styled(s, Style::default().fg(theme.dim)));

    let pref_lines = vec![
        Line::from(vec![toggle(ctx.state.dark_mode), Span::raw(" "), heading("Dark Mode")]),
        note("      Switch to dark theme (d)".to_string()),
        Line::default(),
        Line::from(vec![toggle(ctx.state.sidebar_open), Span::raw(" "), heading("Sidebar")]),
        note("      Show page names in the sidebar (b)".to_string()),
        Line::default(),
        Line::from(heading("Real-time Updates")),
        note("      Last-updated clock advances every 30 seconds; r refreshes data".to_string()),
    ];
    frame.render_widget(
        Paragraph::new(pref_lines).block(section("System Preferences", theme)),
        prefs,
    );

    let export_lines = vec![
        Line::from(heading("Complete Dataset")),
        note(format!(
            "Press e to write the current view ({} rows) to {}",
            ctx.filtered.len(),
            EXPORT_FILE_NAME
        )),
        note(format!(
            "Filters: {} \u{00b7} {}{}",
            ctx.state.filter.mode.label(),
            ctx.state.filter.status.label(),
            if ctx.state.filter.search.is_empty() {
                String::new()
            } else {
                format!(" \u{00b7} \"{}\"", ctx.state.filter.search)
            }
        )),
    ];
    frame.render_widget(
        Paragraph::new(export_lines).block(section("Data Export", theme)),
        export,
    );
}

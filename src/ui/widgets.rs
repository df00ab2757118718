//! Small building blocks shared by the pages.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::metrics::{percent_width, progress_band};
use crate::models::{Mode, SurveyStatus};
use crate::view_state::Theme;

// ============================================================================
// Block Characters
// ============================================================================

const BLOCK_FILLED: char = '\u{2588}';
const BLOCK_LIGHT: char = '\u{2591}';
const STAR_FULL: char = '\u{2605}';
const STAR_EMPTY: char = '\u{2606}';

// ============================================================================
// Containers
// ============================================================================

/// Rounded bordered block with a bold title.
pub fn section<'a>(title: impl Into<String>, theme: &Theme) -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(theme.base())
}

/// Page banner: heading plus one line of detail.
pub fn render_banner(frame: &mut Frame, area: Rect, heading: &str, detail: String, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(theme.dim))),
    ];
    frame.render_widget(Paragraph::new(lines).style(theme.base()), area);
}

/// Bordered card with a big number and a caption.
pub fn render_metric_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    caption: String,
    color: Color,
    theme: &Theme,
) {
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(theme.dim))),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(section(title, theme)),
        area,
    );
}

// ============================================================================
// Bars
// ============================================================================

/// `width` cells, filled in proportion to `percent` (0.0..=100.0).
pub fn bar(percent: f64, width: u16) -> String {
    let width = usize::from(width);
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut s = String::with_capacity(width * 3);
    s.extend(std::iter::repeat(BLOCK_FILLED).take(filled));
    s.extend(std::iter::repeat(BLOCK_LIGHT).take(width - filled));
    s
}

/// `label  ████░░░░  detail` with the bar sized to `value / total`.
#[allow(clippy::too_many_arguments)]
pub fn bar_line(
    label: &str,
    label_width: usize,
    value: u32,
    total: u32,
    bar_width: u16,
    detail: String,
    color: Color,
    theme: &Theme,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            pad(label, label_width),
            Style::default().fg(theme.text),
        ),
        Span::raw(" "),
        Span::styled(bar(percent_width(value, total), bar_width), Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(detail, Style::default().fg(theme.dim)),
    ])
}

/// Progress bar colored by how far along the survey is.
pub fn progress_spans(progress: u8, width: u16, theme: &Theme) -> Vec<Span<'static>> {
    let color = theme.progress_color(progress_band(progress));
    vec![
        Span::styled(bar(f64::from(progress), width), Style::default().fg(color)),
        Span::styled(format!(" {:>3}%", progress), Style::default().fg(theme.dim)),
    ]
}

// ============================================================================
// Badges
// ============================================================================

pub fn status_span(status: SurveyStatus, theme: &Theme) -> Span<'static> {
    Span::styled(
        status.label().to_string(),
        Style::default().fg(theme.status_color(status)),
    )
}

pub fn mode_span(mode: Mode, theme: &Theme) -> Span<'static> {
    Span::styled(
        mode.as_str().to_string(),
        Style::default()
            .fg(theme.mode_color(mode))
            .add_modifier(Modifier::BOLD),
    )
}

/// Five stars, filled up to the rounded rating.
pub fn stars(rating: f32) -> String {
    let full = (rating.clamp(0.0, 5.0).round()) as usize;
    std::iter::repeat(STAR_FULL)
        .take(full)
        .chain(std::iter::repeat(STAR_EMPTY).take(5 - full))
        .collect()
}

// ============================================================================
// Text
// ============================================================================

/// Cut `s` to at most `max` display columns, ending in `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate then right-pad to exactly `width` columns.
pub fn pad(s: &str, width: usize) -> String {
    let cut = truncate(s, width);
    let used: usize = cut.chars().map(|c| c.width().unwrap_or(0)).sum();
    format!("{}{}", cut, " ".repeat(width.saturating_sub(used)))
}

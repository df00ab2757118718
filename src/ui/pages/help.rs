//! Help & support page.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::content::{BUSINESS_HOURS, FAQ, HELP_RESOURCES, SUPPORT_EMAIL, SUPPORT_PHONE};
use crate::ui::widgets::{render_banner, section};
use crate::view_state::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = &ctx.theme;
    let bold = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.dim);

    let [banner, resources, body] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(6),
    ])
    .areas(area);
    let [faq, contact] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);

    render_banner(
        frame,
        banner,
        "Help & Support",
        "Get assistance and find answers to common questions".to_string(),
        theme,
    );

    let resource_lines: Vec<Line> = HELP_RESOURCES
        .iter()
        .map(|(title, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", title), bold),
                Span::styled(*desc, dim),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(resource_lines).block(section("Resources", theme)),
        resources,
    );

    let mut faq_lines = Vec::with_capacity(FAQ.len() * 3);
    for (question, answer) in FAQ {
        faq_lines.push(Line::from(Span::styled(question, bold)));
        faq_lines.push(Line::from(Span::styled(answer, dim)));
        faq_lines.push(Line::default());
    }
    frame.render_widget(
        Paragraph::new(faq_lines)
            .wrap(Wrap { trim: true })
            .block(section("Frequently Asked Questions", theme)),
        faq,
    );

    let mut contact_lines = vec![
        Line::from(Span::styled("Email Support", bold)),
        Line::from(Span::styled(SUPPORT_EMAIL, Style::default().fg(theme.accent))),
        Line::from(Span::styled("Get help via email within 24 hours", dim)),
        Line::default(),
        Line::from(Span::styled("Phone Support", bold)),
        Line::from(Span::styled(SUPPORT_PHONE, Style::default().fg(theme.accent))),
        Line::from(Span::styled("Call us during business hours", dim)),
        Line::default(),
        Line::from(Span::styled("Business Hours", bold)),
    ];
    contact_lines.extend(
        BUSINESS_HOURS
            .iter()
            .map(|h| Line::from(Span::styled(*h, dim))),
    );
    contact_lines.push(Line::default());
    contact_lines.push(Line::from(vec![
        Span::styled("\u{25cf} ", Style::default().fg(theme.success)),
        Span::styled("All systems operational", dim),
    ]));
    frame.render_widget(
        Paragraph::new(contact_lines)
            .wrap(Wrap { trim: true })
            .block(section("Contact Support", theme)),
        contact,
    );
}

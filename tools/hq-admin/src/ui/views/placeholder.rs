//! Placeholder for routes without a view in this console.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::Route;

pub fn render(frame: &mut Frame, area: Rect, route: Route) {
    let text = vec![
        Line::raw(""),
        Line::from(vec![Span::styled(
            "╔═══════════════════════════════════╗",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            "║        NOT AVAILABLE HERE         ║",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "╚═══════════════════════════════════╝",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            format!("The {} page is served by the web front-end.", route.name()),
            Style::default().fg(Color::DarkGray),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Use "),
            Span::styled("[2]", Style::default().fg(Color::Yellow)),
            Span::raw(" Doctors or "),
            Span::styled("[4]", Style::default().fg(Color::Yellow)),
            Span::raw(" Token Panel."),
        ]),
    ];

    let paragraph = Paragraph::new(text).centered();
    frame.render_widget(paragraph, area);
}

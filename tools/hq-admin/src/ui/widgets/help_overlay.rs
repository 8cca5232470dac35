//! Help overlay widget.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
}

fn binding(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "HQ-ADMIN HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        heading("Navigation"),
        binding("1-5, 0", "Go to route (0 = Home)"),
        binding("Tab", "Next route"),
        binding("B", "Collapse/expand sidebar"),
        binding("R", "Refresh doctors"),
        Line::raw(""),
        heading("Doctors"),
        binding("↑/↓", "Select doctor"),
        binding("A", "Add doctor"),
        binding("D", "Delete selected doctor"),
        Line::raw(""),
        heading("Token Panel"),
        binding("Enter", "Select doctor and open detail"),
        binding("M", "Manage selected doctor"),
        binding("I", "Increment token"),
        binding("Esc", "Close detail"),
        Line::raw(""),
        binding("Q", "Quit"),
        binding("?", "Toggle this help"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

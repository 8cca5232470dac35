//! Token panel renderer: roster on the left, selection summary on the right,
//! and the "Manage Doctor" detail modal.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::App;
use crate::ui::widgets::{centered_rect, spinner};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(46)])
        .split(area);

    render_roster(frame, chunks[0], app);
    render_summary(frame, chunks[1], app);
}

fn render_roster(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.token_panel;
    let roster = panel.roster();

    let block = Block::default()
        .title(" DOCTORS ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if roster.is_empty() {
        let line = if roster.is_loading() {
            Line::from(Span::styled(
                format!("{} Loading doctors...", spinner(app.ticks)),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(
                "No doctors found",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let items: Vec<ListItem> = roster
        .doctors()
        .iter()
        .map(|doctor| {
            let selected = panel.selected_id() == Some(&doctor.id);
            let marker = if selected { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(
                    format!("Dr. {}", doctor.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", doctor.specialization),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶");
    let mut state = ListState::default().with_selected(Some(panel.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.token_panel;

    let text = match panel.selected_doctor() {
        None => vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Please select a doctor to manage tokens",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Some(doctor) => vec![
            Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(
                    format!("Dr. {}", doctor.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Specialization: "),
                Span::raw(doctor.specialization.clone()),
            ]),
            Line::raw(""),
            token_line(app),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[M]", Style::default().fg(Color::Yellow)),
                Span::raw(" Manage Doctor"),
            ]),
        ],
    };

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" TOKEN ")
            .title_style(Style::default().fg(Color::Cyan))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn token_line(app: &App) -> Line<'static> {
    let value = match app.token_panel.token() {
        Some(token) => Span::styled(
            token.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("-", Style::default().fg(Color::DarkGray)),
    };
    Line::from(vec![Span::raw("Current token: "), value])
}

/// "Manage Doctor" modal for the selected doctor.
pub fn render_detail(frame: &mut Frame, app: &App) {
    let panel = &app.token_panel;
    let area = centered_rect(50, 50, frame.area());
    frame.render_widget(Clear, area);

    let (name, specialization) = match panel.selected_doctor() {
        Some(doctor) => (format!("Dr. {}", doctor.name), doctor.specialization.clone()),
        None => (
            panel
                .selected_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            String::new(),
        ),
    };

    let action = if panel.is_in_flight() {
        Line::from(Span::styled(
            format!("{} Incrementing...", spinner(app.ticks)),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("[I]", Style::default().fg(Color::Yellow)),
            Span::raw(" Increment token"),
        ])
    };

    let text = vec![
        Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(specialization, Style::default().fg(Color::DarkGray))),
        Line::raw(""),
        token_line(app),
        Line::raw(""),
        action,
        Line::from(vec![
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ]),
    ];

    let paragraph = Paragraph::new(text).centered().block(
        Block::default()
            .title(" Manage Doctor ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

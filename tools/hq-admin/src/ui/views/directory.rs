//! Doctor directory renderer.
//!
//! ```text
//! 3 doctor(s) registered
//!
//! ▶ Dr. Lee — Cardiology — Available
//!   Dr. Ng — Pediatrics — Unavailable          ⠋ deleting
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::App;
use crate::ui::widgets::spinner;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = &app.directory;
    let roster = view.roster();

    if roster.is_empty() {
        let text = if roster.is_loading() {
            vec![
                Line::raw(""),
                Line::from(Span::styled(
                    format!("{} Loading doctors...", spinner(app.ticks)),
                    Style::default().fg(Color::Yellow),
                )),
            ]
        } else {
            vec![
                Line::raw(""),
                Line::from(Span::styled(
                    "No doctors found",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Get started by adding your first doctor",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("[A]", Style::default().fg(Color::Yellow)),
                    Span::raw(" Add Doctor"),
                ]),
            ]
        };
        frame.render_widget(Paragraph::new(text).centered(), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let mut summary = vec![Span::styled(
        format!(" {} doctor(s) registered", roster.len()),
        Style::default().fg(Color::Cyan),
    )];
    if roster.is_loading() {
        summary.push(Span::styled(
            format!("  {} refreshing", spinner(app.ticks)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(summary)), chunks[0]);

    let items: Vec<ListItem> = roster
        .doctors()
        .iter()
        .map(|doctor| {
            let availability = if doctor.availability {
                Color::Green
            } else {
                Color::Red
            };
            let mut spans = vec![
                Span::styled(
                    format!("Dr. {}", doctor.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" — {} — ", doctor.specialization)),
                Span::styled(doctor.availability_label(), Style::default().fg(availability)),
            ];
            if view.is_deleting(&doctor.id) {
                spans.push(Span::styled(
                    format!("   {} deleting", spinner(app.ticks)),
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(view.cursor()));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

#[cfg(test)]
mod tests {
    use hq_service::Doctor;

    use crate::domain::{App, Command, Completion};
    use crate::ui::testing::screen;

    fn loaded(doctors: Vec<Doctor>) -> App {
        let mut app = App::default();
        let Some(Command::ListDoctors { view, ticket }) = app.startup_commands().pop() else {
            panic!("expected list command");
        };
        app.apply(Completion::DoctorsListed {
            view,
            ticket,
            result: Ok(doctors),
        });
        app
    }

    #[test]
    fn test_cards_and_count() {
        let app = loaded(vec![
            Doctor {
                id: "d1".into(),
                name: "Lee".to_string(),
                specialization: "Cardiology".to_string(),
                availability: true,
            },
            Doctor {
                id: "d2".into(),
                name: "Ng".to_string(),
                specialization: "Pediatrics".to_string(),
                availability: false,
            },
        ]);

        let text = screen(&app);
        assert!(text.contains("2 doctor(s) registered"));
        assert!(text.contains("Dr. Lee — Cardiology — Available"));
        assert!(text.contains("Dr. Ng — Pediatrics — Unavailable"));
    }

    #[test]
    fn test_empty_state() {
        let app = loaded(Vec::new());
        let text = screen(&app);
        assert!(text.contains("No doctors found"));
        assert!(text.contains("Get started by adding your first doctor"));
    }

    #[test]
    fn test_loading_state() {
        let mut app = App::default();
        app.startup_commands();
        assert!(screen(&app).contains("Loading doctors..."));
    }
}

//! Modal dialogs: the "Add New Doctor" form and the delete confirmation.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::{CreateForm, FormField};

/// Create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn modal_block(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn field_line(label: &'static str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<16}", label), style),
        Span::raw(format!("{}{}", value, cursor)),
    ])
}

pub fn render_form_modal(frame: &mut Frame, form: &CreateForm, submitting: bool) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let action = if submitting {
        Line::from(Span::styled("Saving...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Save   "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ])
    };

    let text = vec![
        Line::raw(""),
        field_line("Name", &form.name, form.focus == FormField::Name),
        field_line(
            "Specialization",
            &form.specialization,
            form.focus == FormField::Specialization,
        ),
        Line::raw(""),
        action,
    ];

    let paragraph = Paragraph::new(text).block(modal_block(" Add New Doctor ", Color::Cyan));
    frame.render_widget(paragraph, area);
}

pub fn render_confirm_modal(frame: &mut Frame, prompt: &str) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::raw(""),
        Line::from(Span::raw(prompt.to_string())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Red)),
            Span::raw(" Delete   "),
            Span::styled("[N]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .centered()
        .block(modal_block(" Confirm ", Color::Red));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use hq_service::Doctor;

    use crate::domain::{App, Command, Completion};
    use crate::ui::testing::screen;

    #[test]
    fn test_form_shows_typed_text() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('a'));
        for c in "Lee".chars() {
            app.handle_key(KeyCode::Char(c));
        }

        let text = screen(&app);
        assert!(text.contains("Add New Doctor"));
        assert!(text.contains("Lee▏"));
    }

    #[test]
    fn test_confirm_prompt() {
        let mut app = App::default();
        let Some(Command::ListDoctors { view, ticket }) = app.startup_commands().pop() else {
            panic!("expected list command");
        };
        app.apply(Completion::DoctorsListed {
            view,
            ticket,
            result: Ok(vec![Doctor {
                id: "d1".into(),
                name: "Lee".to_string(),
                specialization: "Cardiology".to_string(),
                availability: true,
            }]),
        });

        app.handle_key(KeyCode::Char('d'));
        assert!(screen(&app).contains("Are you sure you want to delete this doctor?"));
    }
}

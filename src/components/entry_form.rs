use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reminders::Draft;
use crate::theme;

/// The always-visible draft panel: message, chosen date, chosen time.
pub struct EntryForm;

impl EntryForm {
    pub fn render(frame: &mut Frame, area: Rect, draft: &Draft, editing: bool) {
        let border_style = if editing {
            theme::current().accent
        } else {
            theme::current().border
        };

        let block = Block::default()
            .title(" New Reminder ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // message
            Constraint::Length(1), // date
            Constraint::Length(1), // time
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(frame, rows[0], "Message:", &draft.message, editing);
        render_value(frame, rows[1], "Date:", &draft.date);
        render_value(frame, rows[2], "Time:", &draft.time);

        let help = if editing {
            Line::from(vec![
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("/", theme::current().dim),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Done typing", theme::current().dim),
            ])
        } else {
            Line::from(vec![
                Span::styled("m", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Message ", theme::current().dim),
                Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Date ", theme::current().dim),
                Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Time ", theme::current().dim),
                Span::styled("s", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(":Set reminder", theme::current().dim),
            ])
        };
        frame.render_widget(Paragraph::new(help), rows[4]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let cursor = if active { "_" } else { "" };
    let style = if active {
        theme::current().accent
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<9}", label), theme::current().dim),
        Span::styled(format!("{}{}", value, cursor), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_value(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let (text, style) = if value.is_empty() {
        ("not set", theme::current().dim)
    } else {
        (value, Style::default())
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<9}", label), theme::current().dim),
        Span::styled(text.to_string(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

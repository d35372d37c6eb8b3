use chrono::{Local, Timelike};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::date_picker::render_spinner;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeField {
    Hour,
    Minute,
}

impl TimeField {
    pub fn next(&self) -> Self {
        match self {
            TimeField::Hour => TimeField::Minute,
            TimeField::Minute => TimeField::Hour,
        }
    }
}

/// Spinner state for the 24-hour time dialog. Both fields wrap.
#[derive(Debug, Clone)]
pub struct TimePickerState {
    pub hour: u32,
    pub minute: u32,
    pub active_field: TimeField,
}

impl TimePickerState {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            active_field: TimeField::Hour,
        }
    }

    pub fn increment(&mut self) {
        match self.active_field {
            TimeField::Hour => self.hour = (self.hour + 1) % 24,
            TimeField::Minute => self.minute = (self.minute + 1) % 60,
        }
    }

    pub fn decrement(&mut self) {
        match self.active_field {
            TimeField::Hour => self.hour = (self.hour + 23) % 24,
            TimeField::Minute => self.minute = (self.minute + 59) % 60,
        }
    }

    /// `(hour, minute)` on confirmation.
    pub fn selection(&self) -> (u32, u32) {
        (self.hour, self.minute)
    }
}

pub struct TimePicker;

impl TimePicker {
    pub fn render(frame: &mut Frame, area: Rect, state: &TimePickerState) {
        let popup_w = area.width.min(34).max(24);
        let popup_h = area.height.min(8).max(6);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Select Time ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // hour
            Constraint::Length(1), // minute
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_spinner(
            frame,
            rows[0],
            "Hour:",
            &format!("{:02}", state.hour),
            state.active_field == TimeField::Hour,
        );
        render_spinner(
            frame,
            rows[1],
            "Minute:",
            &format!("{:02}", state.minute),
            state.active_field == TimeField::Minute,
        );

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Field ", theme::current().dim),
            Span::styled("j/k", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Adjust ", theme::current().dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":OK ", theme::current().dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[3]);
    }
}

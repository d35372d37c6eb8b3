use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl DateField {
    pub fn next(&self) -> Self {
        match self {
            DateField::Day => DateField::Month,
            DateField::Month => DateField::Year,
            DateField::Year => DateField::Day,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DateField::Day => DateField::Year,
            DateField::Month => DateField::Day,
            DateField::Year => DateField::Month,
        }
    }
}

/// Spinner state for the date dialog. The dialog only ever yields triples
/// that exist on the calendar: the day wraps within the shown month and is
/// clamped when the month or year changes under it.
#[derive(Debug, Clone)]
pub struct DatePickerState {
    pub day: u32,
    /// Zero-based month index, the convention the confirmed selection uses.
    pub month: u32,
    pub year: i32,
    pub active_field: DateField,
}

impl DatePickerState {
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self {
            day: today.day(),
            month: today.month0(),
            year: today.year(),
            active_field: DateField::Day,
        }
    }

    pub fn increment(&mut self) {
        match self.active_field {
            DateField::Day => {
                let last = days_in_month(self.year, self.month);
                self.day = if self.day >= last { 1 } else { self.day + 1 };
            }
            DateField::Month => {
                self.month = (self.month + 1) % 12;
                self.clamp_day();
            }
            DateField::Year => {
                self.year += 1;
                self.clamp_day();
            }
        }
    }

    pub fn decrement(&mut self) {
        match self.active_field {
            DateField::Day => {
                let last = days_in_month(self.year, self.month);
                self.day = if self.day <= 1 { last } else { self.day - 1 };
            }
            DateField::Month => {
                self.month = (self.month + 11) % 12;
                self.clamp_day();
            }
            DateField::Year => {
                self.year -= 1;
                self.clamp_day();
            }
        }
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(days_in_month(self.year, self.month));
    }

    /// `(day, zero-based month, year)` on confirmation.
    pub fn selection(&self) -> (u32, u32, i32) {
        (self.day, self.month, self.year)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }
}

pub struct DatePicker;

impl DatePicker {
    pub fn render(frame: &mut Frame, area: Rect, state: &DatePickerState) {
        // Center the picker popup
        let popup_w = area.width.min(34).max(24);
        let popup_h = area.height.min(9).max(7);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Select Date ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // day
            Constraint::Length(1), // month
            Constraint::Length(1), // year
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_spinner(
            frame,
            rows[0],
            "Day:",
            &state.day.to_string(),
            state.active_field == DateField::Day,
        );
        render_spinner(
            frame,
            rows[1],
            "Month:",
            state.month_name(),
            state.active_field == DateField::Month,
        );
        render_spinner(
            frame,
            rows[2],
            "Year:",
            &state.year.to_string(),
            state.active_field == DateField::Year,
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
        frame.render_widget(Paragraph::new(help), rows[4]);
    }
}

pub(super) fn render_spinner(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    active: bool,
) {
    let (marker, style) = if active {
        ("> ", theme::current().accent)
    } else {
        ("  ", Style::default())
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<8}", label), theme::current().dim),
        Span::styled(format!("{}{}", marker, value), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn days_in_month(year: i32, month0: u32) -> u32 {
    let month = month0 + 1;
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    .num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(day: u32, month: u32, year: i32) -> DatePickerState {
        DatePickerState {
            day,
            month,
            year,
            active_field: DateField::Day,
        }
    }

    #[test]
    fn day_wraps_within_month() {
        let mut s = state(31, 0, 2025);
        s.increment();
        assert_eq!(s.day, 1);
        s.decrement();
        assert_eq!(s.day, 31);
    }

    #[test]
    fn month_wraps_and_clamps_day() {
        let mut s = state(31, 0, 2025);
        s.active_field = DateField::Month;
        s.increment();
        // January 31 -> February 28 (2025 is not a leap year)
        assert_eq!((s.day, s.month), (28, 1));

        let mut s = state(31, 0, 2024);
        s.active_field = DateField::Month;
        s.increment();
        assert_eq!((s.day, s.month), (29, 1));

        let mut s = state(15, 0, 2025);
        s.active_field = DateField::Month;
        s.decrement();
        assert_eq!(s.month, 11);
    }

    #[test]
    fn year_change_clamps_leap_day() {
        let mut s = state(29, 1, 2024);
        s.active_field = DateField::Year;
        s.increment();
        assert_eq!((s.day, s.year), (28, 2025));
    }

    #[test]
    fn selection_reports_zero_based_month() {
        let s = state(5, 2, 2024);
        assert_eq!(s.selection(), (5, 2, 2024));
        assert_eq!(s.month_name(), "March");
    }

    #[test]
    fn field_cycle_covers_all_fields() {
        let mut field = DateField::Day;
        field = field.next();
        assert_eq!(field, DateField::Month);
        field = field.next();
        assert_eq!(field, DateField::Year);
        field = field.next();
        assert_eq!(field, DateField::Day);
        assert_eq!(field.prev(), DateField::Year);
    }
}

use crate::components::date_picker::DatePickerState;
use crate::components::time_picker::TimePickerState;
use crate::reminders::ReminderStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    DatePicker,
    TimePicker,
}

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub store: ReminderStore,
    /// Cursor into the committed list.
    pub selected: usize,
    /// Single-slot notification surface; drained on the next key event.
    pub notice: Option<String>,
    pub show_help: bool,
    pub date_picker: Option<DatePickerState>,
    pub time_picker: Option<TimePickerState>,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            store: ReminderStore::new(),
            selected: 0,
            notice: None,
            show_help: false,
            date_picker: None,
            time_picker: None,
        }
    }

    // ── Message editing ──

    pub fn start_message_edit(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn finish_message_edit(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let mut message = self.store.draft().message.clone();
        message.push(c);
        self.store.set_message(message);
    }

    pub fn backspace(&mut self) {
        let mut message = self.store.draft().message.clone();
        message.pop();
        self.store.set_message(message);
    }

    // ── Picker dialogs ──

    pub fn open_date_picker(&mut self) {
        self.date_picker = Some(DatePickerState::today());
        self.input_mode = InputMode::DatePicker;
    }

    pub fn confirm_date_picker(&mut self) {
        if let Some(picker) = self.date_picker.take() {
            let (day, month, year) = picker.selection();
            self.store.set_date(day, month, year);
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_date_picker(&mut self) {
        self.date_picker = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn open_time_picker(&mut self) {
        self.time_picker = Some(TimePickerState::now());
        self.input_mode = InputMode::TimePicker;
    }

    pub fn confirm_time_picker(&mut self) {
        if let Some(picker) = self.time_picker.take() {
            let (hour, minute) = picker.selection();
            self.store.set_time(hour, minute);
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_time_picker(&mut self) {
        self.time_picker = None;
        self.input_mode = InputMode::Normal;
    }

    // ── Commit and removal ──

    pub fn set_reminder(&mut self) {
        let outcome = self.store.commit();
        self.notice = Some(outcome.notice().to_string());
    }

    pub fn clear_selected(&mut self) {
        let Some(reminder) = self.store.reminders().get(self.selected).cloned() else {
            return;
        };
        let notice = self.store.remove(&reminder);
        self.notice = Some(notice.to_string());
        self.clamp_selection();
    }

    // ── List navigation ──

    pub fn select_next(&mut self) {
        let len = self.store.reminders().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.store.reminders().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::date_picker::{DateField, DatePickerState};
    use crate::components::time_picker::{TimeField, TimePickerState};

    fn app_with_reminders(messages: &[&str]) -> App {
        let mut app = App::new();
        for message in messages {
            app.store.set_message(*message);
            app.store.set_date(1, 0, 2025);
            app.store.set_time(8, 0);
            app.store.commit();
        }
        app
    }

    #[test]
    fn typing_builds_the_draft_message() {
        let mut app = App::new();
        app.start_message_edit();
        for c in "milk".chars() {
            app.input_char(c);
        }
        app.backspace();
        app.finish_message_edit();

        assert_eq!(app.store.draft().message, "mil");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn confirmed_date_picker_feeds_the_store_zero_based() {
        let mut app = App::new();
        app.date_picker = Some(DatePickerState {
            day: 5,
            month: 2,
            year: 2024,
            active_field: DateField::Day,
        });
        app.input_mode = InputMode::DatePicker;

        app.confirm_date_picker();

        assert_eq!(app.store.draft().date, "5/3/2024");
        assert!(app.date_picker.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn cancelled_picker_leaves_draft_unchanged() {
        let mut app = App::new();
        app.store.set_date(1, 0, 2025);
        app.open_date_picker();
        app.cancel_date_picker();

        assert_eq!(app.store.draft().date, "1/1/2025");
        assert!(app.date_picker.is_none());
    }

    #[test]
    fn confirmed_time_picker_feeds_the_store() {
        let mut app = App::new();
        app.time_picker = Some(TimePickerState {
            hour: 9,
            minute: 5,
            active_field: TimeField::Hour,
        });
        app.input_mode = InputMode::TimePicker;

        app.confirm_time_picker();

        assert_eq!(app.store.draft().time, "09:05");
    }

    #[test]
    fn set_reminder_raises_a_single_notice() {
        let mut app = App::new();
        app.set_reminder();
        assert_eq!(
            app.notice.as_deref(),
            Some("Please enter a message, date, and time!")
        );

        // The slot holds one message; a later command overwrites it
        app.store.set_message("Buy milk");
        app.store.set_date(1, 0, 2025);
        app.store.set_time(8, 30);
        app.set_reminder();
        assert_eq!(
            app.notice.as_deref(),
            Some("Reminder set for 1/1/2025 at 08:30")
        );
    }

    #[test]
    fn clear_selected_removes_and_notifies() {
        let mut app = app_with_reminders(&["one", "two"]);
        app.selected = 1;
        app.clear_selected();

        assert_eq!(app.notice.as_deref(), Some("Reminder cleared"));
        assert_eq!(app.store.reminders().len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn clear_on_empty_list_is_a_noop() {
        let mut app = App::new();
        app.clear_selected();
        assert!(app.notice.is_none());
    }

    #[test]
    fn selection_stays_in_range() {
        let mut app = app_with_reminders(&["one", "two", "three"]);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_prev();
        assert_eq!(app.selected, 1);

        let mut empty = App::new();
        empty.select_next();
        empty.select_prev();
        assert_eq!(empty.selected, 0);
    }
}

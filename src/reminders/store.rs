use super::reminder::Reminder;

/// Shown when commit is attempted while any draft field is still blank.
const INCOMPLETE_PROMPT: &str = "Please enter a message, date, and time!";
/// Shown after a reminder is removed from the list.
const CLEARED_NOTICE: &str = "Reminder cleared";

/// The in-progress reminder being edited. An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub message: String,
    pub date: String,
    pub time: String,
}

impl Draft {
    fn is_complete(&self) -> bool {
        !self.message.trim().is_empty()
            && !self.date.trim().is_empty()
            && !self.time.trim().is_empty()
    }
}

/// Result of a commit attempt, carrying the notice to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(String),
    Rejected(&'static str),
}

impl CommitOutcome {
    pub fn notice(&self) -> &str {
        match self {
            CommitOutcome::Committed(notice) => notice,
            CommitOutcome::Rejected(prompt) => prompt,
        }
    }
}

/// Owns the ordered list of committed reminders and the draft being edited.
///
/// The setters accept whatever the picker dialogs hand them; validation runs
/// once, at commit time.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    draft: Draft,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.draft.message = text.into();
    }

    /// `month` is the zero-based index the date picker yields; it is rendered
    /// one-based. The triple is not range-checked here.
    pub fn set_date(&mut self, day: u32, month: u32, year: i32) {
        self.draft.date = format!("{}/{}/{}", day, month + 1, year);
    }

    pub fn set_time(&mut self, hour: u32, minute: u32) {
        self.draft.time = format!("{:02}:{:02}", hour, minute);
    }

    /// Promote the draft into the list. Requires all three fields non-blank;
    /// a rejected commit leaves both the list and the draft untouched.
    pub fn commit(&mut self) -> CommitOutcome {
        if !self.draft.is_complete() {
            return CommitOutcome::Rejected(INCOMPLETE_PROMPT);
        }

        let notice = format!(
            "Reminder set for {} at {}",
            self.draft.date, self.draft.time
        );

        // Taking the fields out is also what resets the draft.
        self.reminders.push(Reminder {
            message: std::mem::take(&mut self.draft.message),
            date: std::mem::take(&mut self.draft.date),
            time: std::mem::take(&mut self.draft.time),
        });

        CommitOutcome::Committed(notice)
    }

    /// Remove the first structurally-equal occurrence; a miss is a no-op.
    /// Remaining entries keep their order.
    pub fn remove(&mut self, reminder: &Reminder) -> &'static str {
        if let Some(pos) = self.reminders.iter().position(|r| r == reminder) {
            self.reminders.remove(pos);
        }
        CLEARED_NOTICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_store() -> ReminderStore {
        let mut store = ReminderStore::new();
        store.set_message("Buy milk");
        store.set_date(1, 0, 2025);
        store.set_time(8, 30);
        store
    }

    #[test]
    fn date_is_rendered_one_based() {
        let mut store = ReminderStore::new();
        store.set_date(5, 2, 2024);
        assert_eq!(store.draft().date, "5/3/2024");
    }

    #[test]
    fn time_is_zero_padded() {
        let mut store = ReminderStore::new();
        store.set_time(9, 5);
        assert_eq!(store.draft().time, "09:05");
        store.set_time(23, 0);
        assert_eq!(store.draft().time, "23:00");
    }

    #[test]
    fn commit_appends_and_resets_draft() {
        let mut store = filled_store();
        let outcome = store.commit();

        assert_eq!(
            outcome,
            CommitOutcome::Committed("Reminder set for 1/1/2025 at 08:30".to_string())
        );
        assert_eq!(
            store.reminders(),
            [Reminder {
                message: "Buy milk".to_string(),
                date: "1/1/2025".to_string(),
                time: "08:30".to_string(),
            }]
        );
        assert_eq!(*store.draft(), Draft::default());
    }

    #[test]
    fn commit_on_fresh_store_is_rejected() {
        let mut store = ReminderStore::new();
        let outcome = store.commit();

        assert_eq!(
            outcome,
            CommitOutcome::Rejected("Please enter a message, date, and time!")
        );
        assert!(store.reminders().is_empty());
    }

    #[test]
    fn whitespace_only_message_is_rejected() {
        let mut store = filled_store();
        store.set_message("   ");

        let before = store.draft().clone();
        assert!(matches!(store.commit(), CommitOutcome::Rejected(_)));
        assert!(store.reminders().is_empty());
        // A rejected commit leaves the draft as it was.
        assert_eq!(*store.draft(), before);
    }

    #[test]
    fn missing_date_is_rejected() {
        let mut store = ReminderStore::new();
        store.set_message("Buy milk");
        store.set_time(8, 30);

        assert!(matches!(store.commit(), CommitOutcome::Rejected(_)));
        assert!(store.reminders().is_empty());
    }

    #[test]
    fn commits_preserve_insertion_order() {
        let mut store = ReminderStore::new();
        for message in ["first", "second", "third"] {
            store.set_message(message);
            store.set_date(1, 0, 2025);
            store.set_time(8, 0);
            store.commit();
        }

        let messages: Vec<&str> = store
            .reminders()
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn remove_missing_reminder_is_a_noop() {
        let mut store = filled_store();
        store.commit();

        let absent = Reminder {
            message: "not here".to_string(),
            date: "2/2/2025".to_string(),
            time: "10:00".to_string(),
        };
        assert_eq!(store.remove(&absent), "Reminder cleared");
        assert_eq!(store.reminders().len(), 1);
    }

    #[test]
    fn remove_duplicate_takes_one_and_keeps_order() {
        let mut store = ReminderStore::new();
        for message in ["dup", "other", "dup"] {
            store.set_message(message);
            store.set_date(1, 0, 2025);
            store.set_time(8, 0);
            store.commit();
        }

        let target = store.reminders()[0].clone();
        store.remove(&target);

        let messages: Vec<&str> = store
            .reminders()
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(messages, ["other", "dup"]);
    }

    #[test]
    fn end_to_end_set_and_commit() {
        let mut store = ReminderStore::new();
        store.set_message("Buy milk");
        store.set_date(1, 0, 2025);
        store.set_time(8, 30);

        let outcome = store.commit();
        assert_eq!(outcome.notice(), "Reminder set for 1/1/2025 at 08:30");
        assert_eq!(store.reminders()[0].when_display(), "1/1/2025 at 08:30");
        assert!(store.draft().message.is_empty());
        assert!(store.draft().date.is_empty());
        assert!(store.draft().time.is_empty());
    }
}

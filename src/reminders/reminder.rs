/// An immutable committed reminder: a message plus its display-formatted
/// date and time. Equality is structural; duplicates are allowed in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub message: String,
    pub date: String,
    pub time: String,
}

impl Reminder {
    pub fn when_display(&self) -> String {
        format!("{} at {}", self.date, self.time)
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::reminders::Reminder;
use crate::theme;

pub struct ReminderList;

impl ReminderList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        reminders: &[Reminder],
        selected_index: usize,
        focused: bool,
    ) {
        let w = area.width as usize;

        let title = if w >= 25 {
            format!(" Reminders ({}) ", reminders.len())
        } else {
            " Reminders ".to_string()
        };

        let border_style = if focused {
            theme::current().accent
        } else {
            theme::current().border
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(border_style);

        if reminders.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No reminders set").style(theme::current().dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;

        let mut items: Vec<ListItem> = Vec::new();
        for (i, reminder) in reminders.iter().enumerate() {
            let is_selected = i == selected_index && focused;

            let when = format!(" {}", reminder.when_display());
            let message_room = inner_w.saturating_sub(when.len() + 2);

            let mut spans = vec![Span::styled(
                format!(" {}", truncate(&reminder.message, message_room)),
                if is_selected {
                    theme::current().selected
                } else {
                    Style::default()
                },
            )];

            // Date and time if there's room
            if spans.iter().map(|s| s.width()).sum::<usize>() + when.len() < inner_w {
                spans.push(Span::styled(
                    when,
                    if is_selected {
                        theme::current().selected
                    } else {
                        theme::current().dim
                    },
                ));
            }

            items.push(ListItem::new(Line::from(spans)));
        }

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("a very long reminder", 10), "a very ...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Multi-byte input must not split inside a character.
        assert_eq!(truncate("café au lait", 7), "café...");
    }
}

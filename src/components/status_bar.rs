use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::InputMode;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, mode: &InputMode, notice: Option<&str>) {
        let w = area.width as usize;

        let mode_str = match mode {
            InputMode::Normal => "[Reminders]",
            InputMode::Editing => "[Message]",
            InputMode::DatePicker => "[Date]",
            InputMode::TimePicker => "[Time]",
        };

        // A pending notice preempts the keybinding hints
        let right_text = if let Some(msg) = notice {
            format!(" {} ", msg)
        } else {
            match mode {
                InputMode::Normal if w >= 80 => {
                    " m:Message d:Date t:Time s/Enter:Set x:Clear jk:Select ?:Help q:Quit"
                        .to_string()
                }
                InputMode::Normal if w >= 50 => {
                    " m:Msg d:Date t:Time s:Set x:Clear q:Quit".to_string()
                }
                InputMode::Editing => " type the message, Enter when done".to_string(),
                InputMode::DatePicker | InputMode::TimePicker => {
                    " j/k:Adjust Tab:Field Enter:OK Esc:Cancel".to_string()
                }
                _ => " ?:Help q:Quit".to_string(),
            }
        };

        let left = format!(" {} ", mode_str);
        let padding_len = w.saturating_sub(left.len() + right_text.len());
        let padding = " ".repeat(padding_len);

        let line = Line::from(vec![
            Span::styled(left, theme::current().status),
            Span::styled(padding, theme::current().status),
            Span::styled(right_text, theme::current().status),
        ]);

        let bar = Paragraph::new(line).style(theme::current().status);
        frame.render_widget(bar, area);
    }
}

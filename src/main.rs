mod app;
mod components;
mod event;
mod reminders;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, InputMode};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut app = App::new();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: entry form + list + status bar
            let layout = Layout::vertical([
                Constraint::Length(7),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

            components::EntryForm::render(
                frame,
                layout[0],
                app.store.draft(),
                app.input_mode == InputMode::Editing,
            );

            components::ReminderList::render(
                frame,
                layout[1],
                app.store.reminders(),
                app.selected,
                app.input_mode == InputMode::Normal,
            );

            // Render picker overlays
            if let Some(ref picker) = app.date_picker {
                components::DatePicker::render(frame, area, picker);
            }
            if let Some(ref picker) = app.time_picker {
                components::TimePicker::render(frame, area, picker);
            }

            // Render help overlay
            if app.show_help {
                render_help(frame, area);
            }

            components::StatusBar::render(
                frame,
                layout[2],
                &app.input_mode,
                app.notice.as_deref(),
            );
        })?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            // Drain the notice slot on any key
            app.notice = None;

            // Help overlay takes priority
            if app.show_help {
                if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
                InputMode::Editing => handle_editing_input(app, key.code),
                InputMode::DatePicker => handle_date_picker_input(app, key.code),
                InputMode::TimePicker => handle_time_picker_input(app, key.code),
            }
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('m'), _) => app.start_message_edit(),
        (KeyCode::Char('d'), _) => app.open_date_picker(),
        (KeyCode::Char('t'), _) => app.open_time_picker(),
        (KeyCode::Char('s'), _) | (KeyCode::Enter, _) => app.set_reminder(),
        (KeyCode::Char('x'), _) => app.clear_selected(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn handle_editing_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Esc => app.finish_message_edit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

fn handle_date_picker_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_date_picker(),
        KeyCode::Enter => app.confirm_date_picker(),
        KeyCode::Tab | KeyCode::Right => {
            if let Some(ref mut picker) = app.date_picker {
                picker.active_field = picker.active_field.next();
            }
        }
        KeyCode::BackTab | KeyCode::Left => {
            if let Some(ref mut picker) = app.date_picker {
                picker.active_field = picker.active_field.prev();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(ref mut picker) = app.date_picker {
                picker.increment();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(ref mut picker) = app.date_picker {
                picker.decrement();
            }
        }
        _ => {}
    }
}

fn handle_time_picker_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.cancel_time_picker(),
        KeyCode::Enter => app.confirm_time_picker(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            if let Some(ref mut picker) = app.time_picker {
                picker.active_field = picker.active_field.next();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(ref mut picker) = app.time_picker {
                picker.increment();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(ref mut picker) = app.time_picker {
                picker.decrement();
            }
        }
        _ => {}
    }
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.min(48).max(30);
    let popup_h = area.height.min(17).max(10);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Draft", section_style)),
        Line::from(vec![
            Span::styled("  m         ", key_style),
            Span::styled("Type the message", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  d         ", key_style),
            Span::styled("Pick a date", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  t         ", key_style),
            Span::styled("Pick a time", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  s", key_style),
            Span::styled(" / ", theme::current().dim),
            Span::styled("Enter   ", key_style),
            Span::styled("Set the reminder", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("List", section_style)),
        Line::from(vec![
            Span::styled("  j/k ", key_style),
            Span::styled("or ", theme::current().dim),
            Span::styled("\u{2191}/\u{2193}  ", key_style),
            Span::styled("Select reminder", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  x         ", key_style),
            Span::styled("Clear selected reminder", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme::current().dim),
            Span::styled("Esc     ", key_style),
            Span::styled("Quit / close popup", desc_style),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

//! List screen: input box, tasks, status bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::cli::landing::TITLE;
use crate::cli::tui::app::{App, InputMode};
use crate::cli::tui::utils::{tail_for_cursor, truncate_str};
use crate::storage::KeyValueStore;

pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(5),    // Tasks
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    draw_input(frame, app, chunks[0]);
    draw_tasks(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

fn draw_input<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let adding = app.input_mode() == InputMode::Adding;
    let inner_width = area.width.saturating_sub(2) as usize;

    let (content, style) = if adding {
        (
            format!("{}_", tail_for_cursor(app.input(), inner_width)),
            Style::default().fg(Color::White),
        )
    } else if app.input().is_empty() {
        (
            "What needs to be done? (press a)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.input().to_string(), Style::default().fg(Color::Gray))
    };

    let border = if adding { Color::Cyan } else { Color::DarkGray };
    let paragraph = Paragraph::new(content).style(style).block(
        Block::default()
            .title("New task")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(paragraph, area);
}

fn draw_tasks<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let selected = app.selected();
    let normal = app.input_mode() == InputMode::Normal;

    let items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|item| {
            let is_selected = selected == Some(item.id);
            let marker = if is_selected { "> " } else { "  " };

            if item.is_editing {
                let text = tail_for_cursor(app.edit_buffer(), inner_width.saturating_sub(2));
                return ListItem::new(format!("{}{}_", marker, text))
                    .style(Style::default().fg(Color::Yellow));
            }

            let style = if is_selected && normal {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "{}{}",
                marker,
                truncate_str(&item.text, inner_width.saturating_sub(2))
            ))
            .style(style)
        })
        .collect();

    let title = format!("{} ({})", TITLE, app.items().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(list, area);
}

fn draw_status_bar<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let (content, style) = match app.input_mode() {
        InputMode::Normal => {
            let msg = app
                .status_message()
                .unwrap_or("[a]dd [e]dit [d]elete [j/k]move [esc]back [q]uit");
            (msg.to_string(), Style::default())
        }
        InputMode::Adding | InputMode::Editing(_) => {
            let msg = app
                .status_message()
                .unwrap_or("[enter]save [esc]cancel");
            (msg.to_string(), Style::default().fg(Color::Yellow))
        }
    };

    let paragraph = Paragraph::new(content)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

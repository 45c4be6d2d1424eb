//! TUI application state and key handling
//!
//! Selection is view state keyed by item ID and lives here, never in the
//! list manager.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::ui::Terminal;
use super::views;
use super::Screen;
use crate::domain::{TodoId, TodoItem};
use crate::manager::ListManager;
use crate::storage::KeyValueStore;

/// Input mode on the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the input buffer
    Adding,
    /// Typing into the edit buffer for an item
    Editing(TodoId),
}

/// Application state
pub struct App<S: KeyValueStore> {
    manager: ListManager<S>,
    screen: Screen,
    input_mode: InputMode,
    selected: Option<TodoId>,
    status_message: Option<String>,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(manager: ListManager<S>) -> Self {
        Self {
            manager,
            screen: Screen::Landing,
            input_mode: InputMode::Normal,
            selected: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Landing => views::landing::draw(frame),
            Screen::List => views::list::draw(frame, self),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn selected(&self) -> Option<TodoId> {
        self.selected
    }

    pub fn items(&self) -> &[TodoItem] {
        self.manager.items()
    }

    pub fn input(&self) -> &str {
        self.manager.input()
    }

    pub fn edit_buffer(&self) -> &str {
        self.manager.edit_buffer()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn manager(&self) -> &ListManager<S> {
        &self.manager
    }

    /// Handle a key press on whichever screen is showing
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        self.status_message = None;

        match self.screen {
            Screen::Landing => self.handle_landing_key(key),
            Screen::List => match self.input_mode {
                InputMode::Normal => self.handle_normal_key(key),
                InputMode::Adding => self.handle_adding_key(key),
                InputMode::Editing(id) => self.handle_editing_key(key, id),
            },
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.open_list(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Navigates to the list screen, resuming an edit left open in storage
    fn open_list(&mut self) {
        self.screen = Screen::List;
        self.input_mode = InputMode::Normal;

        let resumed = self
            .manager
            .list()
            .editing()
            .map(|item| (item.id, item.text.clone()));
        if let Some((id, text)) = resumed {
            self.manager.set_edit_buffer(text);
            self.selected = Some(id);
            self.input_mode = InputMode::Editing(id);
        }

        self.ensure_selection();
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.screen = Screen::Landing,

            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),

            KeyCode::Char('a') | KeyCode::Char('n') => self.input_mode = InputMode::Adding,
            KeyCode::Char('e') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),

            KeyCode::Char('?') => {
                self.status_message =
                    Some("j/k:move a:add e:edit d:delete esc:back q:quit".to_string());
            }

            _ => {}
        }
    }

    fn handle_adding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.manager.set_input(String::new());
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => match self.manager.submit_input() {
                Some(id) => {
                    self.selected = Some(id);
                    self.input_mode = InputMode::Normal;
                }
                None => self.status_message = Some("Type something first".to_string()),
            },
            KeyCode::Backspace => {
                let mut text = self.manager.input().to_string();
                text.pop();
                self.manager.set_input(text);
            }
            KeyCode::Char(c) => {
                let mut text = self.manager.input().to_string();
                text.push(c);
                self.manager.set_input(text);
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent, id: TodoId) {
        match key.code {
            KeyCode::Esc => {
                // Toggling the open item closes it
                let current = self.manager.get(id).map(|item| item.text.clone());
                if let Some(text) = current {
                    self.manager.toggle_edit(id, &text);
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                if self.manager.save_edit(id) {
                    self.input_mode = InputMode::Normal;
                } else if self.manager.get(id).is_none() {
                    self.input_mode = InputMode::Normal;
                } else {
                    self.status_message = Some("Task text cannot be empty".to_string());
                }
            }
            KeyCode::Backspace => {
                let mut text = self.manager.edit_buffer().to_string();
                text.pop();
                self.manager.set_edit_buffer(text);
            }
            KeyCode::Char(c) => {
                let mut text = self.manager.edit_buffer().to_string();
                text.push(c);
                self.manager.set_edit_buffer(text);
            }
            _ => {}
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.manager.list().position(id))
    }

    /// Points the selection at a live item (or nothing when the list is empty)
    fn ensure_selection(&mut self) {
        if self.selected_index().is_none() {
            self.selected = self.manager.items().first().map(|item| item.id);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let items = self.manager.items();
        if items.is_empty() {
            self.selected = None;
            return;
        }

        let len = items.len() as isize;
        let next = match self.selected_index() {
            Some(index) => (index as isize + delta).rem_euclid(len),
            None => 0,
        };
        self.selected = Some(items[next as usize].id);
    }

    fn toggle_selected(&mut self) {
        self.ensure_selection();
        let Some(id) = self.selected else {
            return;
        };
        let Some(text) = self.manager.get(id).map(|item| item.text.clone()) else {
            return;
        };

        if self.manager.toggle_edit(id, &text) == Some(true) {
            self.input_mode = InputMode::Editing(id);
        }
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let id = self.manager.items()[index].id;

        self.manager.delete(id);

        let items = self.manager.items();
        self.selected = if items.is_empty() {
            None
        } else {
            Some(items[index.min(items.len() - 1)].id)
        };
    }
}

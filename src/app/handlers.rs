//! Keyboard and paste handling for the App.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{Action, Page};

use super::App;

impl App {
    /// Map a key press to view-state actions.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    /// Same as [`App::handle_key`] with an explicit clock, for tests.
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') if ctrl => {
                self.dispatch(Action::CycleLanguage, now);
                return;
            }
            KeyCode::F(n) => {
                if let Some(page) = Page::from_function_key(n) {
                    self.dispatch(Action::Navigate(page), now);
                }
                return;
            }
            KeyCode::Esc => {
                if self.page() != Page::Dashboard {
                    self.dispatch(Action::Navigate(Page::Dashboard), now);
                }
                return;
            }
            _ => {}
        }

        if self.page() == Page::Dashboard {
            self.handle_editor_key(key, now);
        } else {
            self.handle_page_key(key, now);
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent, now: Instant) {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(c) if plain => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Tab => self.editor.insert_tab(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete_char(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => return,
        }
        self.mark_dirty();
        self.sync_snippet(now);
    }

    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) {
        let current = self.page().index();
        let target = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c @ '1'..='7') => Page::from_function_key(c as u8 - b'0'),
            KeyCode::Tab | KeyCode::Right => {
                Page::ALL.get((current + 1) % Page::ALL.len()).copied()
            }
            KeyCode::BackTab | KeyCode::Left => Page::ALL
                .get((current + Page::ALL.len() - 1) % Page::ALL.len())
                .copied(),
            _ => None,
        };
        if let Some(page) = target {
            self.dispatch(Action::Navigate(page), now);
        }
    }

    /// Insert pasted text into the editor (dashboard only).
    pub fn handle_paste(&mut self, text: &str) {
        if self.page() != Page::Dashboard {
            return;
        }
        self.editor.insert_str(text);
        self.mark_dirty();
        self.sync_snippet(Instant::now());
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

const TAB: &str = "    ";

/// Multi-line source editor with a cursor and line-number gutter.
///
/// The buffer is a list of lines; the cursor is `(row, col)` where `col` is a
/// char index into the row. Vertical scroll follows the cursor at render time.
#[derive(Debug, Clone)]
pub struct CodeEditor {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for CodeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Editor preloaded with `text`, cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.set_text(text);
        editor
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor as `(row, col)`, both zero-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Replace the whole buffer and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.lines = normalized.split('\n').map(expand_tabs).collect();
        self.row = self.lines.len() - 1;
        self.col = self.current_len();
    }

    fn current_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    fn byte_index(&self) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(self.col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        match c {
            '\n' | '\r' => self.insert_newline(),
            '\t' => self.insert_tab(),
            _ => {
                let idx = self.byte_index();
                self.lines[self.row].insert(idx, c);
                self.col += 1;
            }
        }
    }

    pub fn insert_tab(&mut self) {
        let idx = self.byte_index();
        self.lines[self.row].insert_str(idx, TAB);
        self.col += TAB.len();
    }

    /// Split the current line at the cursor, carrying its indentation over.
    pub fn insert_newline(&mut self) {
        let idx = self.byte_index();
        let rest = self.lines[self.row].split_off(idx);
        let indent: String = self.lines[self.row]
            .chars()
            .take_while(|c| *c == ' ')
            .collect();
        self.col = indent.chars().count();
        self.lines.insert(self.row + 1, indent + &rest);
        self.row += 1;
    }

    /// Insert pasted text verbatim (no auto-indent).
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut parts = normalized.split('\n');
        if let Some(first) = parts.next() {
            let first = expand_tabs(first);
            let idx = self.byte_index();
            self.lines[self.row].insert_str(idx, &first);
            self.col += first.chars().count();
        }
        for part in parts {
            let idx = self.byte_index();
            let rest = self.lines[self.row].split_off(idx);
            let part = expand_tabs(part);
            self.col = part.chars().count();
            self.lines.insert(self.row + 1, part + &rest);
            self.row += 1;
        }
    }

    /// Delete before the cursor, joining lines at column zero.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let idx = self.byte_index();
            self.lines[self.row].remove(idx);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.current_len();
            self.lines[self.row].push_str(&line);
        }
    }

    /// Delete under the cursor, joining the next line at end of line.
    pub fn delete_char(&mut self) {
        if self.col < self.current_len() {
            let idx = self.byte_index();
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.current_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.current_len() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.current_len());
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.current_len());
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.current_len();
    }

    /// First visible row so the cursor stays inside `height` rows.
    fn scroll_for(&self, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        self.row.saturating_sub(height - 1)
    }

    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let gutter = (self.lines.len().to_string().len() + 1) as u16;
        if inner.width <= gutter {
            return;
        }
        let text_x = inner.x + gutter;
        let text_width = (inner.width - gutter) as usize;
        let top = self.scroll_for(inner.height as usize);

        for (offset, line) in self
            .lines
            .iter()
            .enumerate()
            .skip(top)
            .take(inner.height as usize)
        {
            let y = inner.y + (offset - top) as u16;
            let number = format!("{:>width$} ", offset + 1, width = gutter as usize - 1);
            let number_style = if offset == self.row {
                Style::default().fg(COLOR_TEXT)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            buf.set_string(inner.x, y, number, number_style);
            buf.set_stringn(text_x, y, line, text_width, Style::default().fg(COLOR_TEXT));
        }

        if focused {
            let before: String = self.lines[self.row].chars().take(self.col).collect();
            let cursor_x = before.width();
            if cursor_x < text_width {
                let under = self.lines[self.row].chars().nth(self.col).unwrap_or(' ');
                let y = inner.y + (self.row - top) as u16;
                buf.set_string(
                    text_x + cursor_x as u16,
                    y,
                    under.to_string(),
                    Style::default()
                        .fg(Color::Black)
                        .bg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', TAB)
}

/// A renderable wrapper for [`CodeEditor`].
pub struct CodeEditorWidget<'a> {
    editor: &'a CodeEditor,
    title: &'a str,
    focused: bool,
}

impl<'a> CodeEditorWidget<'a> {
    pub fn new(editor: &'a CodeEditor, title: &'a str, focused: bool) -> Self {
        Self {
            editor,
            title,
            focused,
        }
    }
}

impl Widget for CodeEditorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.editor.render_with_title(area, buf, self.title, self.focused);
    }
}

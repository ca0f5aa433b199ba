//! Multi-line text buffer backing the agenda editor panel.
//!
//! Cursor positions are in characters, not bytes.

#[derive(Debug, Clone)]
pub struct AgendaEditor {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for AgendaEditor {
    fn default() -> Self {
        Self::new("")
    }
}

impl AgendaEditor {
    pub fn new(text: &str) -> Self {
        let mut editor = Self {
            lines: Vec::new(),
            row: 0,
            col: 0,
        };
        editor.set_text(text);
        editor
    }

    /// Replace the whole buffer and move the cursor to the start
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = 0;
        self.col = 0;
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// (row, column) in characters
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self, row: usize, col: usize) -> usize {
        self.lines[row]
            .char_indices()
            .nth(col)
            .map_or(self.lines[row].len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.newline();
            return;
        }
        let idx = self.byte_index(self.row, self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\r') {
            self.insert_char(c);
        }
    }

    pub fn newline(&mut self) {
        let idx = self.byte_index(self.row, self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = self.byte_index(self.row, self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    /// Delete the character under the cursor, joining lines at end of line
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let idx = self.byte_index(self.row, self.col);
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
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty_has_one_line() {
        let editor = AgendaEditor::new("");
        assert_eq!(editor.lines(), &[String::new()]);
        assert_eq!(editor.cursor(), (0, 0));
    }

    #[test]
    fn test_text_round_trip() {
        let editor = AgendaEditor::new("A - 1\nB - 2");
        assert_eq!(editor.text(), "A - 1\nB - 2");
    }

    #[test]
    fn test_insert_and_newline() {
        let mut editor = AgendaEditor::new("");
        editor.insert_str("Intro - 5\nQ&A - 10");
        assert_eq!(editor.text(), "Intro - 5\nQ&A - 10");
        assert_eq!(editor.cursor(), (1, 8));
    }

    #[test]
    fn test_newline_splits_line() {
        let mut editor = AgendaEditor::new("AB");
        editor.move_right();
        editor.newline();
        assert_eq!(editor.text(), "A\nB");
        assert_eq!(editor.cursor(), (1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = AgendaEditor::new("A\nB");
        editor.move_down();
        editor.backspace();
        assert_eq!(editor.text(), "AB");
        assert_eq!(editor.cursor(), (0, 1));
        editor.backspace();
        assert_eq!(editor.text(), "B");
        editor.backspace();
        assert_eq!(editor.text(), "B");
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut editor = AgendaEditor::new("A\nB");
        editor.move_end();
        editor.delete();
        assert_eq!(editor.text(), "AB");
        editor.move_home();
        editor.delete();
        assert_eq!(editor.text(), "B");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut editor = AgendaEditor::new("Café");
        editor.move_end();
        assert_eq!(editor.cursor(), (0, 4));
        editor.backspace();
        assert_eq!(editor.text(), "Caf");
        editor.insert_char('é');
        editor.move_left();
        editor.insert_char('-');
        assert_eq!(editor.text(), "Caf-é");
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut editor = AgendaEditor::new("Long line\nAb");
        editor.move_end();
        editor.move_down();
        assert_eq!(editor.cursor(), (1, 2));
        editor.move_up();
        assert_eq!(editor.cursor(), (0, 2));
    }

    #[test]
    fn test_horizontal_movement_wraps() {
        let mut editor = AgendaEditor::new("A\nB");
        editor.move_end();
        editor.move_right();
        assert_eq!(editor.cursor(), (1, 0));
        editor.move_left();
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_set_text_resets_cursor() {
        let mut editor = AgendaEditor::new("A\nB");
        editor.move_down();
        editor.set_text("C");
        assert_eq!(editor.cursor(), (0, 0));
        assert_eq!(editor.text(), "C");
    }
}

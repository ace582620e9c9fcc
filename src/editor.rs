//! Text field editor
//!
//! Multi-line editor state backing every text input in a tool panel (mock
//! JSON body, regex description, config input, SQL schema/description).
//! Mounted fresh with its panel on every tool switch.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldEditor {
    content: String,
    /// Byte offset into `content`; always kept on a char boundary.
    cursor: usize,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: String) -> Self {
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Replace all content, cursor at the end.
    pub fn set_content(&mut self, content: String) {
        self.cursor = content.len();
        self.content = content;
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.clamp_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn insert_str(&mut self, s: &str) {
        let cursor = self.clamp_to_boundary(self.cursor);
        self.content.insert_str(cursor, s);
        self.cursor = cursor + s.len();
    }

    /// Insert with curly quotes normalized to straight ones, so pasted text
    /// stays valid JSON.
    pub fn insert_str_normalized(&mut self, s: &str) {
        let normalized = s
            .replace('\u{201C}', "\"")
            .replace('\u{201D}', "\"")
            .replace('\u{2018}', "'")
            .replace('\u{2019}', "'");
        self.insert_str(&normalized);
    }

    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut cursor = self.cursor;
        while cursor > 0 && !self.content.is_char_boundary(cursor - 1) {
            cursor -= 1;
        }
        if cursor > 0 {
            cursor -= 1;
        }

        self.content.remove(cursor);
        self.cursor = cursor;
        true
    }

    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let cursor = self.clamp_to_boundary(self.cursor);
        self.content.remove(cursor);
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut new_cursor = self.cursor - 1;
        while new_cursor > 0 && !self.content.is_char_boundary(new_cursor) {
            new_cursor -= 1;
        }
        self.cursor = new_cursor;
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let mut new_cursor = self.cursor + 1;
        while new_cursor < self.content.len() && !self.content.is_char_boundary(new_cursor) {
            new_cursor += 1;
        }
        self.cursor = new_cursor.min(self.content.len());
        true
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Handle a key event against this editor. Returns true if consumed.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Collect a burst of character events into one insertion so terminal
    /// paste lands in a single write. Returns the number of characters
    /// inserted.
    pub fn handle_paste_batch(&mut self, initial_char: char) -> usize {
        let mut chars = vec![initial_char];

        loop {
            match crossterm::event::poll(std::time::Duration::from_millis(0)) {
                Ok(true) => {
                    if let Ok(Event::Key(next_key)) = crossterm::event::read() {
                        match next_key.code {
                            KeyCode::Char(next_c)
                                if !next_key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                chars.push(next_c);
                            }
                            _ => break,
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }

        let count = chars.len();
        let batch: String = chars.into_iter().collect();
        self.insert_str_normalized(&batch);
        count
    }

    fn clamp_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor() {
        let editor = FieldEditor::new();
        assert_eq!(editor.content(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_with_content() {
        let editor = FieldEditor::with_content("hello".to_string());
        assert_eq!(editor.content(), "hello");
        assert_eq!(editor.cursor(), 5);
    }

    #[test]
    fn test_insert_char() {
        let mut editor = FieldEditor::new();
        editor.insert_char('a');
        assert_eq!(editor.content(), "a");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_insert_newline() {
        let mut editor = FieldEditor::with_content("CREATE TABLE users(id INT)".to_string());
        editor.insert_newline();
        editor.insert_str("CREATE TABLE posts(id INT)");
        assert_eq!(editor.content().lines().count(), 2);
    }

    #[test]
    fn test_delete_char_before_cursor() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        assert!(editor.delete_char_before_cursor());
        assert_eq!(editor.content(), "hell");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_delete_at_start() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        editor.move_cursor_to_start();
        assert!(!editor.delete_char_before_cursor());
        assert_eq!(editor.content(), "hello");
    }

    #[test]
    fn test_move_cursor_left_right() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        assert!(editor.move_cursor_left());
        assert_eq!(editor.cursor(), 4);
        assert!(editor.move_cursor_right());
        assert_eq!(editor.cursor(), 5);
        assert!(!editor.move_cursor_right()); // At end
    }

    #[test]
    fn test_clear() {
        let mut editor = FieldEditor::with_content("hello".to_string());
        editor.clear();
        assert_eq!(editor.content(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_utf8_handling() {
        let mut editor = FieldEditor::new();
        editor.insert_char('😀'); // Multi-byte
        assert_eq!(editor.content(), "😀");
        assert_eq!(editor.cursor(), 4);
        assert!(editor.delete_char_before_cursor());
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_smart_quote_normalization() {
        let mut editor = FieldEditor::new();
        let smart_quoted = "{\u{201C}name\u{201D}:\u{201D}x\u{201D}}";
        editor.insert_str_normalized(smart_quoted);
        assert_eq!(editor.content(), r#"{"name":"x"}"#);
    }

    #[test]
    fn test_regular_quotes_unchanged() {
        let mut editor = FieldEditor::new();
        editor.insert_str_normalized(r#"{"name":"x"}"#);
        assert_eq!(editor.content(), r#"{"name":"x"}"#);
    }
}

//! Single-line text buffer with a cursor
//!
//! The cursor is a char index, not a byte index, so multi-byte input
//! (accents, emoji in an FAQ answer) edits cleanly.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Field holding `value` with the cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::with_value(value);
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut f = TextField::default();
        for c in "555-01".chars() {
            f.insert(c);
        }
        f.backspace();
        assert_eq!(f.value(), "555-0");
        assert_eq!(f.cursor(), 5);
    }

    #[test]
    fn edits_in_the_middle() {
        let mut f = TextField::with_value("+1555");
        f.move_home();
        f.move_right();
        f.insert('(');
        assert_eq!(f.value(), "+(1555");
        f.delete();
        assert_eq!(f.value(), "+(555");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn multibyte_cursor() {
        let mut f = TextField::with_value("café");
        f.backspace();
        assert_eq!(f.value(), "caf");
        f.insert('é');
        f.move_left();
        f.insert('f');
        assert_eq!(f.value(), "caffé");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut f = TextField::with_value("ab");
        f.move_right();
        f.move_right();
        assert_eq!(f.cursor(), 2);
        f.move_home();
        f.move_left();
        f.backspace();
        assert_eq!(f.cursor(), 0);
        assert_eq!(f.value(), "ab");
    }
}

/// Cursor over the characters of an in-memory string.
///
/// The cursor starts at `-1` (start of input, nothing consumed yet) and ends
/// at the input length once every character has been consumed. Positions
/// count chars, not bytes.
#[derive(Debug, Clone)]
pub struct CharSource {
    input: Vec<char>,
    cursor: isize,
}

impl CharSource {
    pub fn new(input: &str) -> Self {
        Self::with_cursor(input, -1)
    }

    /// Starts reading `input` from an arbitrary position.
    pub fn with_cursor(input: &str, cursor: isize) -> Self {
        Self {
            input: input.chars().collect(),
            cursor,
        }
    }

    /// Position of the next character to be consumed.
    pub fn next_pos(&self) -> isize {
        self.cursor
    }

    pub fn len(&self) -> isize {
        self.input.len() as isize
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// The next character, `None` before the first [`consume`](Self::consume)
    /// or once the end has been reached.
    pub fn peek(&self) -> Option<char> {
        if self.is_sof() {
            return None;
        }
        self.char_at(self.cursor)
    }

    /// The character `n` positions ahead of the cursor, `peek_nth(0)` being the
    /// next one.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.index_ahead(n).and_then(|index| self.char_at(index))
    }

    /// Consumes the next character and advances the cursor.
    ///
    /// Leaving the start of input consumes nothing and returns `None`.
    pub fn consume(&mut self) -> Option<char> {
        if self.is_sof() {
            self.cursor += 1;
            return None;
        }

        let next = self.char_at(self.cursor)?;
        self.cursor += 1;
        Some(next)
    }

    /// Consumes up to and including the character `n` positions ahead.
    /// Running off the end leaves the cursor at the input length.
    pub fn consume_nth(&mut self, n: usize) -> Option<char> {
        match self.index_ahead(n).filter(|&index| index < self.len()) {
            Some(index) => {
                self.cursor = index + 1;
                self.char_at(index)
            }
            None => {
                self.cursor = self.len();
                None
            }
        }
    }

    pub fn is_sof(&self) -> bool {
        self.cursor < 0
    }

    pub fn is_eof(&self) -> bool {
        self.cursor >= self.len()
    }

    /// `None` when the index does not fit an `isize`, so it is past any input.
    fn index_ahead(&self, n: usize) -> Option<isize> {
        isize::try_from(n)
            .ok()
            .and_then(|n| self.cursor.checked_add(n))
    }

    fn char_at(&self, index: isize) -> Option<char> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.input.get(i).copied())
    }
}

//! Character cursor over PGN text.

/// Position within the input. All scanning state lives here; the parser
/// functions take it by `&mut`.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Byte offset into the input.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The next character, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes and returns the next character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// True when nothing but the start of input or a newline precedes the
    /// cursor.
    pub(crate) fn at_line_start(&self) -> bool {
        self.pos == 0 || self.input[..self.pos].ends_with('\n')
    }

    /// Consumes characters while `pred` holds and returns them.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Consumes up to and including `end`, or to end of input.
    pub(crate) fn skip_past(&mut self, end: char) {
        while let Some(c) = self.bump() {
            if c == end {
                break;
            }
        }
    }

    /// Consumes the rest of the current line including its newline.
    pub(crate) fn skip_line(&mut self) {
        self.skip_past('\n');
    }
}

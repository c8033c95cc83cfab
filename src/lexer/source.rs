use crate::Position;

/// The scanner's end-of-input sentinel character.
pub const EOT_CHAR: char = '\u{0}';

/// Character-input boundary of the front end.
///
/// The scanner's only contract with its input: monotonic forward-only
/// consumption, with `EOT_CHAR` signalling end of input.
pub trait SourceReader {
    /// The character under the cursor, or `EOT_CHAR` past the end.
    fn current_char(&self) -> char;

    /// The (line, column) of the character under the cursor.
    fn position(&self) -> Position;

    /// Moves the cursor one character forward.
    fn advance(&mut self);

    /// Moves the cursor past the rest of the current line, consuming the
    /// newline itself. Used for line comments.
    fn skip_to_end_of_line(&mut self);

    fn at_eot(&self) -> bool {
        self.current_char() == EOT_CHAR
    }
}

/// In-memory `SourceReader` over a string.
pub struct StringSource {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl StringSource {
    pub fn new(source: &str) -> Self {
        StringSource {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }
}

impl SourceReader for StringSource {
    fn current_char(&self) -> char {
        *self.chars.get(self.pos).unwrap_or(&EOT_CHAR)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) {
        if self.pos >= self.chars.len() {
            return;
        }
        if self.chars[self.pos] == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn skip_to_end_of_line(&mut self) {
        while !self.at_eot() && self.current_char() != '\n' {
            self.advance();
        }
        if !self.at_eot() {
            self.advance(); // past the newline
        }
    }
}

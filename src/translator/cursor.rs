/// A read position over borrowed source text.
///
/// The cursor only moves forward. It tracks the current line number as it
/// goes so diagnostics can point at the line being read.
///
/// # Examples
/// ```
/// use jspy::translator::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\ncd");
///
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.consume(), Some('a'));
/// cursor.advance_to(4);
///
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.current_line(), "cd");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line:   usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               offset: 0,
               line: 1 }
    }

    /// The whole input.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The 1-based line number of the read position.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consumes and returns the next character.
    ///
    /// A `\n`, or a `\r` not followed by `\n`, starts a new line.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' || (c == '\r' && self.peek() != Some('\n')) {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes characters until the read position reaches `offset`.
    ///
    /// Offsets behind the read position are ignored.
    pub fn advance_to(&mut self, offset: usize) {
        while self.offset < offset {
            if self.consume().is_none() {
                break;
            }
        }
    }

    /// Returns the text of the line containing the read position, without
    /// its line terminator.
    ///
    /// A position sitting on a line terminator belongs to the line that the
    /// terminator ends.
    #[must_use]
    pub fn current_line(&self) -> &'src str {
        let is_terminator = |c: char| c == '\n' || c == '\r';
        let start = self.source[..self.offset].rfind(is_terminator)
                                              .map_or(0, |i| i + 1);
        let end = self.source[self.offset..].find(is_terminator)
                                            .map_or(self.source.len(), |i| self.offset + i);
        &self.source[start..end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// A failed construct is dropped from the output; the error describes why.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The text of that line.
        snippet:  String,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The text of that line.
        snippet:  String,
    },
    /// A run of digits and dots that is not a valid number, such as `1.2.3`.
    MalformedNumber {
        /// The offending literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The text of that line.
        snippet: String,
    },
    /// A `var` declaration that is not of the form `var name = value`.
    InvalidDeclaration {
        /// Details about the problem.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The text of that line.
        snippet: String,
    },
}

impl ParseError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::InvalidDeclaration { line, .. } => *line,
        }
    }

    /// The text of the line the error was detected on.
    #[must_use]
    pub fn snippet(&self) -> &str {
        match self {
            Self::UnexpectedToken { snippet, .. }
            | Self::UnexpectedEndOfInput { snippet, .. }
            | Self::MalformedNumber { snippet, .. }
            | Self::InvalidDeclaration { snippet, .. } => snippet,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token,
                                    expected,
                                    line,
                                    .. } => {
                write!(f, "Error on line {line}: Unexpected token {token}, expected {expected}.")?;
            },

            Self::UnexpectedEndOfInput { expected, line, .. } => {
                write!(f, "Error on line {line}: Unexpected end of input, expected {expected}.")?;
            },

            Self::MalformedNumber { literal, line, .. } => {
                write!(f, "Error on line {line}: Malformed number literal '{literal}'.")?;
            },

            Self::InvalidDeclaration { message, line, .. } => write!(f,
                                                                     "Error on line {line}: Invalid variable declaration: {message}. Example: var x = 1")?,
        }

        let snippet = self.snippet().trim();
        if !snippet.is_empty() {
            write!(f, "\n    {snippet}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

use logos::Logos;

use crate::{error::ParseError, translator::cursor::Cursor};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// The input is exhausted. Produced by [`Lexer::next_token`], never by the
    /// derived scanner.
    EndOfInput,
    /// Identifier tokens; variable or function names such as `x` or `Math`.
    /// Any Unicode letter may start one, letters and numbers may follow.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// Digits and dots are consumed greedily; a run that is not a valid
    /// number, such as `1.2.3`, or that is too large for an `f64`, is a
    /// lexing error.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// A run of `\r`, `\n` and `;` characters.
    #[regex(r"[\r\n;]+")]
    StatementEnd,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `var`
    #[token("var")]
    Var,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `// Comments.`
    #[regex(r"//[^\r\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\x0B\x0C]+", logos::skip)]
    Ignored,
    /// Any other single character: operators, punctuation, and characters
    /// the grammar does not know about.
    #[regex(r".", |lex| lex.slice().chars().next(), priority = 0)]
    Punct(char),
}

impl Token {
    /// Returns `true` for the punctuation token `c`.
    #[must_use]
    pub fn is_punct(&self, c: char) -> bool {
        *self == Self::Punct(c)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "end of input"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(value) => write!(f, "number {value}"),
            Self::StatementEnd => write!(f, "end of statement"),
            Self::Function => write!(f, "'function'"),
            Self::Return => write!(f, "'return'"),
            Self::Var => write!(f, "'var'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::Comment => write!(f, "comment"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Punct(c) => write!(f, "'{c}'"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice holds more than one decimal point or overflows to
///   infinity.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

/// Produces tokens one at a time from source text.
///
/// Classification is done by the derived [`Token`] scanner; the lexer keeps a
/// [`Cursor`] in step with it so that every token knows the line it came from.
///
/// # Examples
/// ```
/// use jspy::translator::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("var x = 1 // one");
///
/// assert_eq!(lexer.next_token(), Ok(Token::Var));
/// assert_eq!(lexer.next_token(), Ok(Token::Identifier("x".to_string())));
/// assert_eq!(lexer.next_token(), Ok(Token::Punct('=')));
/// assert_eq!(lexer.next_token(), Ok(Token::Number(1.0)));
/// assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
/// ```
pub struct Lexer<'src> {
    scanner:   logos::Lexer<'src, Token>,
    cursor:    Cursor<'src>,
    line:      usize,
    line_text: &'src str,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let cursor = Cursor::new(source);
        let line_text = cursor.current_line();
        Self { scanner: Token::lexer(source),
               cursor,
               line: 1,
               line_text }
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted every call returns [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedNumber`] for a numeric literal that does
    /// not convert to a finite number. The literal is consumed, so the
    /// following call continues after it.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(result) = self.scanner.next() else {
            self.mark(self.cursor.source().len());
            return Ok(Token::EndOfInput);
        };

        let span = self.scanner.span();
        self.mark(span.start);
        self.cursor.advance_to(span.end);

        result.map_err(|()| ParseError::MalformedNumber { literal: self.scanner.slice().to_string(),
                                                          line:    self.line,
                                                          snippet: self.line_text.to_string(), })
    }

    /// The line of the most recently produced token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The source text of the line of the most recently produced token.
    #[must_use]
    pub const fn line_text(&self) -> &'src str {
        self.line_text
    }

    fn mark(&mut self, offset: usize) {
        self.cursor.advance_to(offset);
        self.line = self.cursor.line();
        self.line_text = self.cursor.current_line();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    /// Yields tokens up to, but not including, [`Token::EndOfInput`].
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::EndOfInput) => None,
            other => Some(other),
        }
    }
}

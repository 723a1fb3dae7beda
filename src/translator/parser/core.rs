use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    translator::{
        context::Context,
        lexer::{Lexer, Token},
        parser::{binary::parse_binary_rhs, primary::parse_primary},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Everything a grammar production needs: the token source, the single token
/// of lookahead, and the context that accumulates parsed definitions.
///
/// A fresh state is created for each [`parse`](super::parse) call; only the
/// context outlives it.
pub struct ParseState<'src, 'ctx> {
    lexer:   Lexer<'src>,
    current: Token,
    context: &'ctx mut Context,
}

impl<'src, 'ctx> ParseState<'src, 'ctx> {
    /// Creates a state over `source`. No token has been read yet; the current
    /// token is a statement separator until the first [`advance`](Self::advance).
    pub fn new(source: &'src str, context: &'ctx mut Context) -> Self {
        Self { lexer: Lexer::new(source),
               current: Token::StatementEnd,
               context }
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Replaces the lookahead with the next token from the lexer.
    ///
    /// # Errors
    /// Propagates lexing errors; the lookahead is left unchanged in that case.
    pub fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consumes any statement separators at the lookahead.
    pub fn skip_statement_ends(&mut self) -> ParseResult<()> {
        while self.current == Token::StatementEnd {
            self.advance()?;
        }
        Ok(())
    }

    /// Consumes the punctuation token `c`, or fails naming `expected`.
    pub fn expect_punct(&mut self, c: char, expected: &str) -> ParseResult<()> {
        if self.current.is_punct(c) {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        self.context
    }

    /// Builds a diagnostic for the lookahead token, which does not match
    /// `expected`.
    #[must_use]
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        let line = self.lexer.line();
        let snippet = self.lexer.line_text().to_string();

        match &self.current {
            Token::EndOfInput => ParseError::UnexpectedEndOfInput { expected,
                                                                    line,
                                                                    snippet },
            token => ParseError::UnexpectedToken { token: token.to_string(),
                                                   expected,
                                                   line,
                                                   snippet },
        }
    }

    /// Builds a diagnostic for a malformed `var` declaration.
    #[must_use]
    pub fn invalid_declaration(&self, message: impl Into<String>) -> ParseError {
        ParseError::InvalidDeclaration { message: message.into(),
                                         line:    self.lexer.line(),
                                         snippet: self.lexer.line_text().to_string(), }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing: a primary expression
/// followed by any chain of binary operators, folded by precedence climbing.
///
/// Grammar: `expression := primary (binop primary)*`
///
/// # Parameters
/// - `state`: Parser state positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    let lhs = parse_primary(state)?;
    parse_binary_rhs(state, 0, lhs)
}

/// Parses an `if` expression with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) <then_expr>
///     else <else_expr>
/// ```
/// Either branch may be a braced block or a single expression. `else if`
/// chains need no special handling: the else branch is just another `if`
/// expression. Statement separators are allowed before each branch and
/// before `else`.
///
/// # Parameters
/// - `state`: Parser state positioned at the `if` keyword.
///
/// # Returns
/// An `Expr::If` node representing the full conditional expression.
///
/// # Errors
/// - `UnexpectedToken` if the condition is not parenthesized.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    state.advance()?;
    state.expect_punct('(', "'(' after 'if'")?;
    let condition = parse_expression(state)?;
    state.expect_punct(')', "')' after the if condition")?;

    state.skip_statement_ends()?;
    let then_branch = parse_expression(state)?;

    state.skip_statement_ends()?;
    let else_branch = if *state.current() == Token::Else {
        state.advance()?;
        state.skip_statement_ends()?;
        Some(Box::new(parse_expression(state)?))
    } else {
        None
    };

    debug!("parsed if expression (else branch: {})", else_branch.is_some());

    Ok(Expr::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch })
}

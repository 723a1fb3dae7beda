use log::{debug, warn};

use crate::{
    error::ParseError,
    translator::{context::Context, lexer::Token},
};

/// Shared parser state and the expression entry points.
///
/// Holds [`ParseState`](self::core::ParseState), the `ParseResult` alias,
/// [`parse_expression`](self::core::parse_expression) and `if` expressions.
pub mod core;

/// Binary operators.
///
/// Implements the operator precedence table and precedence climbing.
pub mod binary;

/// Primary expressions.
///
/// Literals, identifiers and calls, `return`, `var` declarations and
/// parenthesized expressions.
pub mod primary;

/// Block parsing.
pub mod block;

/// Function definitions and top-level statements.
pub mod statement;

/// Small helpers shared by the productions.
pub mod utils;

use self::{
    core::ParseState,
    statement::{parse_function, parse_top_level_expression},
};

/// Parses `source` and appends every construct that parsed to `context`.
///
/// Top-level expression statements go to `context.globals`, function
/// definitions to `context.functions`. Separators and comments between them
/// are skipped.
///
/// A construct that fails to parse is dropped: its diagnostic is logged and
/// collected, the parser steps over exactly one token, and parsing resumes.
/// There is no search for a safe restart point, so one error can cost the
/// rest of the construct it occurred in.
///
/// # Returns
/// The diagnostics of all dropped constructs, in source order.
///
/// # Examples
/// ```
/// use jspy::translator::{context::Context, parser::parse};
///
/// let mut context = Context::new();
/// let diagnostics = parse("var x = 1 +\ny = 2", &mut context);
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(context.globals.len(), 1);
/// ```
pub fn parse(source: &str, context: &mut Context) -> Vec<ParseError> {
    let mut state = ParseState::new(source, context);
    let mut diagnostics = Vec::new();

    skip_token(&mut state, &mut diagnostics);

    loop {
        let result = match state.current() {
            Token::EndOfInput => break,
            Token::StatementEnd => {
                skip_token(&mut state, &mut diagnostics);
                continue;
            },
            Token::Function => {
                parse_function(&mut state).map(|function| state.context_mut().functions.push(function))
            },
            _ => parse_top_level_expression(&mut state).map(|global| {
                                                          state.context_mut().globals.push(global);
                                                      }),
        };

        if let Err(e) = result {
            warn!("{e}");
            diagnostics.push(e);
            skip_token(&mut state, &mut diagnostics);
        }
    }

    debug!("parsed {} global(s) and {} function(s) so far; {} error(s) in this input",
           state.context().globals.len(),
           state.context().functions.len(),
           diagnostics.len());

    diagnostics
}

/// Moves past the lookahead token. A malformed token met on the way is
/// reported and stepped over as well.
fn skip_token(state: &mut ParseState<'_, '_>, diagnostics: &mut Vec<ParseError>) {
    while let Err(e) = state.advance() {
        warn!("{e}");
        diagnostics.push(e);
    }
}

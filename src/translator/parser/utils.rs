use crate::translator::{
    lexer::Token,
    parser::core::{ParseResult, ParseState},
};

/// Parses a comma-separated list of items up to a closing `)`.
///
/// This utility is shared by call argument lists and function parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list. A trailing comma is
/// an error because `parse_item` then sees the `)`.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `state`: Parser state positioned after the opening `(`.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items; the closing `)` has been consumed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the input ends before the closing `)`.
pub(in crate::translator::parser) fn parse_comma_separated<'src, 'ctx, T>(
    state: &mut ParseState<'src, 'ctx>,
    parse_item: impl Fn(&mut ParseState<'src, 'ctx>) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if state.current().is_punct(')') {
        state.advance()?;
        return Ok(items);
    }
    loop {
        items.push(parse_item(state)?);
        match state.current() {
            Token::Punct(',') => state.advance()?,
            Token::Punct(')') => {
                state.advance()?;
                break;
            },
            _ => return Err(state.unexpected("',' or ')'")),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `state`: Parser state positioned at an identifier.
/// - `expected`: Description used in the diagnostic when it is not one.
///
/// # Errors
/// Returns a `ParseError` if the lookahead is not an identifier.
pub(in crate::translator::parser) fn parse_identifier(state: &mut ParseState<'_, '_>,
                                                      expected: &str)
                                                      -> ParseResult<String> {
    let Token::Identifier(name) = state.current() else {
        return Err(state.unexpected(expected));
    };
    let name = name.clone();
    state.advance()?;
    Ok(name)
}

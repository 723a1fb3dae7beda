use std::rc::Rc;

use log::debug;

use crate::{
    ast::{FunctionDef, Prototype},
    translator::parser::{
        block::parse_block,
        core::{ParseResult, ParseState, parse_expression},
        utils::{parse_comma_separated, parse_identifier},
    },
};

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     function <name>(<param>, ...) { <statements> }
/// ```
/// Statement separators may appear between the parameter list and the body.
///
/// # Parameters
/// - `state`: Parser state positioned at the `function` keyword.
///
/// # Returns
/// The [`FunctionDef`], with a [`Block`](crate::ast::Block) body.
///
/// # Errors
/// - `UnexpectedToken` if the name, the parameter list, or the opening brace
///   of the body is missing or malformed.
/// - Propagates errors from the body.
pub fn parse_function(state: &mut ParseState<'_, '_>) -> ParseResult<FunctionDef> {
    state.advance()?;
    let prototype = parse_prototype(state)?;

    state.skip_statement_ends()?;
    if !state.current().is_punct('{') {
        return Err(state.unexpected("'{' to open the function body"));
    }
    let body = parse_block(state)?;

    debug!("parsed function {}({})", prototype.name, prototype.params.join(", "));

    Ok(FunctionDef { prototype: Rc::new(prototype),
                     body })
}

/// Parses `<name>(<param>, ...)`.
///
/// Grammar: `prototype := IDENT "(" (IDENT ("," IDENT)*)? ")"`
fn parse_prototype(state: &mut ParseState<'_, '_>) -> ParseResult<Prototype> {
    let name = parse_identifier(state, "a function name")?;
    state.expect_punct('(', "'(' after the function name")?;
    let params = parse_comma_separated(state, |state| parse_identifier(state, "a parameter name"))?;

    Ok(Prototype::new(name, params))
}

/// Parses a top-level expression statement and wraps it under the context's
/// shared synthetic prototype.
pub fn parse_top_level_expression(state: &mut ParseState<'_, '_>) -> ParseResult<FunctionDef> {
    let body = parse_expression(state)?;
    let prototype = state.context_mut().global_prototype();

    Ok(FunctionDef { prototype, body })
}

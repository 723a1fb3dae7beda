use log::debug;

use crate::{
    ast::Expr,
    translator::{
        lexer::Token,
        parser::{
            binary::parse_binary_rhs,
            block::parse_block,
            core::{ParseResult, ParseState, parse_expression, parse_if},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the operands of binary operators:
/// - numeric literals
/// - variable references and function calls
/// - `return` expressions
/// - `var` declarations
/// - `if` expressions
/// - parenthesized expressions
/// - blocks (`{ ... }`)
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | identifier_expr
///              | "return" expression
///              | "var" IDENT "=" expression
///              | if_expression
///              | "(" expression ")"
///              | block
/// ```
/// # Parameters
/// - `state`: Parser state positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    match state.current() {
        Token::Number(value) => {
            let value = *value;
            state.advance()?;
            Ok(Expr::number(value))
        },
        Token::Identifier(_) => parse_identifier_expr(state),
        Token::Return => parse_return(state),
        Token::Var => parse_declaration(state),
        Token::If => parse_if(state),
        Token::Punct('(') => parse_grouping(state),
        Token::Punct('{') => parse_block(state),
        _ => Err(state.unexpected("an expression")),
    }
}

/// Parses a variable reference or a function call.
///
/// An identifier followed by `.` and a second identifier forms a qualified
/// name such as `Math.max`, which is always a call. A plain identifier is a
/// call when directly followed by `(`, and a variable reference otherwise.
/// The name is passed through the context's externals table before the node
/// is built.
///
/// Grammar: `identifier_expr := IDENT ("." IDENT)? ("(" arguments? ")")?`
///
/// # Errors
/// - `UnexpectedToken` if `.` is not followed by an identifier, or a
///   qualified name is not followed by `(`.
/// - Propagates errors from the argument list.
pub fn parse_identifier_expr(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    let mut name = parse_identifier(state, "an identifier")?;

    let mut is_call = false;
    if state.current().is_punct('.') {
        state.advance()?;
        let member = parse_identifier(state, "a member name after '.'")?;
        name = format!("{name}.{member}");
        is_call = true;
    }

    let name = state.context().externals.resolve(&name).to_string();

    if is_call || state.current().is_punct('(') {
        state.expect_punct('(', "'(' after a qualified name")?;
        let arguments = parse_comma_separated(state, parse_expression)?;
        debug!("parsed call to {name} with {} argument(s)", arguments.len());
        Ok(Expr::Call { callee: name,
                        arguments })
    } else {
        Ok(Expr::Variable { name })
    }
}

/// Parses `return <expression>`.
fn parse_return(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    state.advance()?;
    let value = parse_expression(state)?;
    Ok(Expr::Return { value: Box::new(value) })
}

/// Parses a variable declaration.
///
/// A declaration has the form `var <identifier> = <expression>`. The name
/// must be a plain variable, not a call or a qualified name, and the
/// operator chain that follows must have `=` as its outermost operator with
/// the declared variable as the leftmost operand of the `=` chain. In
/// `var a = b = 1` the declared value is the assignment `b = 1`. A
/// declaration without an initializer is rejected.
///
/// # Returns
/// An `Expr::Binary` with `is_declaration` set.
///
/// # Errors
/// Returns `InvalidDeclaration` if the name is not a plain variable or the
/// initializer is missing, and propagates errors from the initializer.
fn parse_declaration(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    state.advance()?;

    let Expr::Variable { name } = parse_identifier_expr(state)? else {
        return Err(state.invalid_declaration("expected a variable name after 'var'"));
    };

    let target = Expr::variable(name.as_str());
    match split_assignment(parse_binary_rhs(state, 0, target.clone())?) {
        Some((first, value)) if first == target => {
            debug!("parsed declaration of {name}");
            Ok(Expr::declaration(name, value))
        },
        _ => Err(state.invalid_declaration(format!("'{name}' has no initializer"))),
    }
}

/// Splits an `=` chain into its leftmost operand and the assignment of the
/// rest, so that `(a = b) = 1` becomes `a` and `b = 1`.
///
/// Returns `None` if `expr` is not an assignment.
fn split_assignment(expr: Expr) -> Option<(Expr, Expr)> {
    let Expr::Binary { left, op: '=', right, .. } = expr else {
        return None;
    };

    if matches!(*left, Expr::Binary { op: '=', .. }) {
        let (first, rest) = split_assignment(*left)?;
        Some((first, Expr::binary(rest, '=', *right)))
    } else {
        Some((*left, *right))
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    state.advance()?;
    let expr = parse_expression(state)?;
    state.expect_punct(')', "')' to close the parenthesized expression")?;
    Ok(expr)
}

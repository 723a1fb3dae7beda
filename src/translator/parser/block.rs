use crate::{
    ast::{Block, Expr},
    translator::{
        lexer::Token,
        parser::core::{ParseResult, ParseState, parse_expression},
    },
};

/// Parses a block expression delimited by braces.
///
/// A block consists of zero or more statements, separated by newlines or
/// semicolons. Parsing continues until a closing `}`, a `function` keyword,
/// or the end of input; only a `}` is consumed.
///
/// The context's nesting counter is raised while the block's statements are
/// parsed and restored afterwards, whether or not they parse. The block
/// records the depth it was opened at for indentation.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `state`: Parser state positioned at the opening brace.
///
/// # Returns
/// An `Expr::Block` containing all parsed statements.
pub fn parse_block(state: &mut ParseState<'_, '_>) -> ParseResult<Expr> {
    state.expect_punct('{', "'{'")?;

    state.context_mut().block_depth += 1;
    let depth = state.context().block_depth();
    let statements = parse_statements(state);
    state.context_mut().block_depth -= 1;

    Ok(Expr::Block(Block { depth,
                           statements: statements? }))
}

fn parse_statements(state: &mut ParseState<'_, '_>) -> ParseResult<Vec<Expr>> {
    let mut statements = Vec::new();

    loop {
        state.skip_statement_ends()?;

        match state.current() {
            Token::Punct('}') => {
                state.advance()?;
                break;
            },
            Token::EndOfInput | Token::Function => break,
            _ => statements.push(parse_expression(state)?),
        }
    }

    Ok(statements)
}

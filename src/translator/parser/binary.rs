use crate::{
    ast::Expr,
    translator::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState},
            primary::parse_primary,
        },
    },
};

/// Returns the operator character and binding power of a binary operator
/// token, or `None` if the token is not one.
///
/// | operator    | precedence |
/// |-------------|------------|
/// | `=`         | 2          |
/// | `<` `>`     | 10         |
/// | `+` `-`     | 20         |
/// | `*` `/`     | 40         |
#[must_use]
pub fn binary_operator(token: &Token) -> Option<(char, u8)> {
    let Token::Punct(op) = *token else {
        return None;
    };
    let precedence = match op {
        '=' => 2,
        '<' | '>' => 10,
        '+' | '-' => 20,
        '*' | '/' => 40,
        _ => return None,
    };
    Some((op, precedence))
}

/// Folds the binary operators following `lhs` into a tree.
///
/// Operators binding at least as tightly as `min_precedence` are consumed.
/// When the operator after the right operand binds strictly tighter than the
/// current one, the right operand is extended first by recursing with a
/// raised threshold; otherwise the chain folds to the left. This makes every
/// operator left-associative, `=` included.
///
/// Grammar: `binary_rhs := (binop primary)*`
///
/// # Parameters
/// - `state`: Parser state positioned after `lhs`.
/// - `min_precedence`: The weakest operator this call may consume.
/// - `lhs`: The already parsed left operand.
///
/// # Returns
/// `lhs` itself if no operator follows, otherwise an `Expr::Binary` tree.
pub fn parse_binary_rhs(state: &mut ParseState<'_, '_>,
                        min_precedence: u8,
                        mut lhs: Expr)
                        -> ParseResult<Expr> {
    loop {
        let Some((op, precedence)) = binary_operator(state.current()) else {
            return Ok(lhs);
        };
        if precedence < min_precedence {
            return Ok(lhs);
        }
        state.advance()?;

        let mut rhs = parse_primary(state)?;
        if binary_operator(state.current()).is_some_and(|(_, next)| precedence < next) {
            rhs = parse_binary_rhs(state, precedence + 1, rhs)?;
        }

        lhs = Expr::binary(lhs, op, rhs);
    }
}

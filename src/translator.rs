/// The read position over source text.
///
/// A forward-only cursor that tracks line numbers and can quote the line it
/// sits on for diagnostics.
pub mod cursor;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens one at a time:
/// identifiers, keywords, numbers, statement separators and single-character
/// operators.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Skips whitespace and `//` comments.
/// - Reports malformed numeric literals.
pub mod lexer;
/// The parse context and the externals table.
///
/// The context accumulates the globals and functions of every parse run
/// against it; the externals table remaps qualified host names.
pub mod context;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// constructs an AST for each top-level statement or function definition.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, honoring operator precedence.
/// - Validates the grammar, reporting errors with line information.
/// - Recovers from a failed construct and continues with the next one.
pub mod parser;
/// Python code generation from the AST.
pub mod codegen;
/// Sessions that hand generated programs to a host evaluator.
pub mod session;

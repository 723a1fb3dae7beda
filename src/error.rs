/// Parsing errors.
///
/// Defines every diagnostic that can be raised while tokenizing and parsing
/// source code. Each one carries the line it was detected on and the text of
/// that line so it can be shown to the user with context.
pub mod parse_error;

pub use parse_error::ParseError;

//! # jspy
//!
//! jspy translates a small JavaScript-flavoured scripting language into
//! Python source. Scripts can declare variables, do arithmetic, define
//! functions, branch with `if`/`else` and call host functions; the generated
//! program is meant to be executed by a Python evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    translator::{codegen::Generator, context::Context, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and consumed by the code generator.
pub mod ast;
/// Options controlling the generated code.
pub mod config;
/// Provides the error type for lexing and parsing.
///
/// Errors carry the line they were detected on and the text of that line.
pub mod error;
/// Orchestrates translation.
///
/// This module ties together the cursor, lexer, parser, and code generator,
/// and defines the boundary to the host evaluator that runs the output.
///
/// # Responsibilities
/// - Coordinates all stages: tokenizing, parsing, and rendering.
/// - Accumulates parsed definitions across runs in a context.
/// - Hands generated programs to a host evaluator.
pub mod translator;

/// The outcome of translating one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The generated Python program.
    pub code:        String,
    /// Diagnostics of the constructs left out of `code`.
    pub diagnostics: Vec<ParseError>,
}

impl Translation {
    /// Returns `true` if every construct of the script was translated.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Translates `source` to Python with default options.
///
/// Constructs that fail to parse are reported in
/// [`Translation::diagnostics`] and left out of the generated code; the rest
/// of the script is still translated.
///
/// # Examples
/// ```
/// use jspy::translate;
///
/// let translation = translate("var x = 1 + 2 * 3");
/// assert_eq!(translation.code, "x = (1.0 + (2.0 * 3.0))\n\n");
/// assert!(translation.is_clean());
///
/// // The broken first statement is dropped, the second one survives.
/// let translation = translate("1 +\ny = 2");
/// assert_eq!(translation.code, "y = 2.0\n\n");
/// assert_eq!(translation.diagnostics.len(), 1);
/// ```
#[must_use]
pub fn translate(source: &str) -> Translation {
    translate_with(source, &mut Context::new(), &Generator::default())
}

/// Translates `source` into `context` and renders it with `generator`.
///
/// Anything already in `context` is rendered too.
#[must_use]
pub fn translate_with(source: &str, context: &mut Context, generator: &Generator) -> Translation {
    let diagnostics = parse(source, context);
    Translation { code: generator.render(context),
                  diagnostics }
}

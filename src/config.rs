/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;
/// Default name of the synthetic function wrapping top-level statements.
pub const DEFAULT_GLOBAL_FUNCTION_NAME: &str = "__global";

/// Settings that shape the generated program.
///
/// The defaults produce idiomatic Python: four-space indentation and no
/// declaration keyword in front of `var` declarations.
///
/// # Examples
/// ```
/// use jspy::config::Options;
///
/// let options = Options { indent_width: 2,
///                         ..Options::default() };
///
/// assert_eq!(options.indent_width, 2);
/// assert_eq!(options.declaration_keyword, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Spaces emitted per block nesting level.
    pub indent_width:         usize,
    /// Keyword written in front of `var` declarations, if the target has one.
    pub declaration_keyword:  Option<String>,
    /// Name of the synthetic prototype shared by all top-level statements.
    pub global_function_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { indent_width:         DEFAULT_INDENT_WIDTH,
               declaration_keyword:  None,
               global_function_name: DEFAULT_GLOBAL_FUNCTION_NAME.to_string(), }
    }
}

impl Options {
    /// Returns the whitespace prefix for the given nesting level.
    #[must_use]
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }
}

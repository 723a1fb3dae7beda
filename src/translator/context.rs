use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{FunctionDef, Prototype},
    config::{DEFAULT_GLOBAL_FUNCTION_NAME, Options},
};

/// Maps qualified host-side names such as `Math.max` onto the flat names
/// used in generated code.
///
/// # Examples
/// ```
/// use jspy::translator::context::Externals;
///
/// let externals = Externals::host_defaults();
///
/// assert_eq!(externals.resolve("Math.max"), "max");
/// assert_eq!(externals.resolve("print"), "print");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Externals {
    names: HashMap<String, String>,
}

impl Externals {
    /// Creates an empty table; every name resolves to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table installed by the embedding session.
    #[must_use]
    pub fn host_defaults() -> Self {
        [("Math.max", "max"), ("Math.min", "min")].into_iter().collect()
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, qualified: impl Into<String>, flat: impl Into<String>) {
        self.names.insert(qualified.into(), flat.into());
    }

    /// Looks `name` up by exact match; unmapped names pass through unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.get(name).map_or(name, String::as_str)
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Externals {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { names: iter.into_iter()
                          .map(|(qualified, flat)| (qualified.into(), flat.into()))
                          .collect(), }
    }
}

/// Stores everything accumulated while parsing.
///
/// ## Usage
///
/// A `Context` is created once per host session and handed to every
/// [`parse`](crate::translator::parser::parse) call; each call appends the
/// constructs it parsed, so a later call sees the functions and globals of
/// the earlier ones. Parsing mutates the context, so it must not be shared
/// between concurrent parses.
#[derive(Debug, Clone)]
pub struct Context {
    /// Top-level statements, each wrapped under the shared synthetic
    /// prototype.
    pub globals:              Vec<FunctionDef>,
    /// Functions declared with `function`.
    pub functions:            Vec<FunctionDef>,
    /// Name remapping applied to identifiers as they are parsed.
    pub externals:            Externals,
    pub(crate) block_depth:   usize,
    global_function_name:     String,
    global_prototype:         Option<Rc<Prototype>>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates an empty context with no name remapping.
    #[must_use]
    pub fn new() -> Self {
        Self::with_externals(Externals::new())
    }

    /// Creates an empty context that remaps names through `externals`.
    #[must_use]
    pub fn with_externals(externals: Externals) -> Self {
        Self { globals: Vec::new(),
               functions: Vec::new(),
               externals,
               block_depth: 0,
               global_function_name: DEFAULT_GLOBAL_FUNCTION_NAME.to_string(),
               global_prototype: None }
    }

    /// Creates an empty context that names its synthetic prototype after
    /// [`Options::global_function_name`].
    #[must_use]
    pub fn with_options(externals: Externals, options: &Options) -> Self {
        Self { global_function_name: options.global_function_name.clone(),
               ..Self::with_externals(externals) }
    }

    /// Returns the synthetic prototype shared by all top-level statements,
    /// creating it on first use.
    pub fn global_prototype(&mut self) -> Rc<Prototype> {
        let name = &self.global_function_name;
        Rc::clone(self.global_prototype
                      .get_or_insert_with(|| Rc::new(Prototype::new(name.clone(), Vec::new()))))
    }

    /// Looks up a named function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// The current block nesting depth.
    #[must_use]
    pub const fn block_depth(&self) -> usize {
        self.block_depth
    }

    /// Drops the accumulated globals and functions, keeping the externals
    /// table.
    pub fn clear(&mut self) {
        self.globals.clear();
        self.functions.clear();
        self.block_depth = 0;
    }
}

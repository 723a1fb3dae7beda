use log::debug;

use crate::{
    config::Options,
    error::ParseError,
    translator::{
        codegen::Generator,
        context::{Context, Externals},
        parser::parse,
    },
};

/// A dynamic evaluator that runs generated programs.
///
/// The host owns the namespace programs execute in. Values bound with
/// [`set`](Host::set) are visible to the program, and everything the program
/// defines, functions included, can be read back with [`get`](Host::get).
pub trait Host {
    /// A value living in the host namespace.
    type Value;
    /// The failure raised when a program does not run.
    type Error: std::error::Error;

    /// Executes `program` against the namespace.
    ///
    /// # Errors
    /// Returns the host's error if the program fails to compile or run.
    fn execute(&mut self, program: &str) -> Result<(), Self::Error>;

    /// Reads a name from the namespace.
    fn get(&self, name: &str) -> Option<Self::Value>;

    /// Binds a name in the namespace.
    fn set(&mut self, name: &str, value: Self::Value);
}

/// A scripting session: source goes in, the host runs the translation.
///
/// The session keeps one [`Context`] for its whole life, so functions defined
/// by one [`eval`](Session::eval) call are still emitted, and callable, on
/// the next. Qualified host names are remapped with
/// [`Externals::host_defaults`].
pub struct Session<H: Host> {
    context:   Context,
    generator: Generator,
    host:      H,
}

impl<H: Host> Session<H> {
    /// Creates a session with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, Options::default())
    }

    /// Creates a session that renders with `options`.
    pub fn with_options(host: H, options: Options) -> Self {
        Self { context: Context::with_options(Externals::host_defaults(), &options),
               generator: Generator::new(options),
               host }
    }

    /// Parses `source` into the session, renders everything accumulated so
    /// far, and executes the result on the host.
    ///
    /// # Returns
    /// The diagnostics of constructs that failed to parse; those constructs
    /// are left out of the executed program.
    ///
    /// # Errors
    /// Returns the host's error if the generated program fails to run.
    pub fn eval(&mut self, source: &str) -> Result<Vec<ParseError>, H::Error> {
        let diagnostics = parse(source, &mut self.context);
        let program = self.generator.render(&self.context);
        debug!("executing generated program:\n{program}");

        self.host.execute(&program)?;
        Ok(diagnostics)
    }

    /// Reads a value from the host namespace.
    pub fn get(&self, name: &str) -> Option<H::Value> {
        self.host.get(name)
    }

    /// Binds a value in the host namespace.
    pub fn set(&mut self, name: &str, value: H::Value) {
        self.host.set(name, value);
    }

    /// Binds every pair of `values` in the host namespace.
    pub fn set_all<I>(&mut self, values: I)
        where I: IntoIterator<Item = (String, H::Value)>
    {
        for (name, value) in values {
            self.host.set(&name, value);
        }
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

use crate::{
    ast::{Block, Expr, FunctionDef},
    config::Options,
    translator::context::Context,
};

/// Renders parsed programs as Python source.
///
/// Rendering is a pure function of the AST and the [`Options`]: globals come
/// first, one statement per line, then a blank line, then every function
/// definition.
///
/// # Examples
/// ```
/// use jspy::{
///     config::Options,
///     translator::{codegen::Generator, context::Context, parser::parse},
/// };
///
/// let mut context = Context::new();
/// parse("var foo = 1\nfunction add(a, b) { return a + b }", &mut context);
///
/// let code = Generator::new(Options::default()).render(&context);
///
/// assert_eq!(code, "foo = 1.0\n\ndef add(a, b):\n    return (a + b)\n\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: Options,
}

impl Generator {
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Renders every global and function accumulated in `context`.
    #[must_use]
    pub fn render(&self, context: &Context) -> String {
        let mut out = String::new();

        for global in &context.globals {
            self.write_statement(&mut out, &global.body, 0);
        }
        out.push('\n');

        for function in &context.functions {
            self.write_function(&mut out, function);
        }

        out
    }

    /// Renders a single expression on one line.
    ///
    /// Constructs that are statements in Python get an expression form here:
    /// an assignment becomes `(name := value)`, an `if` becomes a conditional
    /// expression and a block evaluates all of its statements and yields the
    /// last one.
    #[must_use]
    pub fn render_expression(&self, expr: &Expr) -> String {
        match expr {
            Expr::Number { value } => format_number(*value),
            Expr::Variable { name } => name.clone(),
            // Python only allows `=` as a statement; anywhere else the chain
            // becomes nested assignment expressions.
            Expr::Binary { op: '=', .. } => {
                let mut operands = Vec::new();
                assignment_operands(expr, &mut operands);

                let mut rendered = operands.iter()
                                           .rev()
                                           .map(|operand| self.render_expression(operand));
                let value = rendered.next().unwrap_or_default();
                rendered.fold(value, |value, target| format!("({target} := {value})"))
            },
            Expr::Binary { left, op, right, .. } => format!("({} {op} {})",
                                                            self.render_expression(left),
                                                            self.render_expression(right)),
            Expr::Return { value } => format!("return {}", self.render_expression(value)),
            Expr::Call { callee, arguments } => {
                format!("{callee}({})", self.render_arguments(arguments))
            },
            Expr::If { condition,
                       then_branch,
                       else_branch, } => {
                let otherwise = else_branch.as_ref()
                                           .map_or_else(|| "None".to_string(),
                                                        |branch| self.render_expression(branch));
                format!("({} if {} else {otherwise})",
                        self.render_expression(then_branch),
                        self.render_expression(condition))
            },
            Expr::Block(Block { statements, .. }) => match statements.as_slice() {
                [] => "None".to_string(),
                [single] => self.render_expression(single),
                _ => format!("({})[-1]", self.render_arguments(statements)),
            },
        }
    }

    /// Renders `expr` as a statement at the outermost level, one line per
    /// Python statement.
    #[must_use]
    pub fn render_statement(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_statement(&mut out, expr, 0);
        out
    }

    /// Renders an `=` chain as the statement `a = b = value`.
    fn render_assignment(&self, expr: &Expr, is_declaration: bool) -> String {
        let mut operands = Vec::new();
        assignment_operands(expr, &mut operands);

        let assignment = operands.iter()
                                 .map(|operand| self.render_expression(operand))
                                 .collect::<Vec<_>>()
                                 .join(" = ");
        match (&self.options.declaration_keyword, is_declaration) {
            (Some(keyword), true) => format!("{keyword} {assignment}"),
            _ => assignment,
        }
    }

    fn render_arguments(&self, arguments: &[Expr]) -> String {
        arguments.iter()
                 .map(|argument| self.render_expression(argument))
                 .collect::<Vec<_>>()
                 .join(", ")
    }

    fn write_function(&self, out: &mut String, function: &FunctionDef) {
        let header = format!("def {}({}):", function.name(), function.params().join(", "));
        self.write_line(out, 0, &header);
        self.write_suite(out, &function.body, 0);
        out.push('\n');
    }

    /// Writes a statement starting at indentation `level`.
    fn write_statement(&self, out: &mut String, expr: &Expr, level: usize) {
        match expr {
            Expr::If { condition,
                       then_branch,
                       else_branch, } => {
                self.write_line(out, level, &format!("if {}:", self.render_expression(condition)));
                self.write_suite(out, then_branch, level);
                self.write_else(out, else_branch.as_deref(), level);
            },
            // Blocks carry no scope, so a bare one is flattened into its parent.
            Expr::Block(Block { statements, .. }) => {
                if statements.is_empty() {
                    self.write_line(out, level, "pass");
                }
                for statement in statements {
                    self.write_statement(out, statement, level);
                }
            },
            Expr::Binary { op: '=',
                           is_declaration,
                           .. } => {
                self.write_line(out, level, &self.render_assignment(expr, *is_declaration));
            },
            other => self.write_line(out, level, &self.render_expression(other)),
        }
    }

    /// Writes the body belonging to a header line (`def`, `if`, `else`) that
    /// sits at indentation `level`.
    fn write_suite(&self, out: &mut String, body: &Expr, level: usize) {
        match body {
            Expr::Block(Block { depth, statements }) => {
                let inner = (*depth).max(level + 1);
                if statements.is_empty() {
                    self.write_line(out, inner, "pass");
                }
                for statement in statements {
                    self.write_statement(out, statement, inner);
                }
            },
            other => self.write_statement(out, other, level + 1),
        }
    }

    fn write_else(&self, out: &mut String, branch: Option<&Expr>, level: usize) {
        match branch {
            None => {},
            Some(Expr::If { condition,
                            then_branch,
                            else_branch, }) => {
                self.write_line(out,
                                level,
                                &format!("elif {}:", self.render_expression(condition)));
                self.write_suite(out, then_branch, level);
                self.write_else(out, else_branch.as_deref(), level);
            },
            Some(other) => {
                self.write_line(out, level, "else:");
                self.write_suite(out, other, level);
            },
        }
    }

    fn write_line(&self, out: &mut String, level: usize, text: &str) {
        out.push_str(&self.options.indent(level));
        out.push_str(text);
        out.push('\n');
    }
}

/// Renders `context` with the default [`Options`].
#[must_use]
pub fn render(context: &Context) -> String {
    Generator::default().render(context)
}

/// Formats a number as a Python float literal, e.g. `1.0` or `2.5`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// Collects the operands of an `=` chain in source order. `a = b = 1` yields
/// `a`, `b` and `1` whichever way the chain was folded.
fn assignment_operands<'e>(expr: &'e Expr, operands: &mut Vec<&'e Expr>) {
    match expr {
        Expr::Binary { left, op: '=', right, .. } => {
            assignment_operands(left, operands);
            assignment_operands(right, operands);
        },
        other => operands.push(other),
    }
}

use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression in the
/// source language.
///
/// Every construct of the language is an expression: statements inside a
/// block, the body of a function and each top-level statement are all `Expr`
/// values. Nodes own their children exclusively and are never mutated after
/// the parser builds them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `1` or `2.5`.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Reference to a variable by its (already remapped) name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation, an assignment, or a variable declaration.
    Binary {
        /// Left operand.
        left:           Box<Self>,
        /// The operator character (`=`, `<`, `>`, `+`, `-`, `*` or `/`).
        op:             char,
        /// Right operand.
        right:          Box<Self>,
        /// Set for `var name = value`; the operator is then always `=`.
        is_declaration: bool,
    },
    /// `return value`.
    Return {
        /// The returned expression.
        value: Box<Self>,
    },
    /// Function call expression (e.g. `max(a, b)`).
    Call {
        /// Name of the function being called, after remapping.
        callee:    String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition holds.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise.
        else_branch: Option<Box<Self>>,
    },
    /// A brace-delimited sequence of statements.
    Block(Block),
}

impl Expr {
    /// Builds an `Expr::Number`.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Builds an `Expr::Variable`.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a plain (non-declaring) `Expr::Binary`.
    #[must_use]
    pub fn binary(left: Self, op: char, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right),
                       is_declaration: false }
    }

    /// Builds the declaration form `var name = value`.
    #[must_use]
    pub fn declaration(name: impl Into<String>, value: Self) -> Self {
        Self::Binary { left:           Box::new(Self::variable(name)),
                       op:             '=',
                       right:          Box::new(value),
                       is_declaration: true, }
    }
}

/// A block of statements together with the nesting depth it was opened at.
///
/// The depth only drives output indentation; blocks introduce no scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Count of enclosing braces including this one; always at least 1.
    pub depth:      usize,
    /// Statements inside the block.
    pub statements: Vec<Expr>,
}

/// The signature of a function: its name and parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prototype {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
}

impl Prototype {
    /// Creates a prototype from a name and its parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self { name: name.into(),
               params }
    }
}

/// A function definition.
///
/// Named functions come from `function` declarations and own their prototype.
/// Top-level statements are wrapped into definitions that all share the
/// synthetic prototype of their [`Context`](crate::translator::context::Context),
/// which is why the prototype sits behind an `Rc`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function signature.
    pub prototype: Rc<Prototype>,
    /// The body; a [`Expr::Block`] for named functions, a single statement
    /// for wrapped top-level statements.
    pub body:      Expr,
}

impl FunctionDef {
    /// The name of the function.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.prototype.name
    }

    /// The parameter names of the function.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.prototype.params
    }
}

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Identifies a node of the syntax tree.
///
/// Ids are assigned by the parser in creation order and are unique within one
/// parsed [`Source`]. The analyzer keys its annotations by them.
pub type NodeId = usize;

/// A complete program: global declarations followed by function definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Global variables in declaration order.
    pub globals:   Vec<Global>,
    /// Functions in definition order.
    pub functions: Vec<Function>,
}

/// A global variable declared with `VAL`, `VAR` or `LIST`.
#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    /// Node id of the declaration.
    pub id:        NodeId,
    /// The variable name.
    pub name:      String,
    /// `false` for `VAL`, `true` for `VAR` and `LIST`.
    pub mutable:   bool,
    /// The declared type name; the element type for `LIST`.
    pub type_name: Option<String>,
    /// The initializer, which is an [`ExprKind::List`] for `LIST`.
    pub value:     Option<Expr>,
    /// Offset of the declaring keyword.
    pub offset:    usize,
}

impl Global {
    /// Returns `true` if this global was declared with `LIST`.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self.value,
                 Some(Expr { kind: ExprKind::List(_),
                             .. }))
    }
}

/// A function parameter with its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Node id of the parameter.
    pub id:        NodeId,
    /// The parameter name.
    pub name:      String,
    /// The declared type name.
    pub type_name: String,
    /// Offset of the parameter name.
    pub offset:    usize,
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Node id of the definition.
    pub id:               NodeId,
    /// The function name.
    pub name:             String,
    /// Parameters in declaration order.
    pub parameters:       Vec<Parameter>,
    /// The declared return type name, `Nil` when absent.
    pub return_type_name: Option<String>,
    /// The function body.
    pub statements:       Vec<Statement>,
    /// Offset of the `FUN` keyword.
    pub offset:           usize,
}

/// One `CASE` (with a value) or `DEFAULT` (without) arm of a `SWITCH`.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The value matched against the switch condition.
    pub value:      Option<Expr>,
    /// The statements executed when the case matches.
    pub statements: Vec<Statement>,
    /// Offset of the `CASE` or `DEFAULT` keyword.
    pub offset:     usize,
}

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr:   Expr,
        /// Offset of the statement.
        offset: usize,
    },
    /// A local variable declaration using `LET`.
    Declaration {
        /// Node id of the declaration.
        id:        NodeId,
        /// The variable name.
        name:      String,
        /// The declared type name, if any.
        type_name: Option<String>,
        /// The initial value, if any.
        value:     Option<Expr>,
        /// Offset of the statement.
        offset:    usize,
    },
    /// An assignment to a variable or list element.
    Assignment {
        /// The target, always an [`ExprKind::Access`] after analysis.
        receiver: Expr,
        /// The value being assigned.
        value:    Expr,
        /// Offset of the statement.
        offset:   usize,
    },
    /// A conditional with an optional else branch.
    If {
        /// The condition.
        condition:       Expr,
        /// Statements executed when the condition holds.
        then_statements: Vec<Statement>,
        /// Statements executed otherwise; empty when there is no `ELSE`.
        else_statements: Vec<Statement>,
        /// Offset of the statement.
        offset:          usize,
    },
    /// A multi-way branch ending with a `DEFAULT` case.
    Switch {
        /// The value being switched on.
        condition: Expr,
        /// The cases in source order; the last one is `DEFAULT`.
        cases:     Vec<Case>,
        /// Offset of the statement.
        offset:    usize,
    },
    /// A pre-tested loop.
    While {
        /// The loop condition.
        condition:  Expr,
        /// The loop body.
        statements: Vec<Statement>,
        /// Offset of the statement.
        offset:     usize,
    },
    /// Returns a value from the enclosing function.
    Return {
        /// The returned value.
        value:  Expr,
        /// Offset of the statement.
        offset: usize,
    },
}

impl Statement {
    /// Gets the source offset of `self`.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Expression { offset, .. }
            | Self::Declaration { offset, .. }
            | Self::Assignment { offset, .. }
            | Self::If { offset, .. }
            | Self::Switch { offset, .. }
            | Self::While { offset, .. }
            | Self::Return { offset, .. } => *offset,
        }
    }
}

/// An expression node.
///
/// The node's static type is not stored here; the analyzer records it in its
/// side table under [`Expr::id`].
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Node id of the expression.
    pub id:     NodeId,
    /// Offset of the expression's first token.
    pub offset: usize,
    /// What kind of expression this is.
    pub kind:   ExprKind,
}

/// The different kinds of expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A constant value.
    Literal(Literal),
    /// A parenthesized expression.
    Group(Box<Expr>),
    /// A binary operation.
    Binary {
        /// The operator.
        operator: BinaryOperator,
        /// Left operand.
        left:     Box<Expr>,
        /// Right operand.
        right:    Box<Expr>,
    },
    /// A variable read, optionally indexing into a list (`xs[i]`).
    Access {
        /// The variable name.
        name:  String,
        /// The list index, if any.
        index: Option<Box<Expr>>,
    },
    /// A function call.
    Call {
        /// The function name.
        name:      String,
        /// Arguments in source order.
        arguments: Vec<Expr>,
    },
    /// A list literal (`[a, b, c]`).
    List(Vec<Expr>),
}

/// A literal value as written in the source.
///
/// Escape sequences in character and string literals are already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `NIL`
    Nil,
    /// `TRUE` or `FALSE`
    Boolean(bool),
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// An arbitrary-precision decimal.
    Decimal(BigDecimal),
    /// A single character.
    Character(char),
    /// A string.
    String(String),
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator.
    ///
    /// # Example
    /// ```
    /// use plc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("&&"), Some(BinaryOperator::And));
    /// assert_eq!(BinaryOperator::from_symbol("="), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "&&" => Self::And,
            "||" => Self::Or,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            ">" => Self::Greater,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "^" => Self::Pow,
            _ => return None,
        };
        Some(op)
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

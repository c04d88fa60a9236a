use crate::interpreter::analyzer::types::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during static analysis.
pub enum SemanticError {
    /// No zero-argument function named `main` exists.
    MissingMain,
    /// `main` exists but does not declare an `Integer` return type.
    InvalidMainReturnType {
        /// The declared return type.
        found:  Type,
        /// Offset of the `main` definition.
        offset: usize,
    },
    /// A type annotation names a type that does not exist.
    UnknownType {
        /// The unknown type name.
        name:   String,
        /// Offset of the annotated node.
        offset: usize,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// Offset of the access.
        offset: usize,
    },
    /// Called a function that does not exist with the given arity.
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// The number of arguments supplied.
        arity:  usize,
        /// Offset of the call.
        offset: usize,
    },
    /// A name was declared twice in the same scope.
    AlreadyDefined {
        /// The duplicated name.
        name:   String,
        /// Offset of the second declaration.
        offset: usize,
    },
    /// A value of one type was stored where another type is required.
    NotAssignable {
        /// The declared type.
        target: Type,
        /// The type of the value.
        found:  Type,
        /// Offset of the offending node.
        offset: usize,
    },
    /// A global initializer does not match the global's declared type.
    VariableMismatch {
        /// The name of the global.
        name:   String,
        /// The declared type.
        target: Type,
        /// The type of the initializer.
        found:  Type,
        /// Offset of the global.
        offset: usize,
    },
    /// A binary operator was applied to operands it does not accept.
    InvalidOperands {
        /// The operator symbol.
        operator: String,
        /// Type of the left operand.
        left:     Type,
        /// Type of the right operand.
        right:    Type,
        /// Offset of the binary expression.
        offset:   usize,
    },
    /// A variable that does not hold a list was indexed.
    NotAList {
        /// The name of the variable.
        name:   String,
        /// Offset of the access.
        offset: usize,
    },
    /// A whole list variable was assigned something other than a list.
    ListRequired {
        /// Offset of the assigned value.
        offset: usize,
    },
    /// A parenthesized expression that does not wrap a binary expression.
    InvalidGroup {
        /// Offset of the group.
        offset: usize,
    },
    /// The left side of an assignment is not a variable access.
    InvalidReceiver {
        /// Offset of the assignment.
        offset: usize,
    },
    /// A declaration has neither a type annotation nor an initializer.
    MissingDeclarationType {
        /// The name of the variable.
        name:   String,
        /// Offset of the declaration.
        offset: usize,
    },
    /// An integer literal does not fit in 32 bits.
    IntegerTooLarge {
        /// Offset of the literal.
        offset: usize,
    },
    /// A decimal literal that rounds to an infinite double.
    DecimalTooLarge {
        /// Offset of the literal.
        offset: usize,
    },
    /// An `IF` statement without statements in its then-branch.
    EmptyBranch {
        /// Offset of the `IF` statement.
        offset: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMain => {
                write!(f, "Error: A function 'main' with no parameters must be defined.")
            },
            Self::InvalidMainReturnType { found, offset } => write!(f,
                                                                    "Error at offset {offset}: Function 'main' must return Integer, not {found}."),
            Self::UnknownType { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown type '{name}'.")
            },
            Self::UnknownVariable { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name,
                                    arity,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Unknown function '{name}' taking {arity} argument(s)."),
            Self::AlreadyDefined { name, offset } => {
                write!(f, "Error at offset {offset}: '{name}' is already defined in this scope.")
            },
            Self::NotAssignable { target,
                                  found,
                                  offset, } => {
                write!(f, "Error at offset {offset}: Cannot assign {found} to {target}.")
            },
            Self::VariableMismatch { name,
                                     target,
                                     found,
                                     offset, } => write!(f,
                                                         "Error at offset {offset}: Variable mismatch: '{name}' is {target} but was initialized with {found}."),
            Self::InvalidOperands { operator,
                                    left,
                                    right,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Operator '{operator}' cannot be applied to {left} and {right}."),
            Self::NotAList { name, offset } => {
                write!(f, "Error at offset {offset}: '{name}' is not a list and cannot be indexed.")
            },
            Self::ListRequired { offset } => {
                write!(f, "Error at offset {offset}: Expected a list variable.")
            },
            Self::InvalidGroup { offset } => write!(f,
                                                    "Error at offset {offset}: Parentheses must contain a binary expression."),
            Self::InvalidReceiver { offset } => write!(f,
                                                       "Error at offset {offset}: Only variables and list elements can be assigned."),
            Self::MissingDeclarationType { name, offset } => write!(f,
                                                                    "Error at offset {offset}: Declaration of '{name}' needs a type or an initial value."),
            Self::IntegerTooLarge { offset } => {
                write!(f, "Error at offset {offset}: Integer literal has too many bits.")
            },
            Self::DecimalTooLarge { offset } => {
                write!(f, "Error at offset {offset}: Decimal literal is too big.")
            },
            Self::EmptyBranch { offset } => {
                write!(f, "Error at offset {offset}: IF statement has an empty then-branch.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}

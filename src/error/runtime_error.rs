use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
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
    /// Tried to assign to a variable declared with `VAL`.
    ImmutableAssignment {
        /// The name of the variable.
        name:   String,
        /// Offset of the assignment.
        offset: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Offset of the division.
        offset: usize,
    },
    /// Tried to access a list element outside the allowed bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  BigInt,
        /// The length of the list.
        length: usize,
        /// Offset of the access.
        offset: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// Offset of the offending node.
        offset:  usize,
    },
    /// An element store would make a list contain itself.
    CyclicList {
        /// The name of the list variable.
        name:   String,
        /// Offset of the assignment.
        offset: usize,
    },
    /// The exponent of `^` is negative or too large.
    InvalidExponent {
        /// Offset of the exponentiation.
        offset: usize,
    },
    /// A builtin could not write its output.
    OutputFailed {
        /// Description of the underlying failure.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
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
            Self::ImmutableAssignment { name, offset } => {
                write!(f, "Error at offset {offset}: Cannot assign to immutable variable '{name}'.")
            },
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::IndexOutOfBounds { index,
                                     length,
                                     offset, } => write!(f,
                                                         "Error at offset {offset}: Index {index} is out of bounds for a list of length {length}."),
            Self::TypeError { details, offset } => {
                write!(f, "Error at offset {offset}: Type error: {details}.")
            },
            Self::CyclicList { name, offset } => {
                write!(f, "Error at offset {offset}: Cannot store list '{name}' inside itself.")
            },
            Self::InvalidExponent { offset } => write!(f,
                                                       "Error at offset {offset}: Exponent must be a non-negative 32-bit integer."),
            Self::OutputFailed { details } => write!(f, "Error: Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

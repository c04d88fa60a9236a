use std::{cell::RefCell, rc::Rc};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{ast::Literal, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Equality is structural. Lists are shared by reference: cloning a
/// `Value::List` yields a second handle to the same elements, so a mutation
/// through one handle is visible through the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value, written `NIL`.
    Nil,
    /// A boolean value (`TRUE` or `FALSE`).
    Boolean(bool),
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// An arbitrary-precision decimal with an explicit scale.
    Decimal(BigDecimal),
    /// A single character.
    Character(char),
    /// A string.
    String(String),
    /// A mutable list shared by every binding that holds it.
    List(Rc<RefCell<Vec<Self>>>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Name of the value's runtime type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::Character(_) => "Character",
            Self::String(_) => "String",
            Self::List(_) => "List",
        }
    }

    /// Converts the value to a `bool`, or returns an error if not boolean.
    ///
    /// # Parameters
    /// - `offset`: Source offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::TypeError)`: If not boolean.
    pub fn as_boolean(&self, offset: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(type_error(format!("expected Boolean, found {}", other.type_name()),
                                    offset)),
        }
    }

    /// Borrows the integer, or returns an error if not an integer.
    pub fn as_integer(&self, offset: usize) -> EvalResult<&BigInt> {
        match self {
            Self::Integer(n) => Ok(n),
            other => Err(type_error(format!("expected Integer, found {}", other.type_name()),
                                    offset)),
        }
    }

    /// Returns the shared list, or an error if the value is not a list.
    ///
    /// The returned handle points at the same elements as `self`.
    pub fn as_list(&self, offset: usize) -> EvalResult<Rc<RefCell<Vec<Self>>>> {
        match self {
            Self::List(list) => Ok(Rc::clone(list)),
            other => Err(type_error(format!("expected List, found {}", other.type_name()),
                                    offset)),
        }
    }
}

impl Value {
    /// Returns `true` if `list` is this value or is reachable through its
    /// elements.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::value::core::Value;
    ///
    /// let inner = Value::from(vec![Value::Nil]);
    /// let outer = Value::from(vec![inner.clone()]);
    ///
    /// let Value::List(list) = &inner else { unreachable!() };
    /// assert!(outer.contains_list(list));
    /// assert!(!Value::Nil.contains_list(list));
    /// ```
    #[must_use]
    pub fn contains_list(&self, list: &Rc<RefCell<Vec<Self>>>) -> bool {
        match self {
            Self::List(items) => {
                Rc::ptr_eq(items, list) || items.borrow().iter().any(|item| item.contains_list(list))
            },
            _ => false,
        }
    }
}

/// Builds a [`RuntimeError::TypeError`].
pub(crate) fn type_error(details: impl Into<String>, offset: usize) -> RuntimeError {
    RuntimeError::TypeError { details: details.into(),
                              offset }
}

/// Writes a decimal in plain notation, keeping its scale.
///
/// `BigDecimal`'s own `Display` may switch to exponent notation.
fn write_decimal(f: &mut std::fmt::Formatter<'_>, value: &BigDecimal) -> std::fmt::Result {
    let (digits, scale) = value.as_bigint_and_exponent();
    let negative = digits.sign() == num_bigint::Sign::Minus;
    let magnitude = digits.magnitude().to_string();

    if negative {
        write!(f, "-")?;
    }
    if scale <= 0 {
        write!(f, "{magnitude}")?;
        for _ in 0..scale.unsigned_abs() {
            write!(f, "0")?;
        }
        return Ok(());
    }

    let scale = usize::try_from(scale).map_err(|_| std::fmt::Error)?;
    if magnitude.len() > scale {
        let (whole, fraction) = magnitude.split_at(magnitude.len() - scale);
        write!(f, "{whole}.{fraction}")
    } else {
        write!(f, "0.{}{magnitude}", "0".repeat(scale - magnitude.len()))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write_decimal(f, d),
            Self::Character(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(list) => {
                write!(f, "[")?;

                for (index, value) in list.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::Nil => Self::Nil,
            Literal::Boolean(b) => (*b).into(),
            Literal::Integer(n) => n.clone().into(),
            Literal::Decimal(d) => d.clone().into(),
            Literal::Character(c) => Self::Character(*c),
            Literal::String(s) => s.clone().into(),
        }
    }
}

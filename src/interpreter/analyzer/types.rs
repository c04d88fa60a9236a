/// The static types of the language.
///
/// The set is closed. `Any` accepts every type and `Comparable` accepts
/// exactly `Integer`, `Decimal`, `Character` and `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Accepts a value of any type.
    Any,
    /// The type of `NIL` and of functions without a return type.
    Nil,
    Boolean,
    Integer,
    Decimal,
    Character,
    String,
    /// Any of `Integer`, `Decimal`, `Character` or `String`.
    Comparable,
}

impl Type {
    /// Looks up a type by the name used in source annotations.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::analyzer::types::Type;
    ///
    /// assert_eq!(Type::from_name("Decimal"), Some(Type::Decimal));
    /// assert_eq!(Type::from_name("decimal"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "Any" => Self::Any,
            "Nil" => Self::Nil,
            "Boolean" => Self::Boolean,
            "Integer" => Self::Integer,
            "Decimal" => Self::Decimal,
            "Character" => Self::Character,
            "String" => Self::String,
            "Comparable" => Self::Comparable,
            _ => return None,
        };
        Some(ty)
    }

    /// The name used in source annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Nil => "Nil",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Character => "Character",
            Self::String => "String",
            Self::Comparable => "Comparable",
        }
    }

    /// The Java type the back end emits for this type.
    #[must_use]
    pub const fn jvm_name(self) -> &'static str {
        match self {
            Self::Any => "Object",
            Self::Nil => "Void",
            Self::Boolean => "boolean",
            Self::Integer => "int",
            Self::Decimal => "double",
            Self::Character => "char",
            Self::String => "String",
            Self::Comparable => "Comparable",
        }
    }

    /// Whether the type is one of the concrete types `Comparable` matches.
    #[must_use]
    pub const fn is_comparable(self) -> bool {
        matches!(self, Self::Integer | Self::Decimal | Self::Character | Self::String)
    }

    /// Checks whether a value of type `source` may be stored where `self` is
    /// required.
    ///
    /// `Any` accepts everything, `Comparable` accepts the four comparable
    /// types, and every other type only accepts itself. Note that
    /// `Comparable` does not accept `Comparable` or `Any`.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::analyzer::types::Type;
    ///
    /// assert!(Type::Any.accepts(Type::Nil));
    /// assert!(Type::Comparable.accepts(Type::Character));
    /// assert!(!Type::Comparable.accepts(Type::Boolean));
    /// assert!(!Type::Integer.accepts(Type::Decimal));
    /// ```
    #[must_use]
    pub fn accepts(self, source: Self) -> bool {
        match self {
            Self::Any => true,
            Self::Comparable => source.is_comparable(),
            _ => self == source,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

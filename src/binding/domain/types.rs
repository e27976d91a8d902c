//! Type references carried by the declaration view.
//!
//! The extraction collaborator describes every parameter, return and
//! exception type with a [`TypeRef`]. Types can be built through the
//! constructors or parsed from a Java-style expression:
//!
//! ```
//! use bindwright::binding::domain::TypeRef;
//!
//! let map: TypeRef = "java.util.Map<java.lang.String, com.example.Foo>"
//!     .parse()
//!     .expect("valid type expression");
//! assert_eq!(
//!     map.to_string(),
//!     "java.util.Map<java.lang.String, com.example.Foo>"
//! );
//! ```
//!
//! Every name in a parsed expression becomes a declared type. Type
//! variables are built with [`TypeRef::type_variable`].

use super::{
    BindingDomainError, QualifiedName, TypeParseError,
    names::{is_identifier, is_identifier_part, is_identifier_start},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `char`
    Char,
    /// `float`
    Float,
    /// `double`
    Double,
}

impl PrimitiveType {
    /// Returns the source keyword for the primitive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Looks up a primitive by its source keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// A class or interface type with its ordered type arguments.
///
/// A declared type without arguments is either non-generic or used raw;
/// which of the two applies is decided by whoever knows the type's arity
/// (the shape inspector knows it for map and set containers).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclaredType {
    name: QualifiedName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    arguments: Vec<TypeRef>,
}

impl DeclaredType {
    /// Creates a declared type without type arguments.
    #[must_use]
    pub const fn new(name: QualifiedName) -> Self {
        Self {
            name,
            arguments: Vec::new(),
        }
    }

    /// Appends a type argument.
    #[must_use]
    pub fn with_argument(mut self, argument: TypeRef) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns the erased type name.
    #[must_use]
    pub const fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the type arguments in declaration order.
    #[must_use]
    pub fn arguments(&self) -> &[TypeRef] {
        &self.arguments
    }

    /// Returns `true` when the type carries no type arguments.
    #[must_use]
    pub fn is_unparameterized(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// Bound of a wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardBound {
    /// `? extends T`
    Extends(Box<TypeRef>),
    /// `? super T`
    Super(Box<TypeRef>),
}

/// A wildcard type argument, optionally bounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Wildcard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bound: Option<WildcardBound>,
}

impl Wildcard {
    /// Returns the bound, if any.
    #[must_use]
    pub const fn bound(&self) -> Option<&WildcardBound> {
        self.bound.as_ref()
    }
}

/// A type as it appears in a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// The `void` pseudo-type.
    Void,
    /// A primitive value type.
    Primitive(PrimitiveType),
    /// A class or interface type.
    Declared(DeclaredType),
    /// An array of the component type.
    Array(Box<TypeRef>),
    /// A reference to a type parameter.
    TypeVariable(String),
    /// A wildcard type argument.
    Wildcard(Wildcard),
}

impl TypeRef {
    /// Creates an unparameterised declared type.
    #[must_use]
    pub const fn declared(name: QualifiedName) -> Self {
        Self::Declared(DeclaredType::new(name))
    }

    /// Creates a declared type with the given type arguments.
    #[must_use]
    pub fn parameterized(name: QualifiedName, arguments: impl IntoIterator<Item = Self>) -> Self {
        Self::Declared(DeclaredType {
            name,
            arguments: arguments.into_iter().collect(),
        })
    }

    /// Creates an array type.
    #[must_use]
    pub fn array_of(component: Self) -> Self {
        Self::Array(Box::new(component))
    }

    /// Creates a type-variable reference.
    ///
    /// # Errors
    ///
    /// Returns [`BindingDomainError::InvalidIdentifier`] when `name` is not
    /// an identifier.
    pub fn type_variable(name: impl Into<String>) -> Result<Self, BindingDomainError> {
        let raw = name.into();
        if !is_identifier(&raw) {
            return Err(BindingDomainError::InvalidIdentifier(raw));
        }
        Ok(Self::TypeVariable(raw))
    }

    /// Creates an unbounded wildcard `?`.
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::Wildcard(Wildcard { bound: None })
    }

    /// Creates an upper-bounded wildcard `? extends T`.
    #[must_use]
    pub fn wildcard_extends(bound: Self) -> Self {
        Self::Wildcard(Wildcard {
            bound: Some(WildcardBound::Extends(Box::new(bound))),
        })
    }

    /// Creates a lower-bounded wildcard `? super T`.
    #[must_use]
    pub fn wildcard_super(bound: Self) -> Self {
        Self::Wildcard(Wildcard {
            bound: Some(WildcardBound::Super(Box::new(bound))),
        })
    }

    /// Returns the declared type, if this is one.
    #[must_use]
    pub const fn as_declared(&self) -> Option<&DeclaredType> {
        match self {
            Self::Declared(declared) => Some(declared),
            _ => None,
        }
    }

    /// Returns the erased name of a declared type.
    #[must_use]
    pub const fn erasure(&self) -> Option<&QualifiedName> {
        match self {
            Self::Declared(declared) => Some(declared.name()),
            _ => None,
        }
    }

    /// Returns `true` for `void`.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns `true` for types that name a concrete class, primitive or
    /// array. Wildcards, type variables and `void` are not concrete.
    #[must_use]
    pub const fn is_concrete(&self) -> bool {
        matches!(self, Self::Primitive(_) | Self::Declared(_) | Self::Array(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Primitive(primitive) => f.write_str(primitive.as_str()),
            Self::Declared(declared) => write!(f, "{declared}"),
            Self::Array(component) => write!(f, "{component}[]"),
            Self::TypeVariable(name) => f.write_str(name),
            Self::Wildcard(wildcard) => match wildcard.bound() {
                None => f.write_str("?"),
                Some(WildcardBound::Extends(bound)) => write!(f, "? extends {bound}"),
                Some(WildcardBound::Super(bound)) => write!(f, "? super {bound}"),
            },
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(">")
    }
}

/// Maximum nesting of type arguments and wildcard bounds accepted by
/// [`TypeRef::from_str`].
pub const MAX_TYPE_NESTING: usize = 64;

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeParser::new(input);
        let parsed = parser.parse_type(false)?;
        parser.skip_whitespace();
        if !parser.rest().is_empty() {
            return Err(TypeParseError::TrailingInput(parser.rest().to_owned()));
        }
        Ok(parsed)
    }
}

/// Recursive-descent parser over a Java-style type expression.
struct TypeParser<'a> {
    input: &'a str,
    offset: usize,
    depth: usize,
}

impl<'a> TypeParser<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        self.input.get(self.offset..).unwrap_or_default()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    const fn bump(&mut self, consumed: char) {
        self.offset += consumed.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(c);
        }
    }

    fn unexpected(&self) -> TypeParseError {
        match self.peek() {
            Some(found) => TypeParseError::UnexpectedCharacter {
                found,
                offset: self.offset,
            },
            None => TypeParseError::UnexpectedEnd(self.input.to_owned()),
        }
    }

    fn read_word(&mut self) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek().filter(|c| is_identifier_part(*c) || *c == '.') {
            self.bump(c);
        }
        self.input.get(start..self.offset).unwrap_or_default()
    }

    fn parse_type(&mut self, in_arguments: bool) -> Result<TypeRef, TypeParseError> {
        if self.depth >= MAX_TYPE_NESTING {
            return Err(TypeParseError::TooDeep {
                limit: MAX_TYPE_NESTING,
            });
        }
        self.depth += 1;
        let parsed = self.parse_type_at_depth(in_arguments);
        self.depth -= 1;
        parsed
    }

    fn parse_type_at_depth(&mut self, in_arguments: bool) -> Result<TypeRef, TypeParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('?') if in_arguments => {
                self.bump('?');
                self.parse_wildcard()
            }
            Some('?') => Err(TypeParseError::WildcardOutsideArguments),
            Some(c) if is_identifier_start(c) => {
                let word = self.read_word();
                if word == "void" {
                    return Ok(TypeRef::Void);
                }
                let base = match PrimitiveType::from_keyword(word) {
                    Some(primitive) => TypeRef::Primitive(primitive),
                    None => self.parse_declared(word)?,
                };
                self.parse_array_suffix(base)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_declared(&mut self, word: &str) -> Result<TypeRef, TypeParseError> {
        let mut declared = DeclaredType::new(QualifiedName::new(word)?);
        self.skip_whitespace();
        if self.peek() != Some('<') {
            return Ok(TypeRef::Declared(declared));
        }
        self.bump('<');
        loop {
            declared.arguments.push(self.parse_type(true)?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.bump(','),
                Some('>') => {
                    self.bump('>');
                    return Ok(TypeRef::Declared(declared));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_wildcard(&mut self) -> Result<TypeRef, TypeParseError> {
        self.skip_whitespace();
        let keyword_offset = self.offset;
        match self.peek() {
            Some(c) if is_identifier_start(c) => match self.read_word() {
                "extends" => Ok(TypeRef::wildcard_extends(self.parse_type(false)?)),
                "super" => Ok(TypeRef::wildcard_super(self.parse_type(false)?)),
                _ => Err(TypeParseError::UnexpectedCharacter {
                    found: c,
                    offset: keyword_offset,
                }),
            },
            _ => Ok(TypeRef::wildcard()),
        }
    }

    fn parse_array_suffix(&mut self, component: TypeRef) -> Result<TypeRef, TypeParseError> {
        let mut current = component;
        loop {
            self.skip_whitespace();
            if self.peek() != Some('[') {
                return Ok(current);
            }
            self.bump('[');
            self.skip_whitespace();
            if self.peek() != Some(']') {
                return Err(self.unexpected());
            }
            self.bump(']');
            current = TypeRef::array_of(current);
        }
    }
}

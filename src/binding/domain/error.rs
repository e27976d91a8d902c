//! Error types for constructing declaration view values.

use thiserror::Error;

/// Errors returned while constructing declaration view values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindingDomainError {
    /// A qualified name is empty after trimming.
    #[error("qualified name must not be empty")]
    EmptyQualifiedName,

    /// A qualified name contains an empty or malformed segment.
    #[error("qualified name '{0}' is not a dotted sequence of identifiers")]
    InvalidQualifiedName(String),

    /// A method or parameter name is not a valid identifier.
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    /// The method builder was finished without a return type.
    #[error("binding method '{0}' has no return type")]
    MissingReturnType(String),
}

/// Error returned while parsing a binding kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown binding kind: {0}")]
pub struct ParseBindingKindError(pub String);

/// Error returned while parsing a container kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown container kind: {0}")]
pub struct ParseContainerKindError(pub String);

/// Errors returned while parsing a type expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeParseError {
    /// The input ended where a type was expected.
    #[error("unexpected end of type expression '{0}'")]
    UnexpectedEnd(String),

    /// A character that cannot start or continue a type was found.
    #[error("unexpected '{found}' at offset {offset} in type expression")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// Input remained after a complete type was parsed.
    #[error("trailing input '{0}' after type expression")]
    TrailingInput(String),

    /// A wildcard was used outside a type argument list.
    #[error("wildcards may only appear as type arguments")]
    WildcardOutsideArguments,

    /// Type arguments are nested deeper than the parser accepts.
    #[error("type expression nests more than {limit} levels")]
    TooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },

    /// A type name in the expression was malformed.
    #[error(transparent)]
    InvalidName(#[from] BindingDomainError),
}

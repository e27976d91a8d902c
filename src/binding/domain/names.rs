//! Validated qualified and simple names.

use super::BindingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified, dotted type name such as `com.example.FooModule`.
///
/// Every segment must be a non-empty identifier made of ASCII
/// alphanumerics, `_` or `$`, and may not start with a digit. Nested types
/// use `$` or `.` as the extraction collaborator reports them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Creates a validated qualified name.
    ///
    /// # Errors
    ///
    /// Returns [`BindingDomainError::EmptyQualifiedName`] when the value is
    /// empty after trimming, or [`BindingDomainError::InvalidQualifiedName`]
    /// when any segment is not an identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, BindingDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(BindingDomainError::EmptyQualifiedName);
        }

        if !trimmed.split('.').all(is_identifier) {
            return Err(BindingDomainError::InvalidQualifiedName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the full dotted name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last segment of the name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

/// Returns `true` when `value` is a single identifier segment.
#[must_use]
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_identifier_start(first) && chars.all(is_identifier_part)
}

pub(crate) const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub(crate) const fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

impl TryFrom<String> for QualifiedName {
    type Error = BindingDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for QualifiedName {
    type Error = BindingDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QualifiedName> for String {
    fn from(value: QualifiedName) -> Self {
        value.0
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

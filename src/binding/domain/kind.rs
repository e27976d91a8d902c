//! Binding method kinds.

use super::{ParseBindingKindError, vocabulary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a binding declaration, named after its method annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    /// `@Provides` methods.
    Provides,
    /// `@Produces` methods.
    Produces,
    /// `@Binds` methods.
    Binds,
    /// `@Multibinds` methods.
    Multibinds,
}

impl BindingKind {
    /// All kinds in dispatch order.
    pub const ALL: [Self; 4] = [Self::Provides, Self::Produces, Self::Binds, Self::Multibinds];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Provides => "provides",
            Self::Produces => "produces",
            Self::Binds => "binds",
            Self::Multibinds => "multibinds",
        }
    }

    /// Returns the qualified name of the method annotation.
    #[must_use]
    pub const fn annotation(self) -> &'static str {
        match self {
            Self::Provides => vocabulary::PROVIDES,
            Self::Produces => vocabulary::PRODUCES,
            Self::Binds => vocabulary::BINDS,
            Self::Multibinds => vocabulary::MULTIBINDS,
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BindingKind {
    type Error = ParseBindingKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "provides" => Ok(Self::Provides),
            "produces" => Ok(Self::Produces),
            "binds" => Ok(Self::Binds),
            "multibinds" => Ok(Self::Multibinds),
            _ => Err(ParseBindingKindError(value.to_owned())),
        }
    }
}

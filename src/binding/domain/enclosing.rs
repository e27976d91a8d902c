//! The declaration enclosing a binding method.

use super::{ParseContainerKindError, QualifiedName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of the type that encloses a binding method.
///
/// The extraction collaborator derives the kind from the annotations on the
/// enclosing type (`@Module`, `@ProducerModule`, `@Multibindings`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// A `@Module` class or interface.
    Module,
    /// A `@ProducerModule` class or interface.
    ProducerModule,
    /// A `@Multibindings` interface nested in a module.
    MultibindingsInterface,
    /// A `@Component` interface.
    Component,
    /// Any other type.
    Other,
}

impl ContainerKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::ProducerModule => "producer_module",
            Self::MultibindingsInterface => "multibindings_interface",
            Self::Component => "component",
            Self::Other => "other",
        }
    }

    /// Returns the label used in diagnostic messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Module => "@Module",
            Self::ProducerModule => "@ProducerModule",
            Self::MultibindingsInterface => "@Multibindings interface",
            Self::Component => "@Component",
            Self::Other => "plain type",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ContainerKind {
    type Error = ParseContainerKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "module" => Ok(Self::Module),
            "producer_module" => Ok(Self::ProducerModule),
            "multibindings_interface" => Ok(Self::MultibindingsInterface),
            "component" => Ok(Self::Component),
            "other" => Ok(Self::Other),
            _ => Err(ParseContainerKindError(value.to_owned())),
        }
    }
}

/// Reference to the type enclosing a binding method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnclosingElement {
    name: QualifiedName,
    kind: ContainerKind,
}

impl EnclosingElement {
    /// Creates an enclosing element reference.
    #[must_use]
    pub const fn new(name: QualifiedName, kind: ContainerKind) -> Self {
        Self { name, kind }
    }

    /// Returns the enclosing type name.
    #[must_use]
    pub const fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the enclosing type kind.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }
}

//! Annotations attached to a binding method.

use super::QualifiedName;
use serde::{Deserialize, Serialize};

/// An annotation instance found on a declaration.
///
/// The extraction collaborator resolves whether the annotation type is
/// itself meta-annotated as a map key and records it in `map_key`, so the
/// validator never needs to look at the annotation type's declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    type_name: QualifiedName,
    #[serde(default)]
    map_key: bool,
}

impl Annotation {
    /// Creates a plain annotation.
    #[must_use]
    pub const fn new(type_name: QualifiedName) -> Self {
        Self {
            type_name,
            map_key: false,
        }
    }

    /// Creates an annotation whose type is a map key.
    #[must_use]
    pub const fn map_key(type_name: QualifiedName) -> Self {
        Self {
            type_name,
            map_key: true,
        }
    }

    /// Returns the annotation type name.
    #[must_use]
    pub const fn type_name(&self) -> &QualifiedName {
        &self.type_name
    }

    /// Returns `true` when the annotation type is a map key.
    #[must_use]
    pub const fn is_map_key(&self) -> bool {
        self.map_key
    }

    /// Returns `true` when the annotation is of the named type.
    #[must_use]
    pub fn is(&self, type_name: &str) -> bool {
        self.type_name.as_str() == type_name
    }
}

//! Type shape inspection for multibinding contribution points.
//!
//! Classifies a return type as a plain `Map<K, V>`, a plain `Set<T>`, a raw
//! container or neither. Only the outer type is classified: the value of a
//! `Map<K, Set<V>>` is not inspected any further.

use crate::binding::domain::{QualifiedName, TypeRef, vocabulary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Classification of a type for multibinding purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a> {
    /// A parameterised map whose key and value are concrete and whose value
    /// is not a framework type.
    PlainMap {
        /// The key type argument.
        key: &'a TypeRef,
        /// The value type argument.
        value: &'a TypeRef,
    },
    /// A parameterised set whose element is concrete and not a framework
    /// type.
    PlainSet {
        /// The element type argument.
        element: &'a TypeRef,
    },
    /// A map container used without type arguments.
    RawMap,
    /// A set container used without type arguments.
    RawSet,
    /// Anything else, including wildcard or framework-typed arguments.
    Neither,
}

impl TypeShape<'_> {
    /// Returns `true` for [`TypeShape::PlainMap`] and [`TypeShape::PlainSet`].
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::PlainMap { .. } | Self::PlainSet { .. })
    }

    /// Returns `true` for raw container usage.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::RawMap | Self::RawSet)
    }
}

/// The type names the inspector recognises.
///
/// `framework_types` is the denylist of framework wrapper types that may not
/// appear as a multibinding value or element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVocabulary {
    map_types: BTreeSet<QualifiedName>,
    set_types: BTreeSet<QualifiedName>,
    framework_types: BTreeSet<QualifiedName>,
}

impl Default for TypeVocabulary {
    fn default() -> Self {
        Self::from_names(
            [vocabulary::MAP],
            [vocabulary::SET],
            [
                vocabulary::PROVIDER,
                vocabulary::LAZY,
                vocabulary::MEMBERS_INJECTOR,
                vocabulary::PRODUCER,
                vocabulary::PRODUCED,
            ],
        )
    }
}

impl TypeVocabulary {
    /// Creates a vocabulary from already-validated names.
    #[must_use]
    pub fn new(
        map_types: impl IntoIterator<Item = QualifiedName>,
        set_types: impl IntoIterator<Item = QualifiedName>,
        framework_types: impl IntoIterator<Item = QualifiedName>,
    ) -> Self {
        Self {
            map_types: map_types.into_iter().collect(),
            set_types: set_types.into_iter().collect(),
            framework_types: framework_types.into_iter().collect(),
        }
    }

    // Only used with the compile-time constants in `vocabulary`, which are
    // all valid qualified names.
    fn from_names<const M: usize, const S: usize, const F: usize>(
        map_types: [&str; M],
        set_types: [&str; S],
        framework_types: [&str; F],
    ) -> Self {
        let parse = |names: &[&str]| -> BTreeSet<QualifiedName> {
            names
                .iter()
                .filter_map(|name| QualifiedName::new(*name).ok())
                .collect()
        };
        Self {
            map_types: parse(&map_types),
            set_types: parse(&set_types),
            framework_types: parse(&framework_types),
        }
    }

    /// Returns the recognised map containers.
    #[must_use]
    pub const fn map_types(&self) -> &BTreeSet<QualifiedName> {
        &self.map_types
    }

    /// Returns the recognised set containers.
    #[must_use]
    pub const fn set_types(&self) -> &BTreeSet<QualifiedName> {
        &self.set_types
    }

    /// Returns the framework wrapper denylist.
    #[must_use]
    pub const fn framework_types(&self) -> &BTreeSet<QualifiedName> {
        &self.framework_types
    }

    /// Returns `true` when the type's erasure is a framework wrapper type.
    #[must_use]
    pub fn is_framework_type(&self, ty: &TypeRef) -> bool {
        ty.erasure()
            .is_some_and(|name| self.framework_types.contains(name))
    }

    /// Returns `true` when the type's erasure is a recognised map.
    #[must_use]
    pub fn is_map(&self, ty: &TypeRef) -> bool {
        ty.erasure().is_some_and(|name| self.map_types.contains(name))
    }

    /// Returns `true` when the type's erasure is a recognised set.
    #[must_use]
    pub fn is_set(&self, ty: &TypeRef) -> bool {
        ty.erasure().is_some_and(|name| self.set_types.contains(name))
    }

    /// Classifies `ty` as a map.
    ///
    /// Returns [`TypeShape::PlainMap`] for a parameterised map with a
    /// concrete key, a concrete value and a value that is not a framework
    /// type, [`TypeShape::RawMap`] for a map without type arguments and
    /// [`TypeShape::Neither`] otherwise.
    #[must_use]
    pub fn classify_map<'a>(&self, ty: &'a TypeRef) -> TypeShape<'a> {
        let Some(declared) = ty.as_declared().filter(|_| self.is_map(ty)) else {
            return TypeShape::Neither;
        };
        match declared.arguments() {
            [] => TypeShape::RawMap,
            [key, value] if key.is_concrete() && self.is_plain_argument(value) => {
                TypeShape::PlainMap { key, value }
            }
            _ => TypeShape::Neither,
        }
    }

    /// Classifies `ty` as a set.
    ///
    /// Returns [`TypeShape::PlainSet`] for a parameterised set whose element
    /// is concrete and not a framework type, [`TypeShape::RawSet`] for a set
    /// without type arguments and [`TypeShape::Neither`] otherwise.
    #[must_use]
    pub fn classify_set<'a>(&self, ty: &'a TypeRef) -> TypeShape<'a> {
        let Some(declared) = ty.as_declared().filter(|_| self.is_set(ty)) else {
            return TypeShape::Neither;
        };
        match declared.arguments() {
            [] => TypeShape::RawSet,
            [element] if self.is_plain_argument(element) => TypeShape::PlainSet { element },
            _ => TypeShape::Neither,
        }
    }

    /// Classifies `ty` as a map first, then as a set.
    #[must_use]
    pub fn classify<'a>(&self, ty: &'a TypeRef) -> TypeShape<'a> {
        match self.classify_map(ty) {
            TypeShape::Neither => self.classify_set(ty),
            shape => shape,
        }
    }

    fn is_plain_argument(&self, argument: &TypeRef) -> bool {
        argument.is_concrete() && !self.is_framework_type(argument)
    }
}

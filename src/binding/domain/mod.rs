//! Declaration view for binding methods.
//!
//! These types are the typed, pre-extracted description of candidate
//! binding methods that the metadata-extraction collaborator hands to the
//! validators. They carry no live reflection handles, are immutable after
//! construction and are serialisable via serde.

mod annotation;
mod enclosing;
mod error;
mod kind;
mod method;
mod modifier;
mod names;
mod types;
pub mod vocabulary;

pub use annotation::Annotation;
pub use enclosing::{ContainerKind, EnclosingElement};
pub use error::{BindingDomainError, ParseBindingKindError, ParseContainerKindError, TypeParseError};
pub use kind::BindingKind;
pub use method::{BindingMethod, BindingMethodBuilder, ModuleDeclaration, Parameter, ThrownType};
pub use modifier::{Modifier, Modifiers};
pub use names::{QualifiedName, is_identifier};
pub use types::{
    DeclaredType, MAX_TYPE_NESTING, PrimitiveType, TypeRef, Wildcard, WildcardBound,
};

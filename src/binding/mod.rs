//! Binding method declaration validation.
//!
//! This module checks method-shaped binding declarations (`@Provides`,
//! `@Produces`, `@Binds` and `@Multibinds` methods) before the dependency
//! graph is built, collecting every defect as a diagnostic instead of
//! stopping at the first one.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: The read-only declaration view ([`domain::BindingMethod`], [`domain::TypeRef`], [`domain::ModuleDeclaration`])
//! - **Ports**: Abstract trait interfaces ([`ports::validator::BindingMethodValidator`], [`ports::source::DeclarationSource`])
//! - **Validation**: Shared rules and per-kind validators
//! - **Services**: Whole-module validation ([`services::ModuleValidationService`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryDeclarationSource`], profile loading)
//!
//! # Example
//!
//! ```
//! use bindwright::binding::domain::{
//!     Annotation, BindingMethod, ContainerKind, EnclosingElement, Modifier, QualifiedName,
//!     TypeRef, vocabulary,
//! };
//! use bindwright::binding::ports::BindingMethodValidator;
//! use bindwright::binding::profile::ValidationProfile;
//! use bindwright::binding::validation::MultibindsMethodValidator;
//! use std::sync::Arc;
//!
//! let module = EnclosingElement::new(
//!     QualifiedName::new("com.example.FooModule").expect("valid name"),
//!     ContainerKind::Module,
//! );
//! let method = BindingMethod::builder(module, "foos")
//!     .with_modifier(Modifier::Abstract)
//!     .with_annotation(Annotation::new(
//!         QualifiedName::new(vocabulary::MULTIBINDS).expect("valid name"),
//!     ))
//!     .with_parameter("x", "int".parse::<TypeRef>().expect("valid type"))
//!     .returning("java.util.Set<com.example.Foo>".parse().expect("valid type"))
//!     .build()
//!     .expect("valid method");
//!
//! let validator = MultibindsMethodValidator::new(Arc::new(ValidationProfile::default()));
//! let report = validator.validate(&method);
//! assert!(report.has_errors());
//! assert!(report.mentions("must not have parameters"));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod messages;
pub mod ports;
pub mod profile;
pub mod report;
pub mod services;
pub mod shape;
pub mod validation;

#[cfg(test)]
mod tests;

//! Port definitions for binding method validation.
//!
//! Ports define abstract interfaces that adapters implement, following
//! hexagonal architecture principles.

pub mod source;
pub mod validator;

pub use source::{DeclarationSource, DeclarationSourceResult};
pub use validator::{
    Abstractness, BindingMethodValidator, ExceptionPolicy, ValidatorConfig, ValidatorConfigBuilder,
};

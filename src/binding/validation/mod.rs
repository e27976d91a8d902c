//! Binding method validation implementation.
//!
//! This module provides the rule functions shared by all validators, the
//! per-kind validator specialisations, the multibinding annotation pass and
//! the registry that dispatches methods to validators.

pub mod binds;
pub mod multibinding_annotations;
pub mod multibinds;
pub mod produces;
pub mod provides;
pub mod registry;
pub mod rules;

pub use binds::BindsMethodValidator;
pub use multibinding_annotations::MultibindingAnnotationPass;
pub use multibinds::MultibindsMethodValidator;
pub use produces::ProducesMethodValidator;
pub use provides::ProvidesMethodValidator;
pub use registry::ValidatorRegistry;

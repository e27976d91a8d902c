//! Application services for binding validation.
//!
//! Services coordinate the declaration source port with the validators,
//! implementing workflows that span a whole module.

mod module;

pub use module::ModuleValidationService;

//! Adapter implementations for binding validation ports.
//!
//! Adapters provide concrete implementations of port interfaces and the
//! filesystem loading of validation profiles.

pub mod memory;
pub mod profile_file;

pub use memory::InMemoryDeclarationSource;
pub use profile_file::{load_profile, load_profile_or_default};

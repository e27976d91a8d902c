//! Bindwright: validation of dependency-injection binding declarations.
//!
//! This crate checks binding method declarations extracted from
//! dependency-injection modules and reports every defect as a structured
//! diagnostic before the dependency graph is built.
//!
//! # Architecture
//!
//! Bindwright follows hexagonal architecture principles:
//!
//! - **Domain**: The typed declaration view, free of any reflection handles
//! - **Ports**: Abstract trait interfaces for validators and declaration sources
//! - **Adapters**: Concrete implementations of ports (in-memory, filesystem)
//!
//! # Modules
//!
//! - [`binding`]: Binding method declaration validation

pub mod binding;

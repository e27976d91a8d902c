//! Unit tests for the binding module.
//!
//! Tests are organised by component, covering accepted declarations, every
//! diagnostic a validator can emit, and construction-time failures.

mod domain_tests;
mod messages_tests;
mod service_tests;
mod shape_tests;

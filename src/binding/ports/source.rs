//! Declaration source port.
//!
//! The extraction collaborator that turns annotated source into
//! [`ModuleDeclaration`] views lives outside this crate. This port is the
//! seam through which the module validation service reads its output.

use crate::binding::{
    domain::{ModuleDeclaration, QualifiedName},
    error::DeclarationSourceError,
};

/// Result type for declaration source operations.
pub type DeclarationSourceResult<T> = Result<T, DeclarationSourceError>;

/// Port for looking up extracted module declarations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Methods are returned in declaration order
/// - Repeated lookups of the same module return the same declaration
/// - Concurrent access is handled safely
#[cfg_attr(test, mockall::automock)]
pub trait DeclarationSource: Send + Sync {
    /// Retrieves the module with the given qualified name.
    ///
    /// Returns `None` if the module is unknown.
    ///
    /// # Errors
    ///
    /// Returns `DeclarationSourceError` if the source cannot be read.
    fn find_module(&self, name: &QualifiedName)
    -> DeclarationSourceResult<Option<ModuleDeclaration>>;

    /// Lists the names of every known module, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns `DeclarationSourceError` if the source cannot be read.
    fn list_modules(&self) -> DeclarationSourceResult<Vec<QualifiedName>>;
}

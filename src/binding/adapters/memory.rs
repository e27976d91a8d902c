//! In-memory implementation of the `DeclarationSource` port.
//!
//! Holds module declarations supplied by the caller, either built in Rust
//! or deserialised from the JSON form the extraction collaborator emits.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::binding::{
    domain::{ModuleDeclaration, QualifiedName},
    error::DeclarationSourceError,
    ports::source::{DeclarationSource, DeclarationSourceResult},
};

/// Error indicating the module map lock was poisoned by a panicking writer.
#[derive(Debug)]
struct PoisonedLockError {
    detail: String,
}

impl fmt::Display for PoisonedLockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lock poisoned: {}", self.detail)
    }
}

impl std::error::Error for PoisonedLockError {}

fn poisoned(detail: impl fmt::Display) -> DeclarationSourceError {
    DeclarationSourceError::unavailable(PoisonedLockError {
        detail: detail.to_string(),
    })
}

/// In-memory implementation of [`DeclarationSource`].
///
/// Thread-safe via internal [`RwLock`]. Modules are listed in name order.
///
/// # Example
///
/// ```
/// use bindwright::binding::adapters::memory::InMemoryDeclarationSource;
/// use bindwright::binding::ports::DeclarationSource;
///
/// let source = InMemoryDeclarationSource::from_json_str(
///     r#"[{ "element": { "name": "com.example.FooModule", "kind": "module" } }]"#,
/// )
/// .expect("valid declarations");
/// assert_eq!(source.list_modules().expect("readable").len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryDeclarationSource {
    modules: Arc<RwLock<BTreeMap<QualifiedName, ModuleDeclaration>>>,
}

impl InMemoryDeclarationSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of module declarations.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationSourceError::Malformed`] when the document is
    /// not a valid list of declarations.
    pub fn from_json_str(json: &str) -> DeclarationSourceResult<Self> {
        let modules: Vec<ModuleDeclaration> = serde_json::from_str(json)
            .map_err(|e| DeclarationSourceError::malformed(e.to_string()))?;
        let source = Self::new();
        for module in modules {
            source.insert(module)?;
        }
        Ok(source)
    }

    /// Adds a module, replacing any module with the same name, and returns
    /// the source.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationSourceError::Unavailable`] if the internal lock
    /// is poisoned.
    pub fn with_module(self, module: ModuleDeclaration) -> DeclarationSourceResult<Self> {
        self.insert(module)?;
        Ok(self)
    }

    /// Adds a module, replacing any module with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationSourceError::Unavailable`] if the internal lock
    /// is poisoned.
    pub fn insert(&self, module: ModuleDeclaration) -> DeclarationSourceResult<()> {
        let mut guard = self.modules.write().map_err(poisoned)?;
        guard.insert(module.name().clone(), module);
        Ok(())
    }

    /// Returns the number of stored modules.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no modules are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DeclarationSource for InMemoryDeclarationSource {
    fn find_module(
        &self,
        name: &QualifiedName,
    ) -> DeclarationSourceResult<Option<ModuleDeclaration>> {
        let guard = self.modules.read().map_err(poisoned)?;
        Ok(guard.get(name).cloned())
    }

    fn list_modules(&self) -> DeclarationSourceResult<Vec<QualifiedName>> {
        let guard = self.modules.read().map_err(poisoned)?;
        Ok(guard.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::domain::{ContainerKind, EnclosingElement};
    use rstest::{fixture, rstest};
    use std::thread;

    #[fixture]
    fn module() -> ModuleDeclaration {
        let name = QualifiedName::new("com.example.FooModule").expect("valid name");
        ModuleDeclaration::new(EnclosingElement::new(name, ContainerKind::Module))
    }

    fn poison(source: &InMemoryDeclarationSource) {
        let shared = source.clone();
        let writer = thread::spawn(move || {
            let _guard = shared.modules.write().expect("fresh lock");
            panic!("writer failed while holding the module map");
        });
        assert!(writer.join().is_err());
    }

    #[rstest]
    fn with_module_stores_the_module(module: ModuleDeclaration) {
        let name = module.name().clone();
        let source = InMemoryDeclarationSource::new()
            .with_module(module)
            .expect("fresh source accepts modules");
        assert!(source.find_module(&name).expect("readable").is_some());
    }

    #[rstest]
    fn with_module_reports_poisoned_lock(module: ModuleDeclaration) {
        let source = InMemoryDeclarationSource::new();
        poison(&source);

        let result = source.with_module(module);
        assert!(matches!(result, Err(DeclarationSourceError::Unavailable(_))));
    }

    #[rstest]
    fn lookups_report_poisoned_lock() {
        let source = InMemoryDeclarationSource::new();
        poison(&source);

        assert!(source.list_modules().is_err());
        assert!(source.is_empty());
    }
}

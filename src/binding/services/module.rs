//! Module validation service.
//!
//! The `ModuleValidationService` validates every binding method of a module
//! read through a [`DeclarationSource`], producing one module report that
//! nests one sub-report per method.

use std::sync::Arc;

use crate::binding::{
    domain::{ModuleDeclaration, QualifiedName},
    error::ModuleValidationError,
    ports::source::DeclarationSource,
    profile::ValidationProfile,
    report::ValidationReport,
    validation::{MultibindingAnnotationPass, ValidatorRegistry},
};

/// Service for validating whole modules.
///
/// For each method, in declaration order:
/// 1. Runs the multibinding annotation pass
/// 2. Runs every validator the registry selects for the method
///
/// Both stages contribute to the same method sub-report.
///
/// # Example
///
/// ```
/// use bindwright::binding::adapters::memory::InMemoryDeclarationSource;
/// use bindwright::binding::domain::{
///     ContainerKind, EnclosingElement, ModuleDeclaration, QualifiedName,
/// };
/// use bindwright::binding::services::ModuleValidationService;
///
/// let name = QualifiedName::new("com.example.EmptyModule").expect("valid name");
/// let module = ModuleDeclaration::new(EnclosingElement::new(name.clone(), ContainerKind::Module));
/// let source = InMemoryDeclarationSource::new()
///     .with_module(module)
///     .expect("fresh source");
///
/// let service = ModuleValidationService::with_defaults(source);
/// let report = service.validate_module(&name).expect("module exists");
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct ModuleValidationService<S> {
    source: S,
    registry: Arc<ValidatorRegistry>,
    annotation_pass: MultibindingAnnotationPass,
}

impl<S: DeclarationSource> ModuleValidationService<S> {
    /// Creates a service using the standard registry built from `profile`.
    #[must_use]
    pub fn new(source: S, profile: Arc<ValidationProfile>) -> Self {
        let registry = Arc::new(ValidatorRegistry::standard(Arc::clone(&profile)));
        Self::with_registry(source, registry, profile)
    }

    /// Creates a service with the default profile.
    #[must_use]
    pub fn with_defaults(source: S) -> Self {
        Self::new(source, Arc::new(ValidationProfile::default()))
    }

    /// Creates a service with a custom registry.
    #[must_use]
    pub const fn with_registry(
        source: S,
        registry: Arc<ValidatorRegistry>,
        profile: Arc<ValidationProfile>,
    ) -> Self {
        Self {
            source,
            registry,
            annotation_pass: MultibindingAnnotationPass::new(profile),
        }
    }

    /// Returns the declaration source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Validates the module with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleValidationError::NotFound`] when the source does not
    /// know the module, or [`ModuleValidationError::Source`] when the source
    /// fails. Declaration defects are reported in the returned report.
    pub fn validate_module(
        &self,
        name: &QualifiedName,
    ) -> Result<ValidationReport, ModuleValidationError> {
        let module = self
            .source
            .find_module(name)?
            .ok_or_else(|| ModuleValidationError::NotFound(name.clone()))?;
        let report = self.validate_declaration(&module);

        if report.has_errors() {
            tracing::warn!(
                module = %name,
                errors = report.error_count(),
                "module has invalid binding methods"
            );
        } else {
            tracing::info!(
                module = %name,
                methods = module.methods().len(),
                "module validated"
            );
        }
        Ok(report)
    }

    /// Validates every module the source lists, in listing order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while listing or loading a module.
    pub fn validate_all(&self) -> Result<Vec<ValidationReport>, ModuleValidationError> {
        let names = self.source.list_modules()?;
        let reports = names
            .iter()
            .map(|name| self.validate_module(name))
            .collect::<Result<Vec<_>, _>>()?;

        let invalid = reports.iter().filter(|report| report.has_errors()).count();
        tracing::info!(
            modules = reports.len(),
            invalid,
            "validated all modules"
        );
        Ok(reports)
    }

    /// Validates an already-loaded module declaration.
    #[must_use]
    pub fn validate_declaration(&self, module: &ModuleDeclaration) -> ValidationReport {
        let mut report = ValidationReport::about(module.name().as_str());
        for method in module.methods() {
            let mut method_report = ValidationReport::about(method.subject());
            method_report.merge(self.annotation_pass.check(method));
            method_report.merge(self.registry.validate(method));
            report.add_subreport(method_report.build());
        }
        report.build()
    }
}

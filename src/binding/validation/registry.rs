//! Validator registry.
//!
//! Dispatches a method to the validators for the binding annotations it
//! carries. A method with several binding annotations is checked by each
//! matching validator; unannotated methods of a `@Multibindings` interface
//! go to the interface validator.

use crate::binding::{
    domain::{BindingKind, BindingMethod, ContainerKind},
    ports::validator::BindingMethodValidator,
    profile::ValidationProfile,
    report::ValidationReport,
    validation::{
        BindsMethodValidator, MultibindsMethodValidator, ProducesMethodValidator,
        ProvidesMethodValidator,
    },
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Maps binding kinds to their validators.
#[derive(Clone)]
pub struct ValidatorRegistry {
    by_kind: BTreeMap<BindingKind, Arc<dyn BindingMethodValidator>>,
    multibindings_interface: Option<Arc<dyn BindingMethodValidator>>,
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("kinds", &self.by_kind.keys().collect::<Vec<_>>())
            .field(
                "multibindings_interface",
                &self.multibindings_interface.is_some(),
            )
            .finish()
    }
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_kind: BTreeMap::new(),
            multibindings_interface: None,
        }
    }

    /// Creates a registry with the standard validator for every binding
    /// kind and for `@Multibindings` interfaces, all sharing `profile`.
    #[must_use]
    pub fn standard(profile: Arc<ValidationProfile>) -> Self {
        Self::new()
            .with_validator(
                BindingKind::Provides,
                Arc::new(ProvidesMethodValidator::new(Arc::clone(&profile))),
            )
            .with_validator(
                BindingKind::Produces,
                Arc::new(ProducesMethodValidator::new(Arc::clone(&profile))),
            )
            .with_validator(
                BindingKind::Binds,
                Arc::new(BindsMethodValidator::new(Arc::clone(&profile))),
            )
            .with_validator(
                BindingKind::Multibinds,
                Arc::new(MultibindsMethodValidator::new(Arc::clone(&profile))),
            )
            .with_multibindings_interface_validator(Arc::new(
                MultibindsMethodValidator::for_multibindings_interface(profile),
            ))
    }

    /// Registers (or replaces) the validator for `kind`.
    #[must_use]
    pub fn with_validator(
        mut self,
        kind: BindingKind,
        validator: Arc<dyn BindingMethodValidator>,
    ) -> Self {
        self.by_kind.insert(kind, validator);
        self
    }

    /// Registers the validator for unannotated `@Multibindings` interface
    /// methods.
    #[must_use]
    pub fn with_multibindings_interface_validator(
        mut self,
        validator: Arc<dyn BindingMethodValidator>,
    ) -> Self {
        self.multibindings_interface = Some(validator);
        self
    }

    /// Returns the validator registered for `kind`.
    #[must_use]
    pub fn validator(&self, kind: BindingKind) -> Option<&Arc<dyn BindingMethodValidator>> {
        self.by_kind.get(&kind)
    }

    /// Returns the validators that apply to `method`, in binding-kind order.
    #[must_use]
    pub fn validators_for(&self, method: &BindingMethod) -> Vec<&Arc<dyn BindingMethodValidator>> {
        let kinds = method.binding_kinds();
        if kinds.is_empty() && method.enclosing().kind() == ContainerKind::MultibindingsInterface {
            return self.multibindings_interface.iter().collect();
        }
        kinds
            .into_iter()
            .filter_map(|kind| self.by_kind.get(&kind))
            .collect()
    }

    /// Validates `method` with every applicable validator, merging their
    /// diagnostics in registry order.
    ///
    /// A method no validator applies to yields an empty report.
    #[must_use]
    pub fn validate(&self, method: &BindingMethod) -> ValidationReport {
        let mut report = ValidationReport::about(method.subject());
        for validator in self.validators_for(method) {
            report.merge(validator.validate(method));
        }
        report.build()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

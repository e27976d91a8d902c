//! Multibinding annotation pass.
//!
//! Runs before the binding-method validators and rejects contribution
//! annotations (`@IntoSet`, `@IntoMap`, `@ElementsIntoSet`) on methods that
//! are neither `@Provides` nor `@Produces` methods. Validators therefore do
//! not repeat this check.

use crate::binding::{
    domain::{BindingMethod, vocabulary},
    messages::{MessageArgs, MessageKey},
    profile::ValidationProfile,
    report::ValidationReport,
};
use std::sync::Arc;

/// Checks where contribution annotations appear.
#[derive(Debug, Clone)]
pub struct MultibindingAnnotationPass {
    profile: Arc<ValidationProfile>,
}

impl MultibindingAnnotationPass {
    /// Creates the pass.
    #[must_use]
    pub const fn new(profile: Arc<ValidationProfile>) -> Self {
        Self { profile }
    }

    /// Checks one method, reporting at most one error.
    #[must_use]
    pub fn check(&self, method: &BindingMethod) -> ValidationReport {
        let mut report = ValidationReport::about(method.subject());

        let first_contribution = method.multibinding_annotations().next();
        let is_binding_method = method.has_annotation(vocabulary::PROVIDES)
            || method.has_annotation(vocabulary::PRODUCES);

        if let Some(annotation) = first_contribution.filter(|_| !is_binding_method) {
            let args = MessageArgs::new(annotation.type_name().simple_name());
            let key = MessageKey::MultibindingAnnotationNotOnBindingMethod;
            report.add_error(key, self.profile.messages().render(key, &args));
        }

        report.build()
    }
}

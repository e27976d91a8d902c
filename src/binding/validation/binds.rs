//! Validator for `@Binds` methods.

use crate::binding::{
    domain::BindingMethod,
    ports::validator::{BindingMethodValidator, ValidatorConfig},
    profile::ValidationProfile,
    report::ValidationReportBuilder,
    validation::rules::{self, RuleContext},
};
use std::sync::Arc;

/// Validates `@Binds` methods.
///
/// A binds method delegates one binding to another: it is abstract, takes
/// exactly one parameter and returns the bound type. It carries no map key.
#[derive(Debug, Clone)]
pub struct BindsMethodValidator {
    config: ValidatorConfig,
    profile: Arc<ValidationProfile>,
}

impl BindsMethodValidator {
    /// Creates the validator with the standard `@Binds` policy.
    #[must_use]
    pub fn new(profile: Arc<ValidationProfile>) -> Self {
        Self::with_config(ValidatorConfig::binds(), profile)
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidatorConfig, profile: Arc<ValidationProfile>) -> Self {
        Self { config, profile }
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext::new(&self.config, &self.profile)
    }
}

impl BindingMethodValidator for BindsMethodValidator {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    fn check_parameters(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_single_parameter(&self.context(), method, report);
    }

    fn check_return_type(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_returns_value(&self.context(), method, report);
    }

    fn check_map_keys(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_no_map_key(&self.context(), method, report);
    }

    // Contribution annotations on binds methods are rejected by the
    // multibinding annotation pass, which always runs first.
    fn check_multibindings(&self, _method: &BindingMethod, _report: &mut ValidationReportBuilder) {}
}

//! Validator for `@Provides` methods.

use crate::binding::{
    domain::BindingMethod,
    ports::validator::{BindingMethodValidator, ValidatorConfig},
    profile::ValidationProfile,
    report::ValidationReportBuilder,
    validation::rules::{self, RuleContext},
};
use std::sync::Arc;

/// Validates `@Provides` methods.
///
/// Provider methods are concrete methods of a `@Module` that return a
/// value. Parameters are dependencies and are not constrained here.
#[derive(Debug, Clone)]
pub struct ProvidesMethodValidator {
    config: ValidatorConfig,
    profile: Arc<ValidationProfile>,
}

impl ProvidesMethodValidator {
    /// Creates the validator with the standard `@Provides` policy.
    #[must_use]
    pub fn new(profile: Arc<ValidationProfile>) -> Self {
        Self::with_config(ValidatorConfig::provides(), profile)
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

impl BindingMethodValidator for ProvidesMethodValidator {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    fn check_parameters(&self, _method: &BindingMethod, _report: &mut ValidationReportBuilder) {}

    fn check_return_type(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_returns_value(&self.context(), method, report);
    }

    fn check_map_keys(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_contribution_map_keys(&self.context(), method, report);
    }

    fn check_multibindings(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_single_multibinding_annotation(&self.context(), method, report);
    }
}

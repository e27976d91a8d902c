//! Validator port for binding method validation.
//!
//! Defines the capability interface every binding-method validator
//! implements and the construction-time policy that parameterises it.

use crate::binding::{
    domain::{BindingMethod, ContainerKind, QualifiedName, vocabulary},
    error::ConfigError,
    profile::ValidationProfile,
    report::{ValidationReport, ValidationReportBuilder},
    validation::rules::{self, RuleContext},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Port for validating one kind of binding method.
///
/// The provided [`BindingMethodValidator::validate`] runs the fixed check
/// sequence:
///
/// 1. enclosing element kind
/// 2. type parameters
/// 3. privacy
/// 4. abstractness
/// 5. [`check_parameters`](BindingMethodValidator::check_parameters)
/// 6. declared exceptions
/// 7. [`check_return_type`](BindingMethodValidator::check_return_type)
/// 8. [`check_map_keys`](BindingMethodValidator::check_map_keys)
/// 9. [`check_multibindings`](BindingMethodValidator::check_multibindings)
///
/// Every step runs regardless of what earlier steps reported, so a single
/// pass reports every defect. Steps 1 to 4 and 6 are driven by
/// [`ValidatorConfig`]; the rest are supplied by each implementation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Never fail: defects are diagnostics in the report
/// - Be stateless and thread-safe, holding only construction-time data
pub trait BindingMethodValidator: Send + Sync {
    /// Returns the policy this validator was built with.
    fn config(&self) -> &ValidatorConfig;

    /// Returns the shared vocabulary and message catalog.
    fn profile(&self) -> &ValidationProfile;

    /// Checks the parameter list.
    fn check_parameters(&self, method: &BindingMethod, report: &mut ValidationReportBuilder);

    /// Checks the shape of the return type.
    fn check_return_type(&self, method: &BindingMethod, report: &mut ValidationReportBuilder);

    /// Checks the map-key annotations.
    fn check_map_keys(&self, method: &BindingMethod, report: &mut ValidationReportBuilder);

    /// Checks the contribution (`@IntoSet`, `@IntoMap`, `@ElementsIntoSet`)
    /// annotations.
    fn check_multibindings(&self, method: &BindingMethod, report: &mut ValidationReportBuilder);

    /// Validates a method against every check, in order.
    fn validate(&self, method: &BindingMethod) -> ValidationReport {
        let mut report = ValidationReport::about(method.subject());
        let context = RuleContext::new(self.config(), self.profile());

        rules::check_enclosing_element(&context, method, &mut report);
        rules::check_type_parameters(&context, method, &mut report);
        rules::check_not_private(&context, method, &mut report);
        rules::check_abstractness(&context, method, &mut report);
        self.check_parameters(method, &mut report);
        rules::check_thrown_types(&context, method, &mut report);
        self.check_return_type(method, &mut report);
        self.check_map_keys(method, &mut report);
        self.check_multibindings(method, &mut report);

        let built = report.build();
        tracing::debug!(
            subject = built.subject(),
            validator = self.config().label(),
            errors = built.error_count(),
            "validated binding method"
        );
        built
    }
}

/// Whether a binding method must, or must not, be abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Abstractness {
    /// The method must be abstract.
    MustBeAbstract,
    /// The method must have a body.
    MustBeConcrete,
    /// Either is fine.
    NoConstraint,
}

impl Abstractness {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MustBeAbstract => "must_be_abstract",
            Self::MustBeConcrete => "must_be_concrete",
            Self::NoConstraint => "no_constraint",
        }
    }
}

impl fmt::Display for Abstractness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Abstractness {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "must_be_abstract" => Ok(Self::MustBeAbstract),
            "must_be_concrete" => Ok(Self::MustBeConcrete),
            "no_constraint" => Ok(Self::NoConstraint),
            _ => Err(ConfigError::UnknownAbstractness(value.to_owned())),
        }
    }
}

/// Which exception types a binding method may declare.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionPolicy {
    /// No declared exceptions at all.
    None,
    /// Only subclasses of `java.lang.RuntimeException` or `java.lang.Error`.
    UncheckedOnly,
    /// Only subclasses of the given type.
    AnySubclassOf(QualifiedName),
}

impl ExceptionPolicy {
    /// Prefix of the textual form of [`ExceptionPolicy::AnySubclassOf`].
    const SUBCLASS_PREFIX: &'static str = "any_subclass_of:";
}

impl fmt::Display for ExceptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::UncheckedOnly => f.write_str("unchecked_only"),
            Self::AnySubclassOf(superclass) => write!(f, "{}{superclass}", Self::SUBCLASS_PREFIX),
        }
    }
}

impl TryFrom<&str> for ExceptionPolicy {
    type Error = ConfigError;

    /// Parses `none`, `unchecked_only` or `any_subclass_of:<qualified name>`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        match trimmed {
            "none" => Ok(Self::None),
            "unchecked_only" => Ok(Self::UncheckedOnly),
            _ => match trimmed.strip_prefix(Self::SUBCLASS_PREFIX) {
                Some(superclass) => Ok(Self::AnySubclassOf(QualifiedName::new(superclass)?)),
                None => Err(ConfigError::UnknownExceptionPolicy(value.to_owned())),
            },
        }
    }
}

/// Construction-time policy of a binding-method validator.
///
/// # Examples
///
/// ```
/// use bindwright::binding::domain::ContainerKind;
/// use bindwright::binding::ports::validator::{Abstractness, ExceptionPolicy, ValidatorConfig};
///
/// let config = ValidatorConfig::builder("Multibinds")
///     .abstractness(Abstractness::MustBeAbstract)
///     .exception_policy(ExceptionPolicy::None)
///     .enclosing_kinds([ContainerKind::Module, ContainerKind::ProducerModule])
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config, ValidatorConfig::multibinds());
///
/// let empty = ValidatorConfig::builder("Multibinds").build();
/// assert!(empty.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    label: String,
    abstractness: Abstractness,
    exception_policy: ExceptionPolicy,
    enclosing_kinds: BTreeSet<ContainerKind>,
}

impl ValidatorConfig {
    /// Starts a configuration for the validator labelled `label` (the
    /// annotation's simple name as shown in messages, e.g. `Multibinds`).
    #[must_use]
    pub fn builder(label: impl Into<String>) -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::new(label)
    }

    /// Policy for `@Multibinds` methods in modules.
    #[must_use]
    pub fn multibinds() -> Self {
        Self::preset(
            "Multibinds",
            Abstractness::MustBeAbstract,
            ExceptionPolicy::None,
            [ContainerKind::Module, ContainerKind::ProducerModule],
        )
    }

    /// Policy for methods of `@Multibindings` interfaces.
    #[must_use]
    pub fn multibindings_interface() -> Self {
        Self::preset(
            "Multibindings",
            Abstractness::MustBeAbstract,
            ExceptionPolicy::None,
            [ContainerKind::MultibindingsInterface],
        )
    }

    /// Policy for `@Provides` methods.
    #[must_use]
    pub fn provides() -> Self {
        Self::preset(
            "Provides",
            Abstractness::MustBeConcrete,
            ExceptionPolicy::UncheckedOnly,
            [ContainerKind::Module],
        )
    }

    /// Policy for `@Produces` methods.
    ///
    /// Producer methods may declare any `java.lang.Exception`.
    #[must_use]
    pub fn produces() -> Self {
        let exception = QualifiedName::new(vocabulary::EXCEPTION)
            .map_or(ExceptionPolicy::UncheckedOnly, ExceptionPolicy::AnySubclassOf);
        Self::preset(
            "Produces",
            Abstractness::MustBeConcrete,
            exception,
            [ContainerKind::ProducerModule],
        )
    }

    /// Policy for `@Binds` methods.
    #[must_use]
    pub fn binds() -> Self {
        Self::preset(
            "Binds",
            Abstractness::MustBeAbstract,
            ExceptionPolicy::None,
            [ContainerKind::Module, ContainerKind::ProducerModule],
        )
    }

    fn preset<const N: usize>(
        label: &str,
        abstractness: Abstractness,
        exception_policy: ExceptionPolicy,
        enclosing_kinds: [ContainerKind; N],
    ) -> Self {
        Self {
            label: label.to_owned(),
            abstractness,
            exception_policy,
            enclosing_kinds: enclosing_kinds.into_iter().collect(),
        }
    }

    /// Returns the label used in messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the abstractness requirement.
    #[must_use]
    pub const fn abstractness(&self) -> Abstractness {
        self.abstractness
    }

    /// Returns the exception policy.
    #[must_use]
    pub const fn exception_policy(&self) -> &ExceptionPolicy {
        &self.exception_policy
    }

    /// Returns the allowed enclosing kinds.
    #[must_use]
    pub const fn enclosing_kinds(&self) -> &BTreeSet<ContainerKind> {
        &self.enclosing_kinds
    }

    /// Describes the allowed enclosing kinds, e.g. `@Module or
    /// @ProducerModule`.
    #[must_use]
    pub fn enclosing_description(&self) -> String {
        self.enclosing_kinds
            .iter()
            .map(|kind| kind.label())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Builder for [`ValidatorConfig`].
#[derive(Debug)]
pub struct ValidatorConfigBuilder {
    label: String,
    abstractness: Abstractness,
    exception_policy: ExceptionPolicy,
    enclosing_kinds: BTreeSet<ContainerKind>,
}

impl ValidatorConfigBuilder {
    /// Creates a builder with no enclosing kinds, no abstractness
    /// constraint and an unchecked-only exception policy.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            abstractness: Abstractness::NoConstraint,
            exception_policy: ExceptionPolicy::UncheckedOnly,
            enclosing_kinds: BTreeSet::new(),
        }
    }

    /// Sets the abstractness requirement.
    #[must_use]
    pub const fn abstractness(mut self, abstractness: Abstractness) -> Self {
        self.abstractness = abstractness;
        self
    }

    /// Sets the exception policy.
    #[must_use]
    pub fn exception_policy(mut self, policy: ExceptionPolicy) -> Self {
        self.exception_policy = policy;
        self
    }

    /// Adds allowed enclosing kinds.
    #[must_use]
    pub fn enclosing_kinds(mut self, kinds: impl IntoIterator<Item = ContainerKind>) -> Self {
        self.enclosing_kinds.extend(kinds);
        self
    }

    /// Finishes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLabel`] for a blank label and
    /// [`ConfigError::NoEnclosingKinds`] when no enclosing kind is allowed.
    pub fn build(self) -> Result<ValidatorConfig, ConfigError> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        if self.enclosing_kinds.is_empty() {
            return Err(ConfigError::NoEnclosingKinds(label.to_owned()));
        }
        Ok(ValidatorConfig {
            label: label.to_owned(),
            abstractness: self.abstractness,
            exception_policy: self.exception_policy,
            enclosing_kinds: self.enclosing_kinds,
        })
    }
}

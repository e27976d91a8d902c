//! Diagnostic message catalog.
//!
//! Every diagnostic the validators emit is identified by a [`MessageKey`]
//! and rendered from a `minijinja` template. The default templates are the
//! English catalog; a validation profile may override any of them, which is
//! how the catalog is localised independently of the rules.

use crate::binding::error::MessageCatalogError;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category of a diagnostic, independent of its wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The method is not enclosed by an allowed kind of type.
    WrongEnclosingKind,
    /// The method declares type parameters.
    TypeParameters,
    /// The method is private.
    PrivateMethod,
    /// The method is abstract when it must be concrete, or vice versa.
    WrongAbstractness,
    /// The method's parameter list has the wrong shape.
    WrongParameters,
    /// The method declares an exception the policy forbids.
    DisallowedException,
    /// The method's return type has the wrong shape.
    WrongReturnShape,
    /// The method carries a map key it may not have.
    UnexpectedMapKey,
    /// The method lacks a required map key.
    MissingMapKey,
    /// The method's contribution annotations conflict.
    MultibindingAnnotationConflict,
}

/// Identifies one entry of the message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Method outside an allowed enclosing type.
    NotInModule,
    /// Generic binding method.
    TypeParameters,
    /// Private binding method.
    Private,
    /// Concrete method where abstract is required.
    MustBeAbstract,
    /// Abstract method where concrete is required.
    MustNotBeAbstract,
    /// Any declared exception where none is allowed.
    MayNotThrow,
    /// Declared exception outside the allowed hierarchy.
    ThrowsOnlySubclasses,
    /// Declared checked exception where only unchecked ones are allowed.
    ThrowsOnlyUnchecked,
    /// Parameters where none are allowed.
    MustNotHaveParameters,
    /// `@Binds` parameter count other than one.
    BindsParameters,
    /// `void` return type.
    MustReturnValue,
    /// Framework wrapper return type.
    MustNotReturnFrameworkType,
    /// Return type that is not a plain map or set.
    MustReturnMapOrSet,
    /// `@ElementsIntoSet` without a plain set return type.
    ElementsIntoSetMustReturnSet,
    /// Map key where none is allowed.
    MustNotHaveMapKey,
    /// `@IntoMap` without a map key.
    MissingMapKey,
    /// More than one map key.
    MultipleMapKeys,
    /// Map key without `@IntoMap`.
    MapKeyWithoutIntoMap,
    /// More than one contribution annotation.
    MultipleMultibindingAnnotations,
    /// Contribution annotation on a method that is not a provider/producer.
    MultibindingAnnotationNotOnBindingMethod,
}

impl MessageKey {
    /// Every catalog key.
    pub const ALL: [Self; 20] = [
        Self::NotInModule,
        Self::TypeParameters,
        Self::Private,
        Self::MustBeAbstract,
        Self::MustNotBeAbstract,
        Self::MayNotThrow,
        Self::ThrowsOnlySubclasses,
        Self::ThrowsOnlyUnchecked,
        Self::MustNotHaveParameters,
        Self::BindsParameters,
        Self::MustReturnValue,
        Self::MustNotReturnFrameworkType,
        Self::MustReturnMapOrSet,
        Self::ElementsIntoSetMustReturnSet,
        Self::MustNotHaveMapKey,
        Self::MissingMapKey,
        Self::MultipleMapKeys,
        Self::MapKeyWithoutIntoMap,
        Self::MultipleMultibindingAnnotations,
        Self::MultibindingAnnotationNotOnBindingMethod,
    ];

    /// Returns the diagnostic category this message belongs to.
    #[must_use]
    pub const fn kind(self) -> DiagnosticKind {
        match self {
            Self::NotInModule => DiagnosticKind::WrongEnclosingKind,
            Self::TypeParameters => DiagnosticKind::TypeParameters,
            Self::Private => DiagnosticKind::PrivateMethod,
            Self::MustBeAbstract | Self::MustNotBeAbstract => DiagnosticKind::WrongAbstractness,
            Self::MayNotThrow | Self::ThrowsOnlySubclasses | Self::ThrowsOnlyUnchecked => {
                DiagnosticKind::DisallowedException
            }
            Self::MustNotHaveParameters | Self::BindsParameters => DiagnosticKind::WrongParameters,
            Self::MustReturnValue
            | Self::MustNotReturnFrameworkType
            | Self::MustReturnMapOrSet
            | Self::ElementsIntoSetMustReturnSet => DiagnosticKind::WrongReturnShape,
            Self::MustNotHaveMapKey | Self::MultipleMapKeys | Self::MapKeyWithoutIntoMap => {
                DiagnosticKind::UnexpectedMapKey
            }
            Self::MissingMapKey => DiagnosticKind::MissingMapKey,
            Self::MultipleMultibindingAnnotations
            | Self::MultibindingAnnotationNotOnBindingMethod => {
                DiagnosticKind::MultibindingAnnotationConflict
            }
        }
    }

    /// Returns the default English template.
    #[must_use]
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::NotInModule => {
                "@{{ annotation }} methods can only be present within a {{ enclosing }}"
            }
            Self::TypeParameters => "@{{ annotation }} methods may not have type parameters",
            Self::Private => "@{{ annotation }} methods cannot be private",
            Self::MustBeAbstract => "@{{ annotation }} methods must be abstract",
            Self::MustNotBeAbstract => "@{{ annotation }} methods cannot be abstract",
            Self::MayNotThrow => "@{{ annotation }} methods may not throw",
            Self::ThrowsOnlySubclasses => {
                "@{{ annotation }} methods may only throw subclasses of {{ superclass }}, \
                 but {{ thrown }} is declared"
            }
            Self::ThrowsOnlyUnchecked => {
                "@{{ annotation }} methods may only throw unchecked exceptions, \
                 but {{ thrown }} is declared"
            }
            Self::MustNotHaveParameters => "@{{ annotation }} methods must not have parameters",
            Self::BindsParameters => {
                "@{{ annotation }} methods must have exactly one parameter, \
                 whose type is assignable to the return type"
            }
            Self::MustReturnValue => "@{{ annotation }} methods must return a value (not void)",
            Self::MustNotReturnFrameworkType => {
                "@{{ annotation }} methods must not return framework types"
            }
            Self::MustReturnMapOrSet => "@{{ annotation }} methods must return Map<K, V> or Set<T>",
            Self::ElementsIntoSetMustReturnSet => {
                "@{{ annotation }} methods annotated with @ElementsIntoSet must return Set<T>"
            }
            Self::MustNotHaveMapKey => "@{{ annotation }} methods must not have a map key",
            Self::MissingMapKey => {
                "@{{ annotation }} methods annotated with @IntoMap must declare a map key"
            }
            Self::MultipleMapKeys => {
                "@{{ annotation }} methods may not have more than one map key"
            }
            Self::MapKeyWithoutIntoMap => {
                "@{{ annotation }} methods may only have a map key when annotated with @IntoMap"
            }
            Self::MultipleMultibindingAnnotations => {
                "@{{ annotation }} methods may not have more than one multibinding annotation"
            }
            Self::MultibindingAnnotationNotOnBindingMethod => {
                "Multibinding annotations may only be on @Provides or @Produces methods"
            }
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Values substituted into a message template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageArgs {
    annotation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    enclosing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    superclass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thrown: Option<String>,
}

impl MessageArgs {
    /// Creates arguments for the validator labelled `annotation`.
    #[must_use]
    pub fn new(annotation: impl Into<String>) -> Self {
        Self {
            annotation: annotation.into(),
            ..Self::default()
        }
    }

    /// Sets the description of the allowed enclosing types.
    #[must_use]
    pub fn with_enclosing(mut self, enclosing: impl Into<String>) -> Self {
        self.enclosing = Some(enclosing.into());
        self
    }

    /// Sets the allowed exception superclass.
    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Sets the offending exception type.
    #[must_use]
    pub fn with_thrown(mut self, thrown: impl Into<String>) -> Self {
        self.thrown = Some(thrown.into());
        self
    }
}

/// The catalog of message templates, keyed by [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageCatalog {
    overrides: BTreeMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Creates the default English catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the template for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageCatalogError::InvalidTemplate`] when the template
    /// does not compile.
    pub fn with_override(
        mut self,
        key: MessageKey,
        template: impl Into<String>,
    ) -> Result<Self, MessageCatalogError> {
        let source = template.into();
        Environment::new()
            .template_from_str(&source)
            .map_err(|error| MessageCatalogError::InvalidTemplate {
                key,
                reason: error.to_string(),
            })?;
        self.overrides.insert(key, source);
        Ok(self)
    }

    /// Returns the template currently used for `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| key.default_template(), String::as_str)
    }

    /// Renders the message for `key`.
    ///
    /// Rendering never fails: if the template cannot be rendered the raw
    /// template text is returned and the failure is logged.
    #[must_use]
    pub fn render(&self, key: MessageKey, args: &MessageArgs) -> String {
        let template = self.template(key);
        Environment::new()
            .render_str(template, args)
            .unwrap_or_else(|error| {
                tracing::warn!(key = %key, error = %error, "message template failed to render");
                template.to_owned()
            })
    }
}

//! Validation profiles.
//!
//! A profile is the read-only vocabulary shared by every validator: which
//! types are map and set containers, which types are framework wrappers,
//! and how diagnostics are worded. It is fixed at construction time and
//! shared through `Arc`.

use crate::binding::{
    domain::QualifiedName,
    error::ProfileError,
    messages::{MessageCatalog, MessageKey},
    shape::TypeVocabulary,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Construction-time vocabulary for validators.
///
/// # Examples
///
/// ```
/// use bindwright::binding::profile::ValidationProfile;
///
/// let profile = ValidationProfile::from_json_str(
///     r#"{ "additional_framework_types": ["com.example.Deferred"] }"#,
/// )
/// .expect("valid profile");
/// assert!(
///     profile
///         .types()
///         .framework_types()
///         .iter()
///         .any(|name| name.as_str() == "com.example.Deferred")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationProfile {
    types: TypeVocabulary,
    messages: MessageCatalog,
}

impl ValidationProfile {
    /// Creates a profile from its parts.
    #[must_use]
    pub const fn new(types: TypeVocabulary, messages: MessageCatalog) -> Self {
        Self { types, messages }
    }

    /// Builds a profile from a parsed document, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidName`] for malformed type names and
    /// [`ProfileError::Messages`] for message overrides that do not compile.
    pub fn from_document(document: ProfileDocument) -> Result<Self, ProfileError> {
        let defaults = TypeVocabulary::default();

        let map_types = resolve_names(document.map_types, defaults.map_types())?;
        let set_types = resolve_names(document.set_types, defaults.set_types())?;
        let mut framework_types =
            resolve_names(document.framework_types, defaults.framework_types())?;
        for name in document.additional_framework_types {
            framework_types.push(QualifiedName::new(name)?);
        }

        let mut messages = MessageCatalog::new();
        for (key, template) in document.messages {
            messages = messages.with_override(key, template)?;
        }

        Ok(Self {
            types: TypeVocabulary::new(map_types, set_types, framework_types),
            messages,
        })
    }

    /// Parses a JSON profile document and builds the profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Parse`] when the JSON is malformed, or any
    /// error from [`ValidationProfile::from_document`].
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let document: ProfileDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Returns the type vocabulary.
    #[must_use]
    pub const fn types(&self) -> &TypeVocabulary {
        &self.types
    }

    /// Returns the message catalog.
    #[must_use]
    pub const fn messages(&self) -> &MessageCatalog {
        &self.messages
    }
}

fn resolve_names<'a>(
    configured: Option<Vec<String>>,
    defaults: impl IntoIterator<Item = &'a QualifiedName>,
) -> Result<Vec<QualifiedName>, ProfileError> {
    match configured {
        Some(names) => names
            .into_iter()
            .map(|name| QualifiedName::new(name).map_err(ProfileError::from))
            .collect(),
        None => Ok(defaults.into_iter().cloned().collect()),
    }
}

/// Serialised form of a validation profile.
///
/// Absent lists keep the defaults; present lists replace them.
/// `additional_framework_types` extends whichever framework list is in
/// effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileDocument {
    /// Qualified names of map containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_types: Option<Vec<String>>,
    /// Qualified names of set containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_types: Option<Vec<String>>,
    /// Qualified names of framework wrapper types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_types: Option<Vec<String>>,
    /// Framework wrapper types added to the list in effect.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_framework_types: Vec<String>,
    /// Message template overrides.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<MessageKey, String>,
}

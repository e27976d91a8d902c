//! Error types for validator construction and profile loading.
//!
//! Declaration defects are never errors: they are reported as diagnostics.
//! The types here cover programming and configuration mistakes that must
//! fail fast before any declaration is checked.

use super::{
    domain::{BindingDomainError, QualifiedName},
    messages::MessageKey,
};
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building a validator configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The validator label is empty after trimming.
    #[error("validator label must not be empty")]
    EmptyLabel,

    /// No enclosing kind is allowed, so every method would be rejected.
    #[error("validator '{0}' must allow at least one enclosing kind")]
    NoEnclosingKinds(String),

    /// The abstractness policy name is not recognised.
    #[error("unknown abstractness policy: {0}")]
    UnknownAbstractness(String),

    /// The exception policy name is not recognised.
    #[error("unknown exception policy: {0}")]
    UnknownExceptionPolicy(String),

    /// A type name in the configuration is malformed.
    #[error(transparent)]
    InvalidName(#[from] BindingDomainError),
}

/// Errors raised while customising the message catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageCatalogError {
    /// A template override does not compile.
    #[error("message template for {key} is invalid: {reason}")]
    InvalidTemplate {
        /// The catalog entry being overridden.
        key: MessageKey,
        /// Description of the template error.
        reason: String,
    },
}

/// Errors raised while loading a validation profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read validation profile {path}: {source}")]
    Io {
        /// Path of the profile file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The profile document is not valid JSON or has the wrong structure.
    #[error("invalid validation profile document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A type name in the profile is malformed.
    #[error("invalid type name in validation profile: {0}")]
    InvalidName(#[from] BindingDomainError),

    /// A message override in the profile is invalid.
    #[error(transparent)]
    Messages(#[from] MessageCatalogError),
}

impl ProfileError {
    /// Creates an I/O error for the profile at `path`.
    #[must_use]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by a declaration source.
#[derive(Debug, Clone, Error)]
pub enum DeclarationSourceError {
    /// The underlying store could not be read.
    #[error("declaration source unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The store returned data that is not a valid declaration.
    #[error("malformed declaration: {0}")]
    Malformed(String),
}

impl DeclarationSourceError {
    /// Creates an unavailability error from any error type.
    #[must_use]
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Creates a malformed-declaration error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Errors raised by the module validation service.
///
/// Only infrastructure failures surface here; declaration defects are
/// diagnostics in the returned report.
#[derive(Debug, Clone, Error)]
pub enum ModuleValidationError {
    /// No module with this name is known to the source.
    #[error("module not found: {0}")]
    NotFound(QualifiedName),

    /// The declaration source failed.
    #[error(transparent)]
    Source(#[from] DeclarationSourceError),
}

//! Validation reports.
//!
//! A [`ValidationReport`] is the outcome of one validation pass: an ordered
//! list of diagnostics about one subject plus optional nested reports (a
//! module report holds one sub-report per method). Reports are built
//! incrementally through [`ValidationReportBuilder`] and are immutable once
//! built. A report is clean when neither it nor any nested report contains
//! an error.

use crate::binding::messages::{DiagnosticKind, MessageKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The declaration is rejected.
    Error,
    /// The declaration is accepted but suspicious.
    Warning,
    /// Informational.
    Note,
}

impl Severity {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding about a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    severity: Severity,
    key: MessageKey,
    message: String,
    subject: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(
        severity: Severity,
        key: MessageKey,
        message: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            key,
            message: message.into(),
            subject: subject.into(),
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic category.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.key.kind()
    }

    /// Returns the catalog key the message was rendered from.
    #[must_use]
    pub const fn key(&self) -> MessageKey {
        self.key
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the subject the diagnostic is about.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns `true` for error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.subject, self.severity, self.message)
    }
}

/// The outcome of validating one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    subject: String,
    items: Vec<Diagnostic>,
    subreports: Vec<ValidationReport>,
}

impl ValidationReport {
    /// Starts a report about `subject`.
    #[must_use]
    pub fn about(subject: impl Into<String>) -> ValidationReportBuilder {
        ValidationReportBuilder::new(subject)
    }

    /// Returns the subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns this report's own diagnostics in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Returns the nested reports in insertion order.
    #[must_use]
    pub fn subreports(&self) -> &[Self] {
        &self.subreports
    }

    /// Returns `true` when any error exists here or in a nested report.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error) || self.subreports.iter().any(Self::has_errors)
    }

    /// Returns `true` when the report and all nested reports are free of
    /// errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.has_errors()
    }

    /// Returns every diagnostic, own items first, then nested reports
    /// depth-first.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut collected = Vec::new();
        self.collect_diagnostics(&mut collected);
        collected
    }

    /// Returns every error, in the order of [`ValidationReport::diagnostics`].
    #[must_use]
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|diagnostic| diagnostic.is_error())
            .collect()
    }

    /// Returns the number of errors here and in nested reports.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    /// Returns `true` when any diagnostic message contains `fragment`.
    #[must_use]
    pub fn mentions(&self, fragment: &str) -> bool {
        self.diagnostics()
            .iter()
            .any(|diagnostic| diagnostic.message().contains(fragment))
    }

    fn collect_diagnostics<'a>(&'a self, collected: &mut Vec<&'a Diagnostic>) {
        collected.extend(self.items.iter());
        for subreport in &self.subreports {
            subreport.collect_diagnostics(collected);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagnostics = self.diagnostics();
        if diagnostics.is_empty() {
            return write!(f, "{}: no diagnostics", self.subject);
        }
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

/// Accumulates diagnostics for one subject.
#[derive(Debug)]
pub struct ValidationReportBuilder {
    subject: String,
    items: Vec<Diagnostic>,
    subreports: Vec<ValidationReport>,
}

impl ValidationReportBuilder {
    /// Creates a builder for `subject`.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            items: Vec::new(),
            subreports: Vec::new(),
        }
    }

    /// Returns the subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Appends a diagnostic about the builder's subject.
    pub fn add(&mut self, severity: Severity, key: MessageKey, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(severity, key, message, self.subject.clone());
        self.items.push(diagnostic);
    }

    /// Appends an error.
    pub fn add_error(&mut self, key: MessageKey, message: impl Into<String>) {
        self.add(Severity::Error, key, message);
    }

    /// Appends a warning.
    pub fn add_warning(&mut self, key: MessageKey, message: impl Into<String>) {
        self.add(Severity::Warning, key, message);
    }

    /// Appends a note.
    pub fn add_note(&mut self, key: MessageKey, message: impl Into<String>) {
        self.add(Severity::Note, key, message);
    }

    /// Appends a nested report.
    pub fn add_subreport(&mut self, report: ValidationReport) {
        self.subreports.push(report);
    }

    /// Appends another report's items and nested reports to this one,
    /// keeping their order.
    pub fn merge(&mut self, report: ValidationReport) {
        self.items.extend(report.items);
        self.subreports.extend(report.subreports);
    }

    /// Returns `true` when no diagnostic or nested report was added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.subreports.is_empty()
    }

    /// Finishes the report.
    #[must_use]
    pub fn build(self) -> ValidationReport {
        ValidationReport {
            subject: self.subject,
            items: self.items,
            subreports: self.subreports,
        }
    }
}

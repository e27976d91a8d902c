//! Shared world state for multibinds validation BDD scenarios.

use bindwright::binding::{
    domain::{BindingMethodBuilder, ContainerKind, EnclosingElement, QualifiedName},
    report::ValidationReport,
};
use rstest::fixture;

/// Name of the module every scenario method is declared in.
pub const MODULE_NAME: &str = "com.example.FooModule";

/// Scenario world for multibinds validation behaviour tests.
#[derive(Default)]
pub struct ValidationWorld {
    /// The method under construction.
    pub method: Option<BindingMethodBuilder>,
    /// Whether the method carries the `abstract` modifier.
    pub is_abstract: bool,
    /// Report produced by the last validation.
    pub report: Option<ValidationReport>,
}

impl ValidationWorld {
    /// Applies `change` to the method under construction.
    pub fn update_method(
        &mut self,
        change: impl FnOnce(BindingMethodBuilder) -> BindingMethodBuilder,
    ) -> Result<(), eyre::Report> {
        let builder = self
            .method
            .take()
            .ok_or_else(|| eyre::eyre!("missing method in scenario world"))?;
        self.method = Some(change(builder));
        Ok(())
    }

    /// Returns the last validation report.
    pub fn report(&self) -> Result<&ValidationReport, eyre::Report> {
        self.report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing validation report in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ValidationWorld {
    ValidationWorld::default()
}

/// Returns the module every scenario method is declared in.
pub fn module_element() -> Result<EnclosingElement, eyre::Report> {
    Ok(EnclosingElement::new(
        QualifiedName::new(MODULE_NAME)?,
        ContainerKind::Module,
    ))
}

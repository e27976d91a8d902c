//! When steps for multibinds validation BDD scenarios.

use std::sync::Arc;

use super::world::{MODULE_NAME, ValidationWorld, module_element};
use bindwright::binding::{
    adapters::memory::InMemoryDeclarationSource,
    domain::{BindingMethod, Modifier, ModuleDeclaration, QualifiedName},
    ports::BindingMethodValidator,
    profile::ValidationProfile,
    services::ModuleValidationService,
    validation::MultibindsMethodValidator,
};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn finish_method(world: &mut ValidationWorld) -> Result<BindingMethod, eyre::Report> {
    let mut builder = world
        .method
        .take()
        .ok_or_else(|| eyre::eyre!("missing method in scenario world"))?;
    if world.is_abstract {
        builder = builder.with_modifier(Modifier::Abstract);
    }
    builder.build().wrap_err("build scenario method")
}

#[when("the method is validated")]
fn the_method_is_validated(world: &mut ValidationWorld) -> Result<(), eyre::Report> {
    let method = finish_method(world)?;
    let validator = MultibindsMethodValidator::new(Arc::new(ValidationProfile::default()));
    world.report = Some(validator.validate(&method));
    Ok(())
}

#[when("the enclosing module is validated")]
fn the_enclosing_module_is_validated(world: &mut ValidationWorld) -> Result<(), eyre::Report> {
    let method = finish_method(world)?;
    let module = ModuleDeclaration::new(module_element()?).with_method(method);
    let source = InMemoryDeclarationSource::new()
        .with_module(module)
        .wrap_err("seed scenario module")?;
    let service = ModuleValidationService::with_defaults(source);
    let report = service
        .validate_module(&QualifiedName::new(MODULE_NAME)?)
        .wrap_err("validate scenario module")?;
    world.report = Some(report);
    Ok(())
}

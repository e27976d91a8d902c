//! Given steps for multibinds validation BDD scenarios.

use super::world::{ValidationWorld, module_element};
use bindwright::binding::domain::{Annotation, BindingMethod, QualifiedName, TypeRef, vocabulary};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a @Multibinds method "{name}" in a module"#)]
fn a_multibinds_method(world: &mut ValidationWorld, name: String) -> Result<(), eyre::Report> {
    let annotation = Annotation::new(QualifiedName::new(vocabulary::MULTIBINDS)?);
    world.method =
        Some(BindingMethod::builder(module_element()?, name).with_annotation(annotation));
    world.is_abstract = true;
    Ok(())
}

#[given(r#"the method returns "{return_type}""#)]
fn the_method_returns(
    world: &mut ValidationWorld,
    return_type: String,
) -> Result<(), eyre::Report> {
    let parsed: TypeRef = return_type
        .parse()
        .wrap_err_with(|| format!("parse return type '{return_type}'"))?;
    world.update_method(|builder| builder.returning(parsed))
}

#[given(r#"the method has a parameter "{name}" of type "{parameter_type}""#)]
fn the_method_has_a_parameter(
    world: &mut ValidationWorld,
    name: String,
    parameter_type: String,
) -> Result<(), eyre::Report> {
    let parsed: TypeRef = parameter_type
        .parse()
        .wrap_err_with(|| format!("parse parameter type '{parameter_type}'"))?;
    world.update_method(|builder| builder.with_parameter(name, parsed))
}

#[given("the method has a map key")]
fn the_method_has_a_map_key(world: &mut ValidationWorld) -> Result<(), eyre::Report> {
    let key = Annotation::map_key(QualifiedName::new("dagger.multibindings.StringKey")?);
    world.update_method(|builder| builder.with_annotation(key))
}

#[given(r#"the method is annotated with "{type_name}""#)]
fn the_method_is_annotated(
    world: &mut ValidationWorld,
    type_name: String,
) -> Result<(), eyre::Report> {
    let annotation = Annotation::new(QualifiedName::new(type_name)?);
    world.update_method(|builder| builder.with_annotation(annotation))
}

#[given("the method is not abstract")]
fn the_method_is_not_abstract(world: &mut ValidationWorld) {
    world.is_abstract = false;
}

//! Then steps for multibinds validation BDD scenarios.

use super::world::ValidationWorld;
use rstest_bdd_macros::then;

#[then("the report is clean")]
fn the_report_is_clean(world: &ValidationWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if !report.is_clean() {
        return Err(eyre::eyre!("expected a clean report, found:\n{report}"));
    }
    Ok(())
}

fn expect_error_count(world: &ValidationWorld, count: usize) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.error_count() != count {
        return Err(eyre::eyre!(
            "expected {count} error(s), found {}:\n{report}",
            report.error_count()
        ));
    }
    Ok(())
}

#[then("the report has one error")]
fn the_report_has_one_error(world: &ValidationWorld) -> Result<(), eyre::Report> {
    expect_error_count(world, 1)
}

#[then("the report has {count:usize} errors")]
fn the_report_has_errors(world: &ValidationWorld, count: usize) -> Result<(), eyre::Report> {
    expect_error_count(world, count)
}

#[then(r#"error {index:usize} says "{text}""#)]
fn error_says(world: &ValidationWorld, index: usize, text: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let errors = report.errors();
    let error = index
        .checked_sub(1)
        .and_then(|position| errors.get(position))
        .ok_or_else(|| eyre::eyre!("no error at position {index}:\n{report}"))?;
    if !error.message().contains(&text) {
        return Err(eyre::eyre!(
            "expected error {index} to mention '{text}', found '{}'",
            error.message()
        ));
    }
    Ok(())
}

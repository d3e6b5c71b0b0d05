//! Then steps for question workflow BDD scenarios.

use super::world::QuestionWorld;
use eyre::{ensure, eyre};
use rstest_bdd_macros::then;

#[then(r#"the summary shows "{content}""#)]
fn summary_shows(world: &QuestionWorld, content: String) -> Result<(), eyre::Report> {
    let summary = world
        .last_summary
        .as_ref()
        .ok_or_else(|| eyre!("no summary was rendered"))?
        .as_ref()
        .map_err(|err| eyre!("rendering the summary failed: {err}"))?;
    ensure!(
        summary.contains(&content),
        "summary {summary:?} does not show {content:?}"
    );
    Ok(())
}

#[then("the summary is empty")]
fn summary_is_empty(world: &QuestionWorld) -> Result<(), eyre::Report> {
    let summary = world
        .last_summary
        .as_ref()
        .ok_or_else(|| eyre!("no summary was rendered"))?
        .as_ref()
        .map_err(|err| eyre!("rendering the summary failed: {err}"))?;
    ensure!(summary.is_empty(), "expected an empty summary, got {summary:?}");
    Ok(())
}

#[then("a pending question is reported")]
fn pending_question_reported(world: &QuestionWorld) -> Result<(), eyre::Report> {
    let pending = world
        .last_pending_check
        .as_ref()
        .ok_or_else(|| eyre!("no pending check was performed"))?
        .as_ref()
        .map_err(|err| eyre!("the pending check failed: {err}"))?;
    ensure!(*pending, "expected a pending question to be reported");
    Ok(())
}

#[then("no pending question is reported")]
fn no_pending_question_reported(world: &QuestionWorld) -> Result<(), eyre::Report> {
    let pending = world
        .last_pending_check
        .as_ref()
        .ok_or_else(|| eyre!("no pending check was performed"))?
        .as_ref()
        .map_err(|err| eyre!("the pending check failed: {err}"))?;
    ensure!(!*pending, "expected no pending question to be reported");
    Ok(())
}

#[then(r#"the question "{content}" is closed"#)]
fn question_is_closed(world: &QuestionWorld, content: String) -> Result<(), eyre::Report> {
    let question = world.question_by_content(&content)?;
    ensure!(!question.is_open(), "question {content:?} is still open");
    ensure!(
        question.closed_at().is_some(),
        "question {content:?} carries no closing timestamp"
    );
    Ok(())
}

#[then(r#"the question "{content}" remains open"#)]
fn question_remains_open(world: &QuestionWorld, content: String) -> Result<(), eyre::Report> {
    let question = world.question_by_content(&content)?;
    ensure!(question.is_open(), "question {content:?} was closed");
    ensure!(
        question.closed_at().is_none(),
        "question {content:?} carries a closing timestamp"
    );
    Ok(())
}

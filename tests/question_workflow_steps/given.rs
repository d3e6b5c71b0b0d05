//! Given steps for question workflow BDD scenarios.

use super::world::QuestionWorld;
use querent::question::domain::QuestionAssignee;
use rstest_bdd_macros::given;

#[given(r#"an open question "{content}" for anyone on the issue"#)]
fn question_for_anyone(world: &mut QuestionWorld, content: String) -> Result<(), eyre::Report> {
    world.seed_question(&content, QuestionAssignee::Anyone)?;
    Ok(())
}

#[given(r#"an open question "{content}" assigned to the answering user"#)]
fn question_for_answering_user(
    world: &mut QuestionWorld,
    content: String,
) -> Result<(), eyre::Report> {
    let assignee = QuestionAssignee::User {
        user_id: world.answering_user,
    };
    world.seed_question(&content, assignee)?;
    Ok(())
}

#[given(r#"an open question "{content}" assigned to a different user"#)]
fn question_for_other_user(
    world: &mut QuestionWorld,
    content: String,
) -> Result<(), eyre::Report> {
    let assignee = QuestionAssignee::User {
        user_id: world.other_user,
    };
    world.seed_question(&content, assignee)?;
    Ok(())
}

#[given("an issue with no questions")]
fn issue_with_no_questions(world: &mut QuestionWorld) {
    let _ = world;
}

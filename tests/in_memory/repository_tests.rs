//! In-memory integration tests for question storage and listing.

use super::helpers::{clock, issue_id, repository, seed_question};
use mockable::DefaultClock;
use querent::question::{
    adapters::memory::InMemoryQuestionRepository,
    domain::{IssueId, Question, QuestionAssignee, QuestionId, UserId},
    ports::{QuestionRepository, QuestionRepositoryError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_and_find_by_id_round_trip(
    repository: InMemoryQuestionRepository,
    issue_id: IssueId,
) {
    let question = seed_question(
        &repository,
        issue_id,
        "Which branch carries the hotfix?",
        QuestionAssignee::Anyone,
    )
    .await
    .expect("seeding should succeed");

    let found = repository
        .find_by_id(question.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(found, Some(question));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_unknown_question(repository: InMemoryQuestionRepository) {
    let found = repository
        .find_by_id(QuestionId::new())
        .await
        .expect("lookup should succeed");

    assert_eq!(found, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier(
    repository: InMemoryQuestionRepository,
    issue_id: IssueId,
) {
    let question = seed_question(
        &repository,
        issue_id,
        "Which branch carries the hotfix?",
        QuestionAssignee::Anyone,
    )
    .await
    .expect("seeding should succeed");

    let result = repository.store(&question).await;

    assert!(matches!(
        result,
        Err(QuestionRepositoryError::DuplicateQuestion(id)) if id == question.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_unknown_question(
    repository: InMemoryQuestionRepository,
    issue_id: IssueId,
    clock: DefaultClock,
) {
    let question = Question::open(
        issue_id,
        "Never stored anywhere",
        QuestionAssignee::Anyone,
        &clock,
    )
    .expect("valid question");

    let result = repository.update(&question).await;

    assert!(matches!(
        result,
        Err(QuestionRepositoryError::NotFound(id)) if id == question.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_the_closed_state(
    repository: InMemoryQuestionRepository,
    issue_id: IssueId,
    clock: DefaultClock,
) {
    let mut question = seed_question(
        &repository,
        issue_id,
        "Was the cache warmed before the test run?",
        QuestionAssignee::Anyone,
    )
    .await
    .expect("seeding should succeed");
    question.close(&clock).expect("close should succeed");

    repository
        .update(&question)
        .await
        .expect("update should succeed");

    let stored = repository
        .find_by_id(question.id())
        .await
        .expect("lookup should succeed")
        .expect("question should exist");
    assert!(!stored.is_open());
    assert_eq!(stored.closed_at(), question.closed_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_for_issue_preserves_creation_order(
    repository: InMemoryQuestionRepository,
    issue_id: IssueId,
) {
    let other_issue_id = IssueId::new();
    let first = seed_question(&repository, issue_id, "First?", QuestionAssignee::Anyone)
        .await
        .expect("seeding should succeed");
    let second = seed_question(&repository, issue_id, "Second?", QuestionAssignee::Anyone)
        .await
        .expect("seeding should succeed");
    let third = seed_question(&repository, issue_id, "Third?", QuestionAssignee::Anyone)
        .await
        .expect("seeding should succeed");
    seed_question(
        &repository,
        other_issue_id,
        "Elsewhere?",
        QuestionAssignee::Anyone,
    )
    .await
    .expect("seeding should succeed");

    let listed = repository
        .list_for_issue(issue_id)
        .await
        .expect("listing should succeed");

    let listed_ids: Vec<_> = listed.iter().map(Question::id).collect();
    assert_eq!(listed_ids, vec![first.id(), second.id(), third.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_open_for_issue_excludes_closed_questions(
    repository: InMemoryQuestionRepository,
    issue_id: IssueId,
    clock: DefaultClock,
) {
    let reviewer = UserId::new();
    let mut answered = seed_question(
        &repository,
        issue_id,
        "Answered already?",
        QuestionAssignee::User { user_id: reviewer },
    )
    .await
    .expect("seeding should succeed");
    let outstanding = seed_question(
        &repository,
        issue_id,
        "Still waiting?",
        QuestionAssignee::Anyone,
    )
    .await
    .expect("seeding should succeed");
    answered.close(&clock).expect("close should succeed");
    repository
        .update(&answered)
        .await
        .expect("update should succeed");

    let open = repository
        .list_open_for_issue(issue_id)
        .await
        .expect("listing should succeed");

    let open_ids: Vec<_> = open.iter().map(Question::id).collect();
    assert_eq!(open_ids, vec![outstanding.id()]);
}

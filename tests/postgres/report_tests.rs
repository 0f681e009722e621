//! Reports service tests against a real `PostgreSQL` database.

use chrono::{DateTime, Utc};
use rstest::{fixture, rstest};
use todo_reports::report::{
    adapters::postgres::{PostgresTaskRepository, PostgresTodoListRepository},
    domain::{TaskCount, TodoListId, User, UserId},
    ports::{DeadlineComparison, TaskQuery, TaskRepository, TodoListRepository},
};

use super::helpers::{ReportDb, at, date, report_db};

#[fixture]
fn now() -> DateTime<Utc> {
    at(2024, 1, 11, 12, 0)
}

/// Seeds six tasks for `owner`: five completed, two of them late, and one
/// pending task already past its deadline.
///
/// One completion is written with a `-05` offset at 23:30 on 4 January,
/// which is 04:30 on 5 January in UTC.
fn seed_mixed_list(db: &ReportDb, owner: UserId) -> TodoListId {
    let list_id = db.insert_list(owner);
    db.insert_task(list_id, Some("2024-01-05 18:00:00+00"), "2024-01-06 00:00:00+00");
    db.insert_task(list_id, Some("2024-01-03 10:00:00+00"), "2024-01-05 00:00:00+00");
    db.insert_task(list_id, Some("2024-01-04 23:30:00-05"), "2024-01-05 00:00:00+00");
    db.insert_task(list_id, None, "2024-01-02 00:00:00+00");
    db.insert_task(list_id, Some("2024-01-03 15:00:00+00"), "2024-01-03 15:00:00+00");
    db.insert_task(list_id, Some("2024-01-05 09:00:00+00"), "2024-01-04 00:00:00+00");
    list_id
}

#[rstest]
fn user_without_list_gets_neutral_results(report_db: ReportDb, now: DateTime<Utc>) {
    let db = report_db;
    let other = db.insert_list(UserId::new());
    db.insert_task(other, Some("2024-01-03 10:00:00+00"), "2024-01-02 00:00:00+00");
    let service = db.service(now);
    let user = User::new(UserId::new(), at(2024, 1, 1, 0, 0));

    let counts = db.rt.block_on(service.task_count(&user)).expect("task count");
    let average = db
        .rt
        .block_on(service.avg_tasks_per_day(&user))
        .expect("average");
    let late = db
        .rt
        .block_on(service.tasks_not_completed_on_time(&user))
        .expect("late count");
    let best_day = db
        .rt
        .block_on(service.date_with_most_completed_tasks(&user))
        .expect("best day");

    assert_eq!(counts, TaskCount::default());
    assert_eq!(average, 0);
    assert_eq!(late, 0);
    assert_eq!(best_day, None);
}

#[rstest]
fn mixed_list_reports_counts_lateness_and_best_day(report_db: ReportDb, now: DateTime<Utc>) {
    let db = report_db;
    let owner = UserId::new();
    seed_mixed_list(&db, owner);
    let service = db.service(now);
    let user = User::new(owner, at(2024, 1, 9, 8, 0));

    let counts = db.rt.block_on(service.task_count(&user)).expect("task count");
    let average = db
        .rt
        .block_on(service.avg_tasks_per_day(&user))
        .expect("average");
    let late = db
        .rt
        .block_on(service.tasks_not_completed_on_time(&user))
        .expect("late count");
    let best_day = db
        .rt
        .block_on(service.date_with_most_completed_tasks(&user))
        .expect("best day");

    assert_eq!(counts, TaskCount::from_totals(6, 5));
    assert_eq!(counts.remaining_tasks, 1);
    assert_eq!(average, 2, "5 completed over 2 days");
    assert_eq!(late, 2, "completion exactly at the deadline is on time");
    assert_eq!(best_day, Some(date(2024, 1, 5)));
}

#[rstest]
fn average_is_zero_on_signup_day(report_db: ReportDb, now: DateTime<Utc>) {
    let db = report_db;
    let owner = UserId::new();
    seed_mixed_list(&db, owner);
    let service = db.service(now);

    let average = db
        .rt
        .block_on(service.avg_tasks_per_day(&User::new(owner, at(2024, 1, 11, 0, 5))))
        .expect("average");
    assert_eq!(average, 0);
}

#[rstest]
fn tied_days_resolve_to_earliest_date(report_db: ReportDb, now: DateTime<Utc>) {
    let db = report_db;
    let owner = UserId::new();
    let list_id = db.insert_list(owner);
    db.insert_task(list_id, Some("2024-01-04 09:00:00+00"), "2024-01-10 00:00:00+00");
    db.insert_task(list_id, Some("2024-01-04 17:00:00+00"), "2024-01-10 00:00:00+00");
    db.insert_task(list_id, Some("2024-01-02 11:00:00+00"), "2024-01-10 00:00:00+00");
    db.insert_task(list_id, Some("2024-01-02 20:00:00+00"), "2024-01-10 00:00:00+00");
    let service = db.service(now);

    let best_day = db
        .rt
        .block_on(service.date_with_most_completed_tasks(&User::new(owner, at(2024, 1, 1, 0, 0))))
        .expect("best day");
    assert_eq!(best_day, Some(date(2024, 1, 2)));
}

#[rstest]
fn completion_times_are_ascending_utc_instants(report_db: ReportDb) {
    let db = report_db;
    let list_id = seed_mixed_list(&db, UserId::new());
    let repository = PostgresTaskRepository::new(db.pool.clone());

    let times = db
        .rt
        .block_on(repository.completion_times(&TaskQuery::for_list(list_id).completed()))
        .expect("completion times");

    assert_eq!(
        times,
        vec![
            at(2024, 1, 3, 10, 0),
            at(2024, 1, 3, 15, 0),
            at(2024, 1, 5, 4, 30),
            at(2024, 1, 5, 9, 0),
            at(2024, 1, 5, 18, 0),
        ]
    );
}

#[rstest]
fn deadline_predicates_split_completed_tasks(report_db: ReportDb) {
    let db = report_db;
    let list_id = seed_mixed_list(&db, UserId::new());
    let repository = PostgresTaskRepository::new(db.pool.clone());
    let completed = TaskQuery::for_list(list_id).completed();

    let late = db
        .rt
        .block_on(repository.count(&completed.with_deadline(DeadlineComparison::CompletedAfterDue)))
        .expect("late count");
    let on_time = db
        .rt
        .block_on(repository.count(&completed.with_deadline(DeadlineComparison::CompletedByDue)))
        .expect("on-time count");

    assert_eq!((late, on_time), (2, 3));
}

#[rstest]
fn find_by_owner_loads_list_with_its_tasks(report_db: ReportDb) {
    let db = report_db;
    let owner = UserId::new();
    let list_id = seed_mixed_list(&db, owner);
    let repository = PostgresTodoListRepository::new(db.pool.clone());

    let list = db
        .rt
        .block_on(repository.find_by_owner(owner))
        .expect("list lookup")
        .expect("list should exist");
    let missing = db
        .rt
        .block_on(repository.find_by_owner(UserId::new()))
        .expect("missing lookup");

    assert_eq!(list.id(), list_id);
    assert_eq!(list.owner(), owner);
    assert_eq!(list.tasks().len(), 6);
    assert_eq!(
        list.tasks()
            .iter()
            .filter(|task| task.completion_status())
            .count(),
        5
    );
    assert!(list.tasks().iter().all(|task| task.todo_list_id() == list_id));
    assert!(list.tasks().is_sorted_by_key(|task| task.id()));
    assert!(missing.is_none());
}

//! Given steps for reporting BDD scenarios.

use super::world::ReportWorld;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_reports::report::domain::{Task, TodoList, TodoListId, User, UserId};

#[given("a user who signed up {days:i64} days ago")]
fn user_signed_up_days_ago(world: &mut ReportWorld, days: i64) {
    world.user = Some(User::new(UserId::new(), world.now - Duration::days(days)));
}

#[given("the user has a todo list")]
fn user_has_todo_list(world: &mut ReportWorld) -> Result<(), eyre::Report> {
    let user = world
        .user
        .ok_or_else(|| eyre::eyre!("missing user in scenario world"))?;
    let list = TodoList::new(TodoListId::new(), user.id());
    world
        .store
        .insert_list(&list)
        .wrap_err("insert todo list for scenario user")?;
    world.list_id = Some(list.id());
    Ok(())
}

#[given(r#"on "{day}" the user completed {on_time:u64} on time and {late:u64} late"#)]
fn user_completed_tasks_on(
    world: &mut ReportWorld,
    day: String,
    on_time: u64,
    late: u64,
) -> Result<(), eyre::Report> {
    let list_id = world
        .list_id
        .ok_or_else(|| eyre::eyre!("missing todo list in scenario world"))?;
    let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d").wrap_err("parse completion date")?;
    let completed_at = utc_time(day, 10)?;

    for _ in 0..on_time {
        let due = utc_time(day, 18)?;
        world
            .store
            .insert_task(Task::completed(list_id, due, completed_at))
            .wrap_err("insert on-time task")?;
    }
    for _ in 0..late {
        let due = utc_time(day, 8)?;
        world
            .store
            .insert_task(Task::completed(list_id, due, completed_at))
            .wrap_err("insert late task")?;
    }
    Ok(())
}

#[given("the user has {count:u64} pending tasks")]
fn user_has_pending_tasks(world: &mut ReportWorld, count: u64) -> Result<(), eyre::Report> {
    let list_id = world
        .list_id
        .ok_or_else(|| eyre::eyre!("missing todo list in scenario world"))?;
    for _ in 0..count {
        world
            .store
            .insert_task(Task::pending(list_id, world.now - Duration::days(1)))
            .wrap_err("insert pending task")?;
    }
    Ok(())
}

fn utc_time(day: NaiveDate, hour: u32) -> Result<DateTime<Utc>, eyre::Report> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| eyre::eyre!("invalid hour {hour}"))?;
    Ok(day.and_time(time).and_utc())
}

//! Session-level progression behaviour

use osteo_core::{
    ClientSession, ProgressUpdate, TaskStore, rounded_percent, weekly_completion_percent,
};
use osteo_types::{
    Level, MilestoneId, ProgressionRules, StartingState, TaskId, TaskToggle, Weekday,
};

use crate::common::{demo_session, task_seed};

fn session_at(level: u32, xp: u32) -> ClientSession {
    let seeds = vec![
        task_seed(1, "Morning mobility (10 min)", Weekday::MONDAY),
        task_seed(2, "Breathing reset (5 min)", Weekday::MONDAY),
        task_seed(3, "Glute activation set", Weekday::TUESDAY),
        task_seed(4, "Thoracic extension drill", Weekday::WEDNESDAY),
        task_seed(5, "Walk 20 minutes", Weekday::THURSDAY),
        task_seed(6, "KB deadlift – light set", Weekday::FRIDAY),
        task_seed(7, "Evening stretch (8 min)", Weekday::SATURDAY),
    ];
    let start = StartingState {
        level: Level::try_new(level).unwrap(),
        xp,
        milestones: Vec::new(),
    };
    ClientSession::new(seeds, Vec::new(), ProgressionRules::default(), &start)
}

#[test]
fn completing_both_monday_tasks() {
    let mut session = session_at(1, 50);
    let monday: Vec<TaskId> = session
        .tasks_for_day(Weekday::MONDAY)
        .map(|task| task.id())
        .collect();
    assert_eq!(monday.len(), 2);

    let mut awards = 0;
    for id in monday {
        let report = session.toggle_task(id).unwrap();
        assert_eq!(report.toggle, TaskToggle::TurnedOn);
        if matches!(report.progress, ProgressUpdate::Awarded(_)) {
            awards += 1;
        }
    }

    assert_eq!(awards, 2);
    let percent = session.weekly_completion_percent();
    assert!((percent - 28.571_428_571_428_57).abs() < 1e-9);
    assert_eq!(rounded_percent(percent), 29);
    assert_eq!(session.current_xp(), 70);
    assert_eq!(session.current_level().value(), 1);
}

#[test]
fn completing_monday_from_dashboard_start_crosses_threshold() {
    let mut session = session_at(2, 140);
    session.toggle_task(TaskId::new(1)).unwrap();
    assert_eq!((session.current_level().value(), session.current_xp()), (3, 0));
    session.toggle_task(TaskId::new(2)).unwrap();
    assert_eq!((session.current_level().value(), session.current_xp()), (3, 10));
}

#[test]
fn double_toggle_restores_every_task() {
    let mut session = demo_session();
    let ids: Vec<TaskId> = session.tasks().tasks().iter().map(|task| task.id()).collect();
    for id in ids {
        let before = session.tasks().get(id).unwrap().is_done();
        session.toggle_task(id).unwrap();
        session.toggle_task(id).unwrap();
        assert_eq!(session.tasks().get(id).unwrap().is_done(), before);
    }
    assert_eq!(session.tasks().completed_count(), 0);
}

#[test]
fn percent_stays_in_range_through_a_week() {
    let mut session = demo_session();
    let ids: Vec<TaskId> = session.tasks().tasks().iter().map(|task| task.id()).collect();
    for id in ids.iter().chain(ids.iter().rev()).copied() {
        session.toggle_task(id).unwrap();
        let percent = session.weekly_completion_percent();
        assert!((0.0..=100.0).contains(&percent));
    }
}

#[test]
fn empty_store_reports_zero() {
    assert!(weekly_completion_percent(&TaskStore::new(Vec::new())).abs() < f64::EPSILON);
}

#[test]
fn level_never_decreases() {
    let mut session = demo_session();
    let mut last = session.current_level();
    for _ in 0..40 {
        session.toggle_task(TaskId::new(7)).unwrap();
        assert!(session.current_level() >= last);
        assert!(session.current_xp() < 150);
        last = session.current_level();
    }
}

#[test]
fn unknown_task_is_reported() {
    let mut session = demo_session();
    let err = session.toggle_task(TaskId::new(404)).unwrap_err();
    assert_eq!(err.id, TaskId::new(404));
    assert_eq!(session.current_xp(), 120);
}

#[test]
fn achieved_milestones_reflect_toggles() {
    let mut session = demo_session();
    session.toggle_milestone("m3");
    let mut achieved: Vec<MilestoneId> = session.achieved_milestones().cloned().collect();
    achieved.sort();
    assert_eq!(achieved, vec![MilestoneId::from("m1"), MilestoneId::from("m3")]);
}

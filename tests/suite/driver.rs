//! Terminal driver: commands in, text out

use insta::assert_snapshot;
use osteo::{CommandError, Reply};

use crate::common::demo_driver;

fn print(reply: Option<Reply>) -> String {
    match reply {
        Some(Reply::Print(text)) => text,
        other => panic!("expected printed output, got {other:?}"),
    }
}

#[test]
fn status_on_open() {
    let mut driver = demo_driver();
    let text = print(driver.handle_line("status").unwrap());
    assert_snapshot!(text, @r"
Weekly completion: 0%
Level 2
120/150 XP to next level
Milestones: 1/5
");
}

#[test]
fn milestone_path_on_open() {
    let mut driver = demo_driver();
    let text = print(driver.handle_line("milestones").unwrap());
    assert_snapshot!(text, @r"
[x] m1  Pain < 6/10 for 3 days
[ ] m2  Full morning routine 5×
[ ] m3  First strength session
[ ] m4  Complete weekly check-in
[ ] m5  Return to favourite activity
");
}

#[test]
fn day_lists_tasks() {
    let mut driver = demo_driver();
    let text = print(driver.handle_line("day 1").unwrap());
    assert_eq!(
        text,
        "Mon:\n  [ ]  1  Morning mobility (10 min)\n  [ ]  2  Breathing reset (5 min)"
    );
}

#[test]
fn empty_day_has_rest_message() {
    let mut driver = demo_driver();
    let text = print(driver.handle_line("day 7").unwrap());
    assert_eq!(text, "Sun:\n  No tasks for this day - enjoy the recovery!");
    assert_eq!(driver.session().selected_tasks().count(), 0);
}

#[test]
fn toggles_report_award_level_up_and_retention() {
    let mut driver = demo_driver();

    let text = print(driver.handle_line("toggle 1").unwrap());
    assert_eq!(
        text,
        "[x] Morning mobility (10 min)\n+10 XP (130/150 XP to next level)"
    );

    driver.handle_line("toggle 2").unwrap();
    let text = print(driver.handle_line("toggle 3").unwrap());
    assert_eq!(
        text,
        "[x] Glute activation set\n+10 XP (0/150 XP to next level)\nLevel up! You are now level 3"
    );

    let text = print(driver.handle_line("toggle 1").unwrap());
    assert_eq!(text, "[ ] Morning mobility (10 min)\nXP kept");
    assert_eq!(driver.session().current_level().value(), 3);
    assert_eq!(driver.session().current_xp(), 0);
}

#[test]
fn unknown_task_is_reported_not_fatal() {
    let mut driver = demo_driver();
    let text = print(driver.handle_line("toggle 99").unwrap());
    assert_eq!(text, "No task with id 99");
    assert_eq!(driver.session().current_xp(), 120);
}

#[test]
fn milestone_toggle_round_trip() {
    let mut driver = demo_driver();
    assert_eq!(
        print(driver.handle_line("milestone m2").unwrap()),
        "Milestone m2 achieved"
    );
    assert_eq!(
        print(driver.handle_line("milestone m2").unwrap()),
        "Milestone m2 cleared"
    );
    assert!(!driver.session().is_milestone_achieved("m2"));
}

#[test]
fn week_marks_selected_day() {
    let mut driver = demo_driver();
    driver.handle_line("toggle 2").unwrap();
    let text = print(driver.handle_line("week").unwrap());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "> Mon 2025-08-11  1/2 done");
    assert_eq!(lines[2], "  Wed 2025-08-13  0/1 done");
    assert_eq!(lines[6], "  Sun 2025-08-17  0/0 done");
}

#[test]
fn status_json_is_machine_readable() {
    let mut driver = demo_driver();
    driver.handle_line("toggle 4").unwrap();
    let text = print(driver.handle_line("status --json").unwrap());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["level"], 2);
    assert_eq!(value["xp"], 130);
    assert_eq!(value["level_threshold"], 150);
    assert_eq!(value["milestones_achieved"], 1);
    let percent = value["completion_percent"].as_f64().unwrap();
    assert!((percent - 100.0 / 7.0).abs() < 1e-9);
}

#[test]
fn blank_lines_and_quit() {
    let mut driver = demo_driver();
    assert_eq!(driver.handle_line("").unwrap(), None);
    assert_eq!(driver.handle_line("quit").unwrap(), Some(Reply::Quit));
}

#[test]
fn bad_input_is_an_error() {
    let mut driver = demo_driver();
    assert!(matches!(
        driver.handle_line("day 0"),
        Err(CommandError::InvalidDay(_))
    ));
    assert!(matches!(
        driver.handle_line("jump"),
        Err(CommandError::Unknown(_))
    ));
}

//! Plain-text views over a session.

use std::fmt::Write;

use chrono::NaiveDate;
use osteo_core::{ClientSession, ProgressUpdate, TaskToggleReport, week};
use osteo_types::{MilestoneId, MilestoneToggle, TaskNotFound, Weekday};

const EMPTY_DAY: &str = "No tasks for this day - enjoy the recovery!";

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

#[must_use]
pub fn render_day(session: &ClientSession, day: Weekday) -> String {
    let mut out = format!("{day}:");
    let mut any = false;
    for task in session.tasks_for_day(day) {
        any = true;
        let _ = write!(
            out,
            "\n  {} {:>2}  {}",
            checkbox(task.is_done()),
            task.id().value(),
            task.title()
        );
    }
    if !any {
        out.push_str("\n  ");
        out.push_str(EMPTY_DAY);
    }
    out
}

#[must_use]
pub fn render_toggle(session: &ClientSession, report: &TaskToggleReport) -> String {
    let title = session
        .tasks()
        .get(report.task_id)
        .map_or("", |task| task.title());
    let mut out = format!("{} {title}", checkbox(report.toggle.done()));
    match report.progress {
        ProgressUpdate::Awarded(award) => {
            let _ = write!(
                out,
                "\n+{} XP ({}/{} XP to next level)",
                award.gained,
                award.xp,
                session.progression().level_threshold()
            );
            if award.leveled_up() {
                let _ = write!(out, "\nLevel up! You are now level {}", award.level);
            }
        }
        ProgressUpdate::Retained => out.push_str("\nXP kept"),
    }
    out
}

#[must_use]
pub fn render_not_found(err: &TaskNotFound) -> String {
    format!("No task with id {}", err.id)
}

#[must_use]
pub fn render_milestone_toggle(id: &MilestoneId, toggle: MilestoneToggle) -> String {
    match toggle {
        MilestoneToggle::Achieved => format!("Milestone {id} achieved"),
        MilestoneToggle::Cleared => format!("Milestone {id} cleared"),
    }
}

#[must_use]
pub fn render_milestones(session: &ClientSession) -> String {
    session
        .milestone_path()
        .map(|step| {
            format!(
                "{} {}  {}",
                checkbox(step.achieved),
                step.milestone.id,
                step.milestone.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_status(session: &ClientSession) -> String {
    session.summary().to_string()
}

pub fn render_status_json(session: &ClientSession) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&session.summary())
}

/// One line per day of the week containing `today`. The selected day is
/// marked with `>`.
#[must_use]
pub fn render_week(session: &ClientSession, today: NaiveDate) -> String {
    week::week_days(today)
        .into_iter()
        .map(|(day, date)| {
            let marker = if day == session.selected_day() { '>' } else { ' ' };
            let count = session.tasks_for_day(day).count();
            let done = session
                .tasks_for_day(day)
                .filter(|task| task.is_done())
                .count();
            format!("{marker} {day} {date}  {done}/{count} done")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_help() -> &'static str {
    "Commands:
  day <1-7>         select a day (1 = Monday) and list its tasks
  toggle <task-id>  mark a task done or not done
  milestone <id>    mark a milestone achieved or not
  milestones        show the milestone path
  status [--json]   show weekly completion, level and XP
  week              show this week's dates
  help              show this help
  quit              leave"
}

//! OsteoOS terminal driver.
//!
//! Reads one command per line and applies it to a single
//! [`ClientSession`]. The binary entry point is in main.rs; this library
//! exposes the command layer for testing.

mod command;
mod render;

pub use command::{Command, CommandError, parse_command};
pub use render::{
    render_day, render_help, render_milestone_toggle, render_milestones, render_not_found,
    render_status, render_status_json, render_toggle, render_week,
};

use chrono::NaiveDate;
use osteo_config::OsteoConfig;
use osteo_core::{ClientSession, seed};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

/// Build the session a fresh client sees, honouring config overrides.
///
/// Without a `[start]` section the session opens at the dashboard's
/// starting progression.
#[must_use]
pub fn session_from_config(config: &OsteoConfig) -> ClientSession {
    let start = config.start().cloned().unwrap_or_else(seed::dashboard_start);
    ClientSession::new(
        seed::task_template(),
        seed::milestone_catalog(),
        config.progression(),
        &start,
    )
}

pub struct Driver {
    session: ClientSession,
    today: NaiveDate,
}

impl Driver {
    #[must_use]
    pub fn new(session: ClientSession, today: NaiveDate) -> Self {
        Self { session, today }
    }

    #[must_use]
    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    /// Parse and run one input line. Blank lines produce no output.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>, CommandError> {
        Ok(parse_command(line)?.map(|command| self.execute(command)))
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        let text = match command {
            Command::Day(day) => {
                self.session.select_day(day);
                render_day(&self.session, day)
            }
            Command::Toggle(id) => match self.session.toggle_task(id) {
                Ok(report) => render_toggle(&self.session, &report),
                Err(err) => {
                    tracing::debug!(task_id = %err.id, "Toggle for unknown task");
                    render_not_found(&err)
                }
            },
            Command::Milestone(id) => {
                let toggle = self.session.toggle_milestone(id.clone());
                render_milestone_toggle(&id, toggle)
            }
            Command::Milestones => render_milestones(&self.session),
            Command::Status { json: false } => render_status(&self.session),
            Command::Status { json: true } => match render_status_json(&self.session) {
                Ok(json) => json,
                Err(err) => {
                    tracing::warn!("Failed to serialize status: {err}");
                    format!("Failed to serialize status: {err}")
                }
            },
            Command::Week => render_week(&self.session, self.today),
            Command::Help => render_help().to_owned(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Print(text)
    }
}

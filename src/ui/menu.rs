//! Interactive menu loop.
//!
//! A single state ("awaiting menu choice") and a closed set of commands.
//! Each command collects and validates its own fields before anything is
//! built or stored; when it finishes, control returns to the menu.
//!
//! The loop is generic over its input and output streams so it can be
//! driven from stdin/stdout or from an in-memory buffer.

use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::practice::PracticeLogic;
use crate::core::progress::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{PracticeSession, Skill};
use crate::ui::messages::{Level, styled};
use crate::utils::date::resolve_date_input;
use crate::utils::input::{parse_int, parse_non_negative};
use std::io::{BufRead, Write};

const MENU: &str = "\nSkillVault Menu:\n\
1. Add a New Skill\n\
2. Log Practice Session\n\
3. View Progress\n\
4. Delete Skill\n\
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddSkill,
    LogSession,
    ViewProgress,
    DeleteSkill,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddSkill),
            "2" => Some(MenuChoice::LogSession),
            "3" => Some(MenuChoice::ViewProgress),
            "4" => Some(MenuChoice::DeleteSkill),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub struct Menu<'a, R, W> {
    pool: &'a mut DbPool,
    cfg: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(pool: &'a mut DbPool, cfg: &'a Config, input: R, output: W) -> Self {
        Self {
            pool,
            cfg,
            input,
            output,
        }
    }

    /// Run until the user picks "Exit" or the input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;

            let Some(raw) = self.prompt("Choose an option")? else {
                break;
            };

            let step = match MenuChoice::parse(&raw) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.say(Level::Error, "Invalid choice.")?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<Step> {
        let result = match choice {
            MenuChoice::AddSkill => self.add_skill(),
            MenuChoice::LogSession => self.log_session(),
            MenuChoice::ViewProgress => self.view_progress(),
            MenuChoice::DeleteSkill => self.delete_skill(),
            MenuChoice::Exit => return Ok(Step::Quit),
        };

        match result {
            Ok(step) => Ok(step),
            // the terminal itself is gone: nothing left to report to
            Err(AppError::Io(e)) => Err(AppError::Io(e)),
            Err(e) => {
                self.say(Level::Error, e)?;
                Ok(Step::Continue)
            }
        }
    }

    fn add_skill(&mut self) -> AppResult<Step> {
        let Some(name) = self.prompt("Skill Name")? else {
            return Ok(Step::Quit);
        };
        let Some(category) = self.prompt("Category (Tech, Creative, etc.)")? else {
            return Ok(Step::Quit);
        };
        let Some(raw_target) = self.prompt("Target Hours")? else {
            return Ok(Step::Quit);
        };

        let target_hours = match parse_non_negative("target hours", &raw_target) {
            Ok(v) => v,
            Err(e) => {
                self.say(Level::Error, format!("Invalid input for target hours. {}", e))?;
                return Ok(Step::Continue);
            }
        };

        let category = match category.trim() {
            "" => self.cfg.default_category.clone(),
            c => c.to_string(),
        };

        let skill = AddLogic::apply(self.pool, Skill::new(name.trim(), category, target_hours))?;

        self.say(
            Level::Success,
            format!(
                "Skill '{}' added with id {}.",
                skill.name,
                skill.id.unwrap_or_default()
            ),
        )?;
        Ok(Step::Continue)
    }

    fn log_session(&mut self) -> AppResult<Step> {
        const NUMBERS_REQUIRED: &str = "Invalid input. Please enter numbers where required.";

        let Some(raw_id) = self.prompt("Skill ID")? else {
            return Ok(Step::Quit);
        };
        let skill_id = match parse_int("skill id", &raw_id) {
            Ok(v) => v,
            Err(e) => {
                self.say(Level::Error, format!("{} {}", NUMBERS_REQUIRED, e))?;
                return Ok(Step::Continue);
            }
        };

        let Some(raw_duration) = self.prompt("Duration (in minutes)")? else {
            return Ok(Step::Quit);
        };
        let duration = match parse_non_negative("duration", &raw_duration) {
            Ok(v) => v,
            Err(e) => {
                self.say(Level::Error, format!("{} {}", NUMBERS_REQUIRED, e))?;
                return Ok(Step::Continue);
            }
        };

        let Some(notes) = self.prompt("Notes")? else {
            return Ok(Step::Quit);
        };
        let Some(raw_date) = self.prompt("Date (YYYY-MM-DD)")? else {
            return Ok(Step::Quit);
        };
        let date = resolve_date_input(&raw_date)?;

        let session = PracticeLogic::apply(
            self.pool,
            PracticeSession::new(skill_id, duration, notes.trim(), date),
        )?;

        self.say(
            Level::Success,
            format!(
                "Logged {} min for skill #{} on {} (session #{}).",
                session.duration_minutes,
                session.skill_id,
                session.date_str(),
                session.id.unwrap_or_default()
            ),
        )?;
        Ok(Step::Continue)
    }

    fn view_progress(&mut self) -> AppResult<Step> {
        let rows = ProgressLogic::load(self.pool, None)?;

        if rows.is_empty() {
            self.say(Level::Info, "No skills recorded yet.")?;
        }
        for p in &rows {
            writeln!(self.output, "{}", ProgressLogic::line(p))?;
        }

        Ok(Step::Continue)
    }

    fn delete_skill(&mut self) -> AppResult<Step> {
        let Some(raw_id) = self.prompt("Enter Skill ID to delete")? else {
            return Ok(Step::Quit);
        };
        let skill_id = match parse_int("skill id", &raw_id) {
            Ok(v) => v,
            Err(_) => {
                self.say(Level::Error, "Invalid skill ID.")?;
                return Ok(Step::Continue);
            }
        };

        let outcome = DeleteLogic::apply(self.pool, skill_id)?;
        let level = if outcome.skill_deleted {
            Level::Success
        } else {
            Level::Info
        };
        self.say(level, DeleteLogic::describe(skill_id, &outcome))?;

        Ok(Step::Continue)
    }

    /// Print `label: ` and read one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say<T: std::fmt::Display>(&mut self, level: Level, msg: T) -> AppResult<()> {
        writeln!(self.output, "{}", styled(level, msg))?;
        Ok(())
    }
}

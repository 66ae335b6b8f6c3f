use crate::config::Config;
use crate::models::{PracticeSession, Skill};
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

const NOTES_WIDTH: usize = 40;

pub struct ListLogic;

impl ListLogic {
    pub fn skills_table(skills: &[Skill], cfg: &Config) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("Skill", 10),
            Column::new("Category", 8),
            Column::new("Target", 0),
        ])
        .with_separator(cfg.separator_char.chars().next().unwrap_or('-'));

        for s in skills {
            table.add_row(vec![
                s.id.map(|id| id.to_string()).unwrap_or_default(),
                s.name.clone(),
                s.category.clone(),
                format!("{} h", s.target_hours),
            ]);
        }

        table.render()
    }

    /// Sessions table. Long notes are wrapped onto continuation rows.
    pub fn sessions_table(sessions: &[PracticeSession], cfg: &Config) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("Skill", 5),
            Column::new("Date", 10),
            Column::new("Duration", 0),
            Column::new("Notes", 0),
        ])
        .with_separator(cfg.separator_char.chars().next().unwrap_or('-'));

        for s in sessions {
            let wrapped = textwrap::wrap(&s.notes, NOTES_WIDTH);
            let mut notes = wrapped.iter();

            table.add_row(vec![
                s.id.map(|id| id.to_string()).unwrap_or_default(),
                s.skill_id.to_string(),
                s.date_str(),
                mins2readable(s.duration_minutes, false, false),
                notes.next().map(|l| l.to_string()).unwrap_or_default(),
            ]);

            for cont in notes {
                table.add_row(vec![
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    cont.to_string(),
                ]);
            }
        }

        table.render()
    }
}

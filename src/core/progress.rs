use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_progress;
use crate::errors::AppResult;
use crate::models::SkillProgress;
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::formatting::progress_bar;
use crate::utils::table::{Column, Table};

pub struct ProgressLogic;

impl ProgressLogic {
    /// Progress of every skill, optionally restricted to one category
    /// (case-insensitive match).
    pub fn load(pool: &mut DbPool, category: Option<&str>) -> AppResult<Vec<SkillProgress>> {
        let mut rows = load_progress(&pool.conn)?;

        if let Some(cat) = category {
            rows.retain(|p| p.category.eq_ignore_ascii_case(cat.trim()));
        }

        Ok(rows)
    }

    /// Single summary line, as shown by the interactive menu.
    pub fn line(p: &SkillProgress) -> String {
        format!(
            "#{} Skill: {}, Target: {} hrs, Practiced: {:.2} hrs, Progress: {:.2}%",
            p.skill_id, p.name, p.target_hours, p.total_hours, p.progress_pct
        )
    }

    pub fn table(rows: &[SkillProgress], cfg: &Config) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("Skill", 10),
            Column::new("Category", 8),
            Column::new("Sessions", 0),
            Column::new("Target", 0),
            Column::new("Practiced", 0),
            Column::new("Progress", 0),
        ])
        .with_separator(cfg.separator_char.chars().next().unwrap_or('-'));

        for p in rows {
            table.add_row(vec![
                p.skill_id.to_string(),
                p.name.clone(),
                p.category.clone(),
                p.session_count.to_string(),
                format!("{} h", p.target_hours),
                format!("{:.2} h", p.total_hours),
                format!("{:.2}%", p.progress_pct),
            ]);
        }

        let rendered = table.render();
        let mut lines = rendered.lines();
        let mut out = String::new();

        // header + separator, then append a colored bar to each data row
        for _ in 0..2 {
            if let Some(l) = lines.next() {
                out.push_str(l);
                out.push('\n');
            }
        }
        for (line, p) in lines.zip(rows) {
            out.push_str(&format!(
                "{}{}{}{}\n",
                line,
                color_for_progress(p.progress_pct),
                progress_bar(p.progress_pct, cfg.bar_width),
                RESET
            ));
        }

        out
    }
}

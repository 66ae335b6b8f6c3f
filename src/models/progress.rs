use crate::utils::formatting::round2;

/// Aggregated practice time of one skill compared to its target.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillProgress {
    pub skill_id: i64,
    pub name: String,
    pub category: String,
    pub target_hours: i64,
    pub session_count: i64,
    /// Practiced hours, rounded to 2 decimals.
    pub total_hours: f64,
    /// practiced / target * 100, rounded to 2 decimals; 0 when target is 0.
    pub progress_pct: f64,
}

impl SkillProgress {
    /// Build the progress record from raw practiced hours.
    /// Both figures are derived from the unrounded hours, then rounded.
    pub fn from_hours(
        skill_id: i64,
        name: String,
        category: String,
        target_hours: i64,
        session_count: i64,
        practiced_hours: f64,
    ) -> Self {
        let progress_pct = if target_hours == 0 {
            0.0
        } else {
            round2(practiced_hours / target_hours as f64 * 100.0)
        };

        Self {
            skill_id,
            name,
            category,
            target_hours,
            session_count,
            total_hours: round2(practiced_hours),
            progress_pct,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.target_hours > 0 && self.progress_pct >= 100.0
    }
}

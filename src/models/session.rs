use chrono::NaiveDate;
use std::fmt;

/// Date of a session as stored in `sessions.date`.
///
/// New sessions are always written as `YYYY-MM-DD`, but databases written by
/// older versions may hold free text (or NULL); those values are kept
/// verbatim so the row stays readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDate {
    Day(NaiveDate),
    Unparsed(String),
}

impl SessionDate {
    pub fn from_db(raw: Option<String>) -> Self {
        let raw = raw.unwrap_or_default();
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(d) => SessionDate::Day(d),
            Err(_) => SessionDate::Unparsed(raw),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            SessionDate::Day(d) => Some(*d),
            SessionDate::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for SessionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionDate::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            SessionDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// One block of practice logged against a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    pub id: Option<i64>,       // ⇔ sessions.id (assigned on insert)
    pub skill_id: i64,         // ⇔ sessions.skill_id
    pub duration_minutes: i64, // ⇔ sessions.duration_minutes
    pub notes: String,         // ⇔ sessions.notes
    pub date: SessionDate,     // ⇔ sessions.date (TEXT "YYYY-MM-DD")
}

impl PracticeSession {
    pub fn new(
        skill_id: i64,
        duration_minutes: i64,
        notes: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            skill_id,
            duration_minutes,
            notes: notes.into(),
            date: SessionDate::Day(date),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.to_string()
    }
}

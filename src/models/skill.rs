/// A skill to practice, with the number of hours the user aims for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Option<i64>,   // ⇔ skills.id (assigned on insert)
    pub name: String,      // ⇔ skills.name
    pub category: String,  // ⇔ skills.category (free text: Tech, Creative, ...)
    pub target_hours: i64, // ⇔ skills.target_hours
}

impl Skill {
    /// Build a skill that has not been persisted yet.
    pub fn new(name: impl Into<String>, category: impl Into<String>, target_hours: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            target_hours,
        }
    }
}

pub mod progress;
pub mod session;
pub mod skill;

pub use progress::SkillProgress;
pub use session::{PracticeSession, SessionDate};
pub use skill::Skill;

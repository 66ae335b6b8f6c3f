//! SkillVault main entrypoint.

use skillvault::run;
use skillvault::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

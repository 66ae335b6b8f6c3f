use clap::{Parser, Subcommand};

/// Command-line interface definition for SkillVault
/// CLI application to track skills and practice time with SQLite
#[derive(Parser)]
#[command(
    name = "skillvault",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple skill-practice tracker: log practice sessions and measure progress against target hours using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive menu is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu
    Menu,

    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Inspect or maintain the database
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new skill
    Add {
        /// Skill name
        name: String,

        /// Category (Tech, Creative, ...)
        category: String,

        /// Target hours (integer)
        #[arg(allow_negative_numbers = true)]
        target_hours: String,
    },

    /// Log a practice session for a skill
    Practice {
        /// Skill id (see `list`)
        #[arg(allow_negative_numbers = true)]
        skill_id: String,

        /// Duration in minutes
        #[arg(allow_negative_numbers = true)]
        minutes: String,

        /// Free text notes
        #[arg(long, short, default_value = "")]
        notes: String,

        /// Date of the session (YYYY-MM-DD, default: today)
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show practiced hours against target for every skill
    Progress {
        #[arg(long, short, help = "Only show skills of this category")]
        category: Option<String>,
    },

    /// List skills, or practice sessions with --sessions
    List {
        #[arg(long = "sessions", help = "List practice sessions instead of skills")]
        sessions: bool,

        #[arg(
            long = "skill",
            requires = "sessions",
            help = "Only sessions of this skill id (with --sessions)"
        )]
        skill: Option<i64>,
    },

    /// Delete a skill and all of its practice sessions
    Del {
        /// Skill id to delete
        #[arg(allow_negative_numbers = true)]
        skill_id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

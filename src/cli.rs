use clap::{ArgAction, Parser, Subcommand};

use crate::planner::constants::{
    DEFAULT_FIRST_INTAKE_MINUTES, DEFAULT_INTAKE_INTERVAL_MINUTES, DEFAULT_TARGET_CARBS_PER_HOUR,
};

/// GI Diary: plan and track carbohydrate intake for endurance sessions.
#[derive(Parser, Debug)]
#[command(name = "gi_diary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the session history JSON file.
    #[arg(short, long, default_value = "sessions.json", global = true)]
    pub sessions: String,

    /// Path to the fuel product catalog CSV file.
    #[arg(short, long, default_value = "fuel_products.csv", global = true)]
    pub catalog: String,

    /// Verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show overall and weekly session progress (default).
    Progress,

    /// Generate a fuel plan from the catalog and save it as a new session.
    Plan {
        /// Session name.
        #[arg(long, default_value = "Session")]
        name: String,

        /// Session duration in minutes.
        #[arg(short, long)]
        duration: u32,

        /// Target intake in grams per hour.
        #[arg(short, long, default_value_t = DEFAULT_TARGET_CARBS_PER_HOUR)]
        target: f64,

        /// Minutes between intakes.
        #[arg(short, long, default_value_t = DEFAULT_INTAKE_INTERVAL_MINUTES)]
        interval: u32,

        /// Minute of the first intake.
        #[arg(long, default_value_t = DEFAULT_FIRST_INTAKE_MINUTES)]
        first: u32,

        /// Session start as an RFC 3339 timestamp (defaults to now).
        #[arg(long)]
        start: Option<String>,

        /// Athlete contact email.
        #[arg(long)]
        email: Option<String>,
    },

    /// Enter a fuel plan interactively and save it as a new session.
    Build {
        /// Session name.
        #[arg(long, default_value = "Session")]
        name: String,

        /// Session duration in minutes (prompted when omitted).
        #[arg(short, long)]
        duration: Option<u32>,

        /// Target intake in grams per hour.
        #[arg(short, long, default_value_t = DEFAULT_TARGET_CARBS_PER_HOUR)]
        target: f64,

        /// Session start as an RFC 3339 timestamp (defaults to now).
        #[arg(long)]
        start: Option<String>,
    },

    /// Show a session's plan, targets and intake log.
    Summary {
        /// Session id (defaults to the latest active session).
        #[arg(long)]
        id: Option<String>,
    },

    /// Show the next intake card.
    Next {
        /// Session id (defaults to the latest active session).
        #[arg(long)]
        id: Option<String>,

        /// Elapsed minutes (defaults to time since session start).
        #[arg(short, long)]
        elapsed: Option<u32>,
    },

    /// Mark a plan item as taken.
    Take {
        /// Index of the plan item, as shown by `summary`.
        index: usize,

        /// Session id (defaults to the latest active session).
        #[arg(long)]
        id: Option<String>,
    },

    /// Mark a session as completed.
    Complete {
        /// Session id (defaults to the latest active session).
        #[arg(long)]
        id: Option<String>,
    },

    /// Grams needed for a session at a target rate.
    Required {
        /// Duration in minutes.
        #[arg(short, long)]
        duration: f64,

        /// Target intake in grams per hour.
        #[arg(short, long)]
        target: f64,
    },

    /// Intake rate for a total over a duration.
    Rate {
        /// Total carbohydrate grams.
        #[arg(long)]
        carbs: f64,

        /// Duration in minutes.
        #[arg(short, long)]
        duration: f64,
    },

    /// List the fuel product catalog.
    Products,
}

impl Default for Command {
    fn default() -> Self {
        Command::Progress
    }
}

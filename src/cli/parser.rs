use crate::export::ExportFormat;
use crate::ingest::InputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for devfest-schedule
/// Conference schedule viewer: days, tracks, timeline geometry and agenda
#[derive(Parser)]
#[command(
    name = "devfest-schedule",
    version = env!("CARGO_PKG_VERSION"),
    about = "Lay out a multi-track conference schedule: days, tracks, timeline and agenda",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Schedule file (falls back to `default_input` from the config)
    #[arg(global = true, long = "input", short = 'i')]
    pub input: Option<String>,

    /// Layout of the schedule file
    #[arg(global = true, long = "input-format", value_enum)]
    pub input_format: Option<InputFormat>,

    /// Speaker wall export, joined by speaker id (sessionize format only)
    #[arg(global = true, long = "speakers")]
    pub speakers: Option<String>,

    /// Fixed UTC offset for the layout, e.g. +02:00 (default: system local time)
    #[arg(global = true, long = "offset", allow_hyphen_values = true)]
    pub offset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Schedule(ScheduleCommands),

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write a configuration file with default values
        #[arg(long = "init", help = "Write a configuration file with default values")]
        init_config: bool,

        /// Overwrite an existing configuration file (with --init)
        #[arg(long = "force", requires = "init_config")]
        force: bool,
    },
}

/// Commands that read a schedule
#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// List the conference days
    Days,

    /// Show one day by track: general sessions, then each stage
    Day {
        /// Date (YYYY-MM-DD); defaults to the first conference day
        date: Option<String>,
    },

    /// Show the timeline geometry of one day (hour markers and block positions)
    Timeline {
        /// Date (YYYY-MM-DD); defaults to the first conference day
        date: Option<String>,
    },

    /// Show one day as a single list ordered by start time
    Agenda {
        /// Date (YYYY-MM-DD); defaults to the first conference day
        date: Option<String>,
    },

    /// Show the details of one session
    Session {
        /// Session slug
        slug: String,
    },

    /// Check the schedule for data problems
    Validate,

    /// Export day layouts to a file
    Export {
        /// Export format: csv or json
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "file")]
        file: String,

        /// Only export this day (YYYY-MM-DD); all days when omitted
        #[arg(long = "date")]
        date: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long = "force")]
        force: bool,
    },
}

//! devfest-schedule library root.
//! Exposes the CLI parser, the layout engine and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::commands::{self, Context};
use crate::cli::parser::{Cli, Commands, ScheduleCommands};
use crate::config::Config;
use crate::core::logic::LayoutOptions;
use crate::errors::{AppError, AppResult};
use crate::models::program::Program;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_offset;
use chrono::{Local, TimeZone};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Central command dispatcher. The config file is read once, and only for
/// commands that lay out a schedule.
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    let cfg_path = config_path(cli);

    match &cli.command {
        Commands::Config { .. } => commands::config::handle(&cli.command, &cfg_path),
        Commands::Schedule(cmd) => {
            let cfg = Config::load(Some(cfg_path.as_path()))?;
            let program = load_input(cli, &cfg)?;
            let opts = LayoutOptions::from(&cfg);

            // --offset wins over the config; neither means system local time.
            match cli.offset.as_deref().or(cfg.utc_offset.as_deref()) {
                Some(raw) => {
                    let tz = parse_offset(raw)?;
                    debug!(offset = %tz, "using fixed offset");
                    dispatch_in(cmd, Context { program: &program, tz, opts })
                }
                None => dispatch_in(cmd, Context { program: &program, tz: Local, opts }),
            }
        }
    }
}

fn dispatch_in<Tz>(cmd: &ScheduleCommands, ctx: Context<'_, Tz>) -> AppResult<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match cmd {
        ScheduleCommands::Days => commands::days::handle(&ctx),
        ScheduleCommands::Day { .. } => commands::day::handle(cmd, &ctx),
        ScheduleCommands::Timeline { .. } => commands::timeline::handle(cmd, &ctx),
        ScheduleCommands::Agenda { .. } => commands::agenda::handle(cmd, &ctx),
        ScheduleCommands::Session { .. } => commands::session::handle(cmd, &ctx),
        ScheduleCommands::Validate => commands::validate::handle(&ctx),
        ScheduleCommands::Export { .. } => commands::export::handle(cmd, &ctx),
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Schedule named by `--input` or the config, read in the selected format.
fn load_input(cli: &Cli, cfg: &Config) -> AppResult<Program> {
    let input = cli
        .input
        .as_deref()
        .or(cfg.default_input.as_deref())
        .map(expand_tilde)
        .ok_or(AppError::MissingInput)?;
    let speakers = cli
        .speakers
        .as_deref()
        .or(cfg.speakers_file.as_deref())
        .map(expand_tilde);
    let format = cli.input_format.unwrap_or(cfg.input_format);

    ingest::load_program(&input, format, speakers.as_deref())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::init();

    let cli = Cli::parse();
    dispatch(&cli)
}

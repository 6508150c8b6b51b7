//! CLI argument definitions for the planning desk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "planner",
    version,
    about = "Venue planning desk - guest imports, events, schedules, and menus",
    long_about = "Back-office tools for a venue planning desk.\n\n\
                  Import pasted guest exports, keep the breakfast checklist,\n\
                  browse the event catalog, and build schedules, F&B timelines,\n\
                  and printable menus."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a pasted guest export (CSV/TSV) into normalized records.
    Import(ImportArgs),

    /// Show the breakfast-checklist directory from the local store.
    Guests(GuestsArgs),

    /// Toggle a guest's breakfast-checked state.
    Check(CheckArgs),

    /// List events from a catalog file, with search and filters.
    Events(EventsArgs),

    /// Show the full detail card for one event.
    Event(EventArgs),

    /// Render the weekly room-by-day schedule grid.
    Schedule(ScheduleArgs),

    /// Render the Food & Beverage timeline for one day.
    Fnb(FnbArgs),

    /// Show the quest log.
    Quests(QuestsArgs),

    /// Mark a quest complete.
    QuestComplete(QuestIdArgs),

    /// Remove a quest from the log.
    QuestAbandon(QuestIdArgs),

    /// Compose a printable menu from a menu catalog.
    Menu(MenuArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Pasted-text file to import, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format for the parsed records.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ExportFormatArg,

    /// Persist the accepted list to the local store (replaces the stored
    /// list wholesale).
    #[arg(long = "save")]
    pub save: bool,

    /// Directory for the local store.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GuestsArgs {
    /// Case-insensitive search across all guest fields.
    #[arg(long = "query", short = 'q')]
    pub query: Option<String>,

    /// Filter by meal-plan code (e.g. BB, RO).
    #[arg(long = "plan")]
    pub plan: Option<String>,

    /// Filter by checked status.
    #[arg(long = "status", value_enum, default_value = "all")]
    pub status: StatusArg,

    /// Directory for the local store.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show the detail block for a single guest key instead of the table.
    #[arg(long = "detail", value_name = "KEY")]
    pub detail: Option<String>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Guest key as shown by `guests` (room|name|arrival).
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Uncheck instead of check.
    #[arg(long = "off")]
    pub off: bool,

    /// Directory for the local store.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct EventsArgs {
    /// Event catalog JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Case-insensitive search on event or organizer name.
    #[arg(long = "search", short = 's')]
    pub search: Option<String>,

    /// Filter by room.
    #[arg(long = "room")]
    pub room: Option<String>,

    /// Filter by day of week.
    #[arg(long = "day")]
    pub day: Option<String>,
}

#[derive(Parser)]
pub struct EventArgs {
    /// Event catalog JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Event id.
    #[arg(value_name = "ID")]
    pub id: i64,
}

#[derive(Parser)]
pub struct ScheduleArgs {
    /// Event catalog JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct FnbArgs {
    /// Event catalog JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Day of week to show (default: the first day in the catalog).
    #[arg(long = "day")]
    pub day: Option<String>,
}

#[derive(Parser)]
pub struct QuestsArgs {
    /// Directory for the local store.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seed the store from a reminders JSON file when it is empty.
    #[arg(long = "seed", value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Show the detail block for one quest id.
    #[arg(long = "detail", value_name = "ID")]
    pub detail: Option<String>,
}

#[derive(Parser)]
pub struct QuestIdArgs {
    /// Quest id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Directory for the local store.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MenuArgs {
    /// Menu catalog JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Sandwich item ids to include.
    #[arg(long = "sandwich", value_name = "ID")]
    pub sandwiches: Vec<String>,

    /// Soup item ids to include.
    #[arg(long = "soup", value_name = "ID")]
    pub soups: Vec<String>,

    /// Dessert item ids to include.
    #[arg(long = "dessert", value_name = "ID")]
    pub desserts: Vec<String>,

    /// Menu title line.
    #[arg(long = "title", default_value = "Lunch Menu – Saturday")]
    pub title: String,

    /// Menu meta line under the title.
    #[arg(long = "meta", default_value = "Conference & Events")]
    pub meta: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    All,
    Checked,
    NotChecked,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

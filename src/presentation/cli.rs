//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --data-dir, --no-latency) are inherited by all subcommands
//! - Dates and months are parsed here, so a malformed value never reaches a command

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, Config};
use crate::domain::value_objects::{
    AnimalKind, Crop, DiaryCategory, EventKind, GreenhouseCrop, GreenhouseKind, HarvestUnit,
    Priority, YearMonth,
};
use crate::domain::services::finance::{DEFAULT_SEED_PRICE_PER_KG, DEFAULT_SEED_RATE_KG_PER_HA};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// farmbook - local-first farm record keeper
#[derive(Parser, Debug)]
#[command(name = "farmbook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'farmbook' without arguments for the farm dashboard.")]
pub struct Cli {
    /// Emit NDJSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding farmbook.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Answer mocked service calls immediately
    #[arg(long, global = true)]
    pub no_latency: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply flag overrides on top of file and environment configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if self.no_latency {
            config.services.latency_ms = Some(0);
        }
        match self.color {
            Some(ColorWhen::Always) => config.output.color = ColorMode::Always,
            Some(ColorWhen::Never) => config.output.color = ColorMode::Never,
            Some(ColorWhen::Auto) | None => {}
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage fields (open-ground plots)
    Field {
        #[command(subcommand)]
        action: FieldCommand,
    },

    /// Manage livestock groups
    Animal {
        #[command(subcommand)]
        action: AnimalCommand,
    },

    /// Manage greenhouses
    Greenhouse {
        #[command(subcommand)]
        action: GreenhouseCommand,
    },

    /// Work diary
    Diary {
        #[command(subcommand)]
        action: DiaryCommand,
    },

    /// Planned events shown on the calendar
    Event {
        #[command(subcommand)]
        action: EventCommand,
    },

    /// Month calendar of planned events
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<YearMonth>,

        /// Move the shown month by N months (negative goes back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Small grid with three upcoming events
        #[arg(long)]
        compact: bool,

        #[command(subcommand)]
        action: Option<CalendarCommand>,
    },

    /// Current weather, forecast and farming analysis
    Weather {
        /// Forecast length in days
        #[arg(long)]
        days: Option<u32>,

        /// Location name; defaults to services.location
        #[arg(long)]
        location: Option<String>,
    },

    /// Agronomic recommendations and yield prediction for a field
    Advise {
        /// Field id; the first field when omitted
        #[arg(long)]
        field: Option<String>,

        /// Weather score applied to the simple yield estimate (1.0 = normal)
        #[arg(long, default_value_t = 1.0)]
        weather_factor: f64,
    },

    /// Farm totals, recent activity and upcoming events
    Dashboard,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Sign in (mocked)
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account (mocked)
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        farm_name: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Inspect or import the local store
    Store {
        #[command(subcommand)]
        action: StoreCommand,
    },
}

/// Record id argument
#[derive(Args, Debug, Clone)]
pub struct IdArg {
    /// Record id (see `list`)
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Record id (see `list`)
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExpenseArgs {
    /// Record id (see `list`)
    pub id: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub amount: f64,

    #[arg(long)]
    pub quantity: Option<f64>,

    #[arg(long)]
    pub unit: Option<String>,

    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args, Debug, Clone)]
pub struct HarvestArgs {
    /// Record id (see `list`)
    pub id: String,

    #[arg(long)]
    pub quantity: f64,

    #[arg(long, value_enum, default_value_t = HarvestUnit::Kg)]
    pub unit: HarvestUnit,

    /// Money earned from the harvest
    #[arg(long)]
    pub income: f64,

    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args, Debug, Clone)]
pub struct NoteArgs {
    /// Record id (see `list`)
    pub id: String,

    /// Note text
    pub content: String,
}

#[derive(Subcommand, Debug)]
pub enum FieldCommand {
    /// Add a field
    Add {
        name: String,

        /// Area in hectares
        #[arg(long)]
        area: f64,

        #[arg(long, value_enum)]
        crop: Crop,

        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List fields with their money summary
    List,
    /// Show one field with its ledgers
    Show(IdArg),
    /// Delete a field
    Delete(DeleteArgs),
    /// Book an expense
    AddExpense(ExpenseArgs),
    /// Book a harvest
    AddHarvest(HarvestArgs),
    /// Attach a note
    AddNote(NoteArgs),
    /// Compute seed need and cost, and book it as an expense
    Seed {
        /// Record id (see `list`)
        id: String,

        /// Seeding rate in kg per hectare
        #[arg(long, default_value_t = DEFAULT_SEED_RATE_KG_PER_HA)]
        rate: f64,

        /// Seed price per kg
        #[arg(long, default_value_t = DEFAULT_SEED_PRICE_PER_KG)]
        price: f64,

        /// Only print the calculation
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnimalCommand {
    /// Add a livestock group
    Add {
        name: String,

        #[arg(long, value_enum)]
        kind: AnimalKind,

        /// Head count
        #[arg(long, default_value_t = 1)]
        count: u32,

        #[arg(long, default_value = "")]
        notes: String,
    },
    List,
    Show(IdArg),
    Delete(DeleteArgs),
    AddExpense(ExpenseArgs),
    /// Book income from products or sales
    AddIncome {
        /// Record id (see `list`)
        id: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        amount: f64,

        #[arg(long, default_value = "")]
        notes: String,
    },
    AddNote(NoteArgs),
}

#[derive(Subcommand, Debug)]
pub enum GreenhouseCommand {
    /// Add a greenhouse
    Add {
        name: String,

        /// Area in square meters
        #[arg(long)]
        area: f64,

        #[arg(long, value_enum)]
        kind: GreenhouseKind,

        #[arg(long, value_enum)]
        crop: GreenhouseCrop,

        #[arg(long, default_value = "")]
        notes: String,
    },
    List,
    Show(IdArg),
    Delete(DeleteArgs),
    AddExpense(ExpenseArgs),
    AddHarvest(HarvestArgs),
    AddNote(NoteArgs),
}

/// Diary filters shared by `list` and `stats`
#[derive(Args, Debug, Clone, Default)]
pub struct DiaryFilterArgs {
    #[arg(long, value_enum)]
    pub category: Option<DiaryCategory>,

    /// Field id
    #[arg(long)]
    pub field: Option<String>,

    /// First date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum DiaryCommand {
    /// Record work done or observed
    Add {
        title: String,

        #[arg(long, value_enum, default_value_t = DiaryCategory::Work)]
        category: DiaryCategory,

        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        description: String,

        /// Field id the work was done on
        #[arg(long)]
        field: Option<String>,

        #[arg(long, default_value_t = 0.0)]
        hours: f64,

        #[arg(long, default_value_t = 0)]
        workers: u32,

        #[arg(long, default_value_t = 0.0)]
        cost: f64,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// List entries, newest first
    List(DiaryFilterArgs),
    Delete(DeleteArgs),
    /// Hours, cost, workers and per-category counts
    Stats(DiaryFilterArgs),
    /// Known diary categories
    Categories,
}

#[derive(Subcommand, Debug)]
pub enum EventCommand {
    /// Plan an event
    Add {
        title: String,

        #[arg(long)]
        date: NaiveDate,

        #[arg(long, value_enum, default_value_t = EventKind::Work)]
        kind: EventKind,

        #[arg(long, value_enum)]
        priority: Option<Priority>,

        /// Where it happens, usually a field name
        #[arg(long)]
        field: Option<String>,

        /// Planned duration in hours
        #[arg(long)]
        duration: Option<f64>,
    },
    /// List events by date
    List {
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<YearMonth>,

        /// Only today and later
        #[arg(long)]
        upcoming: bool,
    },
    Delete(DeleteArgs),
}

#[derive(Subcommand, Debug)]
pub enum CalendarCommand {
    /// Every event of one day
    Day { date: NaiveDate },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    Show,
    /// Set language, currency or notifications
    Set { key: String, value: String },
}

#[derive(Subcommand, Debug)]
pub enum StoreCommand {
    /// Store location, schema version and key sizes
    Info,
    /// Import a browser local-storage dump (JSON object of strings)
    Import {
        file: PathBuf,

        /// Replace keys that already hold data
        #[arg(long)]
        overwrite: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["farmbook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "farmbook",
            "field",
            "list",
            "--json",
            "--data-dir",
            "/tmp/farm",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/farm")));
    }

    #[test]
    fn test_cli_parse_field_add() {
        let cli = Cli::try_parse_from([
            "farmbook", "field", "add", "North", "--area", "12.5", "--crop", "wheat",
        ])
        .unwrap();
        if let Some(Commands::Field {
            action: FieldCommand::Add { name, area, crop, notes },
        }) = cli.command
        {
            assert_eq!(name, "North");
            assert_eq!(area, 12.5);
            assert_eq!(crop, Crop::Wheat);
            assert!(notes.is_empty());
        } else {
            panic!("Expected field add");
        }
    }

    #[test]
    fn test_cli_parse_seed_defaults() {
        let cli = Cli::try_parse_from(["farmbook", "field", "seed", "f1"]).unwrap();
        if let Some(Commands::Field {
            action: FieldCommand::Seed { rate, price, dry_run, .. },
        }) = cli.command
        {
            assert_eq!(rate, 200.0);
            assert_eq!(price, 50.0);
            assert!(!dry_run);
        } else {
            panic!("Expected field seed");
        }
    }

    #[test]
    fn test_cli_parse_calendar_month_and_negative_offset() {
        let cli = Cli::try_parse_from([
            "farmbook", "calendar", "--month", "2024-03", "--offset", "-2",
        ])
        .unwrap();
        if let Some(Commands::Calendar { month, offset, compact, action }) = cli.command {
            assert_eq!(month, YearMonth::new(2024, 3));
            assert_eq!(offset, -2);
            assert!(!compact);
            assert!(action.is_none());
        } else {
            panic!("Expected calendar");
        }
    }

    #[test]
    fn test_cli_parse_calendar_day() {
        let cli = Cli::try_parse_from(["farmbook", "calendar", "day", "2024-03-15"]).unwrap();
        if let Some(Commands::Calendar {
            action: Some(CalendarCommand::Day { date }),
            ..
        }) = cli.command
        {
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        } else {
            panic!("Expected calendar day");
        }
    }

    #[test]
    fn test_cli_rejects_malformed_month() {
        assert!(Cli::try_parse_from(["farmbook", "calendar", "--month", "2024-13"]).is_err());
        assert!(Cli::try_parse_from(["farmbook", "event", "add", "Sow", "--date", "2024-02-30"])
            .is_err());
    }

    #[test]
    fn test_cli_parse_diary_stats_filters() {
        let cli = Cli::try_parse_from([
            "farmbook",
            "diary",
            "stats",
            "--category",
            "problem",
            "--from",
            "2024-03-01",
        ])
        .unwrap();
        if let Some(Commands::Diary {
            action: DiaryCommand::Stats(filter),
        }) = cli.command
        {
            assert_eq!(filter.category, Some(DiaryCategory::Problem));
            assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 3, 1));
            assert!(filter.to.is_none());
        } else {
            panic!("Expected diary stats");
        }
    }

    #[test]
    fn test_cli_delete_yes_flag() {
        let cli = Cli::try_parse_from(["farmbook", "event", "delete", "e1", "-y"]).unwrap();
        if let Some(Commands::Event {
            action: EventCommand::Delete(args),
        }) = cli.command
        {
            assert_eq!(args.id, "e1");
            assert!(args.yes);
        } else {
            panic!("Expected event delete");
        }
    }

    #[test]
    fn test_cli_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "farmbook",
            "--no-latency",
            "--color",
            "never",
            "--data-dir",
            "/srv/farm",
            "dashboard",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.services.latency_ms, Some(0));
        assert_eq!(config.output.color, ColorMode::Never);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/farm")));
    }
}

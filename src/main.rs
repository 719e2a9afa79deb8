//! farmbook CLI - local-first farm record keeper
//!
//! Usage: farmbook [COMMAND]
//!
//! Commands:
//!   field, animal, greenhouse   Records with expenses, harvests and notes
//!   diary                       Work diary with filters and statistics
//!   event, calendar             Planned events and the month calendar
//!   weather, advise             Mocked weather and advisory services
//!   dashboard                   Farm totals (the default)

use clap::Parser;
use log::LevelFilter;

use farmbook::config::Config;
use farmbook::domain::ports::Registration;
use farmbook::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::GlobalArgs;
use ui::error::print_error;
use ui::output::print_config_warnings;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    if let Err(e) = run(cli) {
        print_error(&e, json);
        std::process::exit(1);
    }
}

/// `-v` info, `-vv` debug, `-vvv` trace; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            let level = match verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };
            builder.filter_level(level);
        }
    }
    let _ = builder.try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (mut config, warnings) = Config::load_or_default();
    cli.apply_overrides(&mut config);

    let args = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
    };
    print_config_warnings(&args.ui(&config), &warnings);

    let Some(command) = cli.command else {
        return commands::dashboard::cmd_dashboard(&config, args);
    };

    match command {
        Commands::Field { action } => commands::field::cmd_field(action, &config, args),
        Commands::Animal { action } => commands::animal::cmd_animal(action, &config, args),
        Commands::Greenhouse { action } => {
            commands::greenhouse::cmd_greenhouse(action, &config, args)
        }
        Commands::Diary { action } => commands::diary::cmd_diary(action, &config, args),
        Commands::Event { action } => commands::event::cmd_event(action, &config, args),
        Commands::Calendar {
            month,
            offset,
            compact,
            action,
        } => commands::calendar::cmd_calendar(month, offset, compact, action, &config, args),
        Commands::Weather { days, location } => {
            commands::weather::cmd_weather(days, location, &config, args)
        }
        Commands::Advise {
            field,
            weather_factor,
        } => commands::advise::cmd_advise(field, weather_factor, &config, args),
        Commands::Dashboard => commands::dashboard::cmd_dashboard(&config, args),
        Commands::Settings { action } => commands::account::cmd_settings(action, &config, args),
        Commands::Login { email, password } => {
            commands::account::cmd_login(&email, &password, &config, args)
        }
        Commands::Register {
            email,
            password,
            name,
            farm_name,
        } => commands::account::cmd_register(
            Registration {
                email,
                password,
                name,
                farm_name,
            },
            &config,
            args,
        ),
        Commands::Logout => commands::account::cmd_logout(&config, args),
        Commands::Whoami => commands::account::cmd_whoami(&config, args),
        Commands::Store { action } => commands::store::cmd_store(action, &config, args),
    }
}

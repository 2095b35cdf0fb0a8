use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, warn};

use aps_calc::catalog::{self, Domain, CRITERIA};
use aps_calc::config::Config;
use aps_calc::output;
use aps_calc::scoring;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_UNKNOWN_CRITERION: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk through the criteria interactively (default if no subcommand)
    Run,
    /// Score a set of criterion keys and print the result
    Score {
        /// Criterion keys, e.g. vte_high_risk persistent_lac
        keys: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Fail on keys that are not in the catalog instead of ignoring them
        #[arg(long)]
        strict: bool,
    },
    /// List the weighted criteria
    Criteria {
        /// Only list one domain (1-8)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=8))]
        domain: Option<u8>,

        /// Tab-separated output for scripts
        #[arg(long)]
        tsv: bool,
    },
    /// Write a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "aps-calc")]
#[command(
    about = "2023 ACR/EULAR antiphospholipid syndrome classification calculator",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/aps-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    // Init writes the config, so it must not require a readable one
    if let Commands::Init = command {
        if let Err(e) = aps_calc::config::run_init_wizard(cli.config) {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match aps_calc::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = aps_calc::telemetry::init(&config.log_level, cli.verbose) {
        eprintln!("Config error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    // Validate the built-in catalog at startup
    if let Err(errors) = scoring::validate_criteria(CRITERIA) {
        eprintln!("Criteria catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_RUNTIME);
    }
    debug!("catalog ok: {} criteria", CRITERIA.len());

    let code = match command {
        Commands::Run => run_wizard(config).await,
        Commands::Score { keys, json, strict } => score_keys(&keys, json, strict),
        Commands::Criteria { domain, tsv } => list_criteria(domain, tsv),
        Commands::Init => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

async fn run_wizard(config: Config) -> i32 {
    let print_report = config.print_report_on_exit;
    let theme = aps_calc::tui::resolve_theme(config.theme);
    let app = aps_calc::tui::App::new(config, theme);

    match aps_calc::tui::run_tui(app).await {
        Ok(Some(result)) => {
            if print_report {
                println!(
                    "{}",
                    output::format_score_report(&result, output::should_use_colors())
                );
            }
            EXIT_SUCCESS
        }
        Ok(None) => EXIT_SUCCESS,
        Err(e) => {
            error!("terminal failure: {:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_RUNTIME
        }
    }
}

fn score_keys(keys: &[String], json: bool, strict: bool) -> i32 {
    let result = match scoring::score_keys(keys, strict) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_UNKNOWN_CRITERION;
        }
    };
    for key in scoring::unknown_keys(keys) {
        warn!("ignoring unknown criterion: {}", key);
    }

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                return EXIT_RUNTIME;
            }
        }
    } else {
        println!(
            "{}",
            output::format_score_report(&result, output::should_use_colors())
        );
    }

    EXIT_SUCCESS
}

fn list_criteria(domain: Option<u8>, tsv: bool) -> i32 {
    let domains: Vec<Domain> = match domain {
        Some(n) => Domain::from_number(n).into_iter().collect(),
        None => Domain::ALL.to_vec(),
    };

    let criteria: Vec<&catalog::Criterion> = domains
        .into_iter()
        .flat_map(catalog::by_domain)
        .collect();

    if tsv {
        println!("{}", output::format_criteria_tsv(&criteria));
    } else {
        println!(
            "{}",
            output::format_criteria_table(&criteria, output::should_use_colors())
        );
    }

    EXIT_SUCCESS
}

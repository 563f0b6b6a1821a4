//! Tower defense theme tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate every theme under the default root
//! cargo run -p td_tools -- validate
//!
//! # Validate one theme without checking that images exist
//! cargo run -p td_tools -- --root assets/themes validate default --no-assets
//!
//! # Read a value the way the game does
//! cargo run -p td_tools -- query default "tower-buttons[]/position" --index 2
//!
//! # Show where everything ends up on screen
//! cargo run -p td_tools -- layout default --levels 6 --last-won 2
//! ```
//!
//! Results go to stdout, logs to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use td_theme::loader::ThemeLoader;
use td_tools::{inspect, resolve_config, validate, ToolResult};

#[derive(Parser)]
#[command(name = "td-theme")]
#[command(about = "Development tools for tower defense themes")]
#[command(version)]
struct Cli {
    /// Loader configuration file (RON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Themes root directory, overrides the configuration file
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate themes (all themes when none are named)
    Validate {
        /// Theme names
        names: Vec<String>,

        /// Do not fail on missing image and font files
        #[arg(long)]
        no_assets: bool,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the value at a theme path
    Query {
        /// Theme name
        name: String,

        /// Theme path, e.g. `buttons/upgrade/position`
        path: String,

        /// Index substituted for `[]` in the path
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Print the re-serialized theme
    Dump {
        /// Theme name
        name: String,
    },

    /// Print the HUD and level picker layout
    Layout {
        /// Theme name
        name: String,

        /// Number of levels in the picker
        #[arg(long, default_value = "5")]
        levels: usize,

        /// Index of the last level won
        #[arg(long)]
        last_won: Option<usize>,
    },

    /// List available themes
    List,
}

fn run(cli: Cli) -> ToolResult<()> {
    let verify_override = match &cli.command {
        Commands::Validate { no_assets: true, .. } => Some(false),
        // Inspection works on themes whose art is not in place yet.
        Commands::Query { .. } | Commands::Dump { .. } | Commands::Layout { .. } => Some(false),
        _ => None,
    };
    let config = resolve_config(cli.config.as_deref(), cli.root, verify_override)?;

    match cli.command {
        Commands::Validate { names, json, .. } => {
            tracing::info!("Validating themes in: {}", config.themes_root.display());
            let reports = validate::validate_themes(&config, &names)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            validate::summarize(&reports)?;
            tracing::info!("Validation passed for {} themes", reports.len());
        }
        Commands::Query { name, path, index } => {
            let theme = ThemeLoader::new(config).load(&name)?;
            println!("{}", inspect::query(&theme, &path, index)?);
        }
        Commands::Dump { name } => {
            let theme = ThemeLoader::new(config).load(&name)?;
            println!("{}", inspect::dump(&theme)?);
        }
        Commands::Layout {
            name,
            levels,
            last_won,
        } => {
            let theme = ThemeLoader::new(config).load(&name)?;
            print!("{}", inspect::render_layout(&theme, levels, last_won));
        }
        Commands::List => {
            for name in ThemeLoader::new(config).available_themes()? {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

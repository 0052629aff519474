//! Gallery - command line front-end for the gallery core
//!
//! Prints what the gallery's pages would render: sampled easing runs,
//! suggestion box contents, the control catalog and split paths.
//!
//! # Usage
//!
//! ```bash
//! gallery ease Elastic --direction in-out     # Sample one animation run
//! gallery ease Cubic --offset 200 --frames 5  # Run back from the far extreme
//! gallery families                            # List easing families
//! gallery suggest ma coon --source breeds     # Filter the cat breed sample
//! gallery catalog                             # Controls grouped by category
//! gallery split-path 'C:\Pictures\cat.jpeg'   # Directory / name / extension
//! gallery config show                         # Print persisted settings
//! ```

use clap::{Parser, Subcommand};
use gallery::config::{self, AppConfig};
use gallery::core::animation::AnimationRun;
use gallery::core::easing::{Direction, EasingFamily};
use gallery::core::path::split_path;
use gallery::core::resolver::EasingResolver;
use gallery::core::suggest::{FilterResult, filter};
use gallery::core::taxonomy::{CandidateSource, Category};
use gallery::utils::glyph_entity;
use gallery::validators;
use std::process::ExitCode;
use strum::IntoEnumIterator;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Easing, animation and suggestion samples from the control gallery", long_about = None)]
#[command(version, long_version = build::CLAP_LONG_VERSION)]
struct Cli {
    /// Log to stderr at debug level instead of the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an easing curve and sample one toggle run
    Ease {
        /// Easing family (case-sensitive); unknown names fall back to Back
        family: Option<String>,
        /// Easing direction (in, out, in-out)
        #[arg(short, long)]
        direction: Option<Direction>,
        /// Current offset of the animated element
        #[arg(long, default_value_t = 0.0)]
        offset: f64,
        /// Run length in seconds (max: 60)
        #[arg(long, value_name = "SECONDS")]
        duration: Option<f64>,
        /// Number of sampled intervals
        #[arg(long)]
        frames: Option<u32>,
        /// Exponent for the Exponential family
        #[arg(long)]
        exponent: Option<f64>,
        /// Power for the Power family
        #[arg(long)]
        power: Option<f64>,
        /// Remember these settings as the new defaults
        #[arg(long)]
        save: bool,
    },
    /// List the easing families
    Families,
    /// Filter suggestion candidates by a query
    Suggest {
        /// Candidate list to search (controls or breeds)
        #[arg(short, long)]
        source: Option<CandidateSource>,
        /// Query words; every word must appear in a match
        query: Vec<String>,
    },
    /// Show controls grouped by category
    Catalog,
    /// Split a path into directory, file name and extension
    SplitPath {
        path: String,
    },
    /// Show or reset persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Restore default settings
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match handle_cli(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
        return;
    }

    // Set up logging to file
    let _ = gallery::utils::ensure_dirs();
    if let Some(mut log_path) = gallery::utils::get_state_dir() {
        log_path.push("gallery.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
            return;
        }
    }
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

fn handle_cli(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Ease {
            family,
            direction,
            offset,
            duration,
            frames,
            exponent,
            power,
            save,
        } => {
            let mut config = config::load_config();
            let resolver = EasingResolver::new(
                validators::validate_exponent(exponent.unwrap_or(config.exponent))?,
                validators::validate_power(power.unwrap_or(config.power))?,
            );
            let direction = direction.unwrap_or(config.direction);
            let curve = match &family {
                Some(name) => resolver.resolve(name, direction),
                None => resolver.curve_for(config.family, direction),
            };
            let duration = match duration {
                Some(secs) => validators::validate_duration_secs(secs)?,
                None => config.duration(),
            };
            let frames = validators::validate_frames(frames.unwrap_or(config.frames))?;

            let run = AnimationRun::toggle(curve, offset, duration);
            tracing::info!(
                "Running {} from {} to {} over {:?}",
                curve,
                run.from,
                run.to,
                duration
            );

            println!("Curve: {curve}");
            println!(
                "Run:   {} -> {} over {:.3}s",
                run.from,
                run.to,
                duration.as_secs_f64()
            );
            for frame in run.frames(frames) {
                println!("  {:>8.3}s  {:>9.3}", frame.at.as_secs_f64(), frame.value);
            }

            if save {
                config.family = curve.family;
                config.direction = curve.direction;
                config.duration_secs = duration.as_secs_f64();
                config.exponent = resolver.exponent;
                config.power = resolver.power;
                config.frames = frames;
                config::save_config(&config)?;
                println!("✓ Saved as default.");
            }
        }
        Commands::Families => {
            let config = config::load_config();
            println!("Easing families (* = default):");
            for family in EasingFamily::iter() {
                let marker = if family == config.family { '*' } else { ' ' };
                if family.is_parameterized() {
                    let param = if family == EasingFamily::Exponential {
                        format!("exponent {}", config.exponent)
                    } else {
                        format!("power {}", config.power)
                    };
                    println!("  {marker} {family} ({param})");
                } else {
                    println!("  {marker} {family}");
                }
            }
        }
        Commands::Suggest { source, query } => {
            let source = source.unwrap_or_else(|| config::load_config().suggestion_source);
            let candidates = source.candidates();
            let query = query.join(" ");
            let result = filter(&query, &candidates);
            tracing::debug!(
                "Query {:?} over {} {} candidates: {} matches",
                query,
                candidates.len(),
                source,
                result.match_count()
            );
            // An empty result closes the popup: print nothing
            if let FilterResult::Empty = result {
                return Ok(());
            }
            for item in result.items() {
                println!("{item}");
            }
        }
        Commands::Catalog => {
            for category in Category::iter() {
                println!("{} {}", glyph_entity(category.glyph()), category);
                for control in category.controls() {
                    println!("    {} {}", glyph_entity(control.glyph()), control);
                }
            }
        }
        Commands::SplitPath { path } => {
            let parts = split_path(&path);
            println!("Directory: {}", parts.directory);
            println!("File name: {}", parts.file_name);
            println!("Extension: {}", parts.extension);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config();
                if let Some(path) = config::config_path() {
                    println!("# {}", path.display());
                }
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Reset => {
                config::save_config(&AppConfig::default())?;
                println!("✓ Configuration reset to defaults.");
            }
        },
    }
    Ok(())
}

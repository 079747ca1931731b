use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use design_studio::config::{self, Config};
use design_studio::designs::{
    animation_style, is_token_allowed, AnimatedComponent, InteractionState,
};
use design_studio::error::ErrorSeverity;
use design_studio::export::write_export_package;
use design_studio::gallery::{all_sections, find_section};
use design_studio::theme::StyleRoot;
use design_studio::{logging, DesignStudio, DesignStudioError};

#[derive(Parser)]
#[command(name = "design-studio")]
#[command(about = "Apply, inspect and export design-token systems")]
struct Cli {
    /// Config file (default: ~/.design-studio/config.json); must parse when given
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the {id}.json system definitions
    #[arg(long, global = true)]
    systems_dir: Option<PathBuf>,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available design systems
    List,
    /// Apply a system's tokens and print the resulting :root block
    Apply { id: String },
    /// Check whether a token is allowed in a system
    Check {
        id: String,
        category: String,
        key: String,
        #[arg(long, short)]
        subcategory: Option<String>,
    },
    /// Resolve the animation for a component and interaction state
    Animation {
        id: String,
        #[arg(value_parser = parse_component)]
        component: AnimatedComponent,
        #[arg(value_parser = parse_state)]
        state: InteractionState,
    },
    /// Render the gallery views as text
    Gallery {
        id: String,
        #[arg(long, short)]
        section: Option<String>,
    },
    /// Write {id}-design-system.zip
    Export {
        id: String,
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn parse_component(s: &str) -> std::result::Result<AnimatedComponent, String> {
    s.parse()
}

fn parse_state(s: &str) -> std::result::Result<InteractionState, String> {
    s.parse()
}

/// An explicit `--config` must be valid; the default location falls back to defaults
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::try_load_config(path)?,
        None => config::load_config(),
    };
    if let Some(dir) = &cli.systems_dir {
        config.systems_dir = Some(dir.to_string_lossy().into_owned());
    }
    Ok(config)
}

fn open_studio(config: &Config, id: Option<&str>) -> Result<DesignStudio<StyleRoot>> {
    let mut studio = DesignStudio::load(config, StyleRoot::new())
        .with_context(|| format!("loading systems from {}", config.get_systems_dir().display()))?;
    if let Some(id) = id {
        studio.select(id)?;
    }
    Ok(studio)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::List => {
            let studio = open_studio(&config, None)?;
            for system in studio.available() {
                println!("{:<14} {}", system.id, system.display_name());
                println!("{:<14} {}", "", system.description);
            }
        }
        Commands::Apply { id } => {
            let studio = open_studio(&config, Some(id))?;
            print!("{}", studio.port().to_css());
        }
        Commands::Check {
            id,
            category,
            key,
            subcategory,
        } => {
            let studio = open_studio(&config, Some(id))?;
            let allowed = is_token_allowed(
                studio.selected().allowed_tokens.as_ref(),
                category,
                subcategory.as_deref(),
                key,
            );
            println!("{}", if allowed { "allowed" } else { "restricted" });
        }
        Commands::Animation {
            id,
            component,
            state,
        } => {
            let studio = open_studio(&config, Some(id))?;
            let animator = studio.animator(*component);
            match animator.animation(*state) {
                Some(animation) => {
                    println!("{}", serde_json::to_string_pretty(animation)?);
                    println!("class: {}", animator.class(*state));
                    for (name, value) in animation_style(Some(animation)) {
                        println!("{}: {}", name, value);
                    }
                }
                None => println!("no animation"),
            }
            println!("reduce motion: {}", animator.is_reduced_motion());
        }
        Commands::Gallery { id, section } => {
            let studio = open_studio(&config, Some(id))?;
            let restrictions = studio.restrictions();
            let entries: Vec<_> = match section {
                Some(section_id) => vec![find_section(section_id)
                    .with_context(|| format!("unknown gallery section '{}'", section_id))?],
                None => all_sections().collect(),
            };
            for entry in entries {
                let view = entry.section.render(studio.selected(), &restrictions);
                println!("{}", view.render_text());
            }
        }
        Commands::Export { id, out } => {
            let studio = open_studio(&config, Some(id))?;
            let dir = out.clone().unwrap_or_else(|| config.get_export_dir());
            let path = write_export_package(studio.selected(), &dir)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<DesignStudioError>() {
                Some(studio_error) => {
                    error!(error = %e, severity = ?studio_error.severity(), "Command failed");
                    eprintln!("{}", studio_error.user_message());
                    if studio_error.severity() == ErrorSeverity::Critical {
                        return ExitCode::from(2);
                    }
                }
                None => {
                    error!(error = %e, "Command failed");
                    eprintln!("Error: {:#}", e);
                }
            }
            ExitCode::FAILURE
        }
    }
}

mod chart;
mod cli;
mod config;
mod error;
mod fields;
mod render;
mod surface;
mod types;
mod writer;

use crate::error::GaugeError;
use crate::types::config::Theme;
use crate::types::scoring::tier_for;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Element id the original results page draws into.
pub const DEFAULT_TARGET: &str = "atsScoreChart";

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, GaugeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Render(cmd) => {
            if !cmd.path.exists() {
                return Err(GaugeError::PathNotFound(cmd.path.display().to_string()));
            }

            let config_root = if cmd.path.is_dir() {
                cmd.path.clone()
            } else {
                cmd.path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(|parent| parent.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."))
            };
            let loaded = config::load_config(&config_root)?;
            let theme = Theme::from_config(loaded.as_ref())?;
            let target = cmd
                .target
                .clone()
                .or_else(|| {
                    loaded
                        .as_ref()
                        .and_then(|cfg| cfg.render.as_ref())
                        .and_then(|render| render.target.clone())
                })
                .unwrap_or_else(|| DEFAULT_TARGET.to_string());

            let mut document = surface::locate_document(&cmd.path, &target)?;
            let prior = document.contents().to_string();
            render::bind_gauge(&mut document, &target, cmd.score, &theme)?;

            if cmd.in_place {
                let manifest = writer::write_in_place(&document, &prior)?;
                println!("rollback manifest: {}", manifest.display());
            } else if let Some(out) = &cmd.out {
                document.write_to(out)?;
                println!("wrote {}", out.display());
            } else {
                println!("{}", document.contents());
            }

            if loaded.is_none() {
                eprintln!("warning: no gauge.toml found in {}", config_root.display());
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Spec(cmd) => {
            let loaded = match &cmd.config_root {
                Some(root) => {
                    if !root.exists() {
                        return Err(GaugeError::PathNotFound(root.display().to_string()));
                    }
                    config::load_config(root)?
                }
                None => None,
            };
            let theme = Theme::from_config(loaded.as_ref())?;
            let spec = chart::gauge_spec(cmd.score, &theme);
            println!("{}", render::json::to_json(&spec)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Tier(cmd) => {
            let tier = tier_for(cmd.score);
            let theme = Theme::default();
            println!("{} {}", tier.as_str(), theme.color_for(tier));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::AddField(_) => {
            fields::add_experience_field();
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

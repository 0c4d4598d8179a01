//! Entry point for the study deck.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments into the page to open.
//! - Load user configuration from `conf/config.toml` (or `--config`).
//! - Restore the persisted theme and launch the GUI on that page.

mod app;
mod cache;
mod catalog;
mod config;
mod gallery;
mod image_loader;
mod manifest;
mod query;
mod quiz;
mod text_utils;
mod theme;

use crate::app::{LaunchPage, run_app};
use crate::cache::PreferenceStore;
use crate::config::{load_config, serialize_config};
use crate::gallery::FolderSelection;
use crate::query::QueryParams;
use crate::theme::ThemeToggle;
use anyhow::{Context, Result, anyhow, bail};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str = "Usage: study-deck [--config PATH] \
    <gallery [--folder ID | --link QUERY] | quiz --kc FILE [--title T] | quiz --link QUERY \
    | catalog | config>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Open(LaunchPage),
    /// Print the effective configuration as TOML.
    PrintConfig,
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    config_path: PathBuf,
    command: Command,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    let launch = match args.command {
        Command::Open(launch) => launch,
        Command::PrintConfig => {
            print!("{}", serialize_config(&config)?);
            return Ok(());
        }
    };
    info!(
        config = %args.config_path.display(),
        root = %config.content_root,
        level = %config.log_level,
        "Starting study deck"
    );
    info!(page = ?launch, "Opening page");

    let theme = ThemeToggle::load(PreferenceStore::new(&config.preferences_path));
    info!(theme = theme.applied(), "Restored theme preference");

    run_app(config, theme, launch).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);

    if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let path = args
            .next()
            .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
        config_path = PathBuf::from(path);
    }

    let launch = match args.next().as_deref() {
        None | Some("catalog") => LaunchPage::Catalog,
        Some("config") => {
            return Ok(CliArgs {
                config_path,
                command: Command::PrintConfig,
            });
        }
        Some("gallery") => {
            let flags = parse_flags(args)?;
            let folder = match (flag(&flags, "--folder"), flag(&flags, "--link")) {
                (Some(folder), _) => Some(folder.to_string()),
                (None, Some(link)) => QueryParams::parse(link).get("folder").map(str::to_string),
                (None, None) => None,
            };
            LaunchPage::Gallery {
                folder: FolderSelection::parse(folder.as_deref()),
            }
        }
        Some("quiz") => {
            let flags = parse_flags(args)?;
            let (kc, title) = match flag(&flags, "--link") {
                Some(link) => {
                    let params = QueryParams::parse(link);
                    (
                        params.get("kc").map(str::to_string),
                        params.get("title").map(str::to_string),
                    )
                }
                None => (
                    flag(&flags, "--kc").map(str::to_string),
                    flag(&flags, "--title").map(str::to_string),
                ),
            };
            let kc = kc
                .filter(|kc| !kc.trim().is_empty())
                .ok_or_else(|| anyhow!("quiz needs a knowledge check file\n{USAGE}"))?;
            LaunchPage::Quiz { kc, title }
        }
        Some(other) => bail!("Unknown page: {other}\n{USAGE}"),
    };

    Ok(CliArgs {
        config_path,
        command: Command::Open(launch),
    })
}

/// `--name value` pairs after the page name.
fn parse_flags(args: impl Iterator<Item = String>) -> Result<Vec<(String, String)>> {
    let mut flags = Vec::new();
    let mut args = args;
    while let Some(name) = args.next() {
        if !name.starts_with("--") {
            bail!("Unexpected argument: {name}\n{USAGE}");
        }
        let value = args
            .next()
            .ok_or_else(|| anyhow!("{name} needs a value\n{USAGE}"))?;
        flags.push((name, value));
    }
    Ok(flags)
}

fn flag<'a>(flags: &'a [(String, String)], name: &str) -> Option<&'a str> {
    flags
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

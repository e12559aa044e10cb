//! # CLI Layer
//!
//! This module is **one possible UI client** for tablefilter, not the
//! application itself. It is the only place that:
//! - Parses arguments
//! - Knows about stdout, stderr and terminal colors
//! - Installs the logging subscriber
//!
//! ## Structure
//!
//! - `run()`: parses the command line and dispatches (called by `main.rs`)
//! - `init_context()`: resolves the config dir, loads config, builds the API
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::logging::init_logging;
use super::print::{eprint_warnings, print_messages, print_rendered};
use super::render::{render_bar, render_counts, render_screens, render_table, render_text_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tablefilter::api::{CmdResult, ConfigAction, FilterRequest, TableFilterApi};
use tablefilter::config::{TableFilterConfig, CONFIG_KEYS};
use tablefilter::error::{Result, TableFilterError};
use tablefilter::model::Record;
use tablefilter::source::fs::{FileSource, STDIN_LOCATION};

/// Per-project config directory, relative to the working directory.
const PROJECT_DIR: &str = ".tablefilter";

struct AppContext {
    api: TableFilterApi<FileSource>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    if !use_color {
        colored::control::set_override(false);
    }
    init_logging(
        cli.verbose,
        !cli.no_color && Term::stderr().features().colors_supported(),
    );

    let ctx = init_context(&cli, use_color)?;

    match cli.command {
        Commands::Filter {
            location,
            screen,
            search,
            filters,
            json,
        } => {
            let request = FilterRequest {
                search,
                filters,
                ..Default::default()
            };
            handle_filter(&ctx, &screen, &location, request, json)
        }
        Commands::Session {
            location,
            screen,
            script,
            json,
        } => handle_session(&ctx, &screen, &location, script, json),
        Commands::Counts { location, screen } => handle_counts(&ctx, &screen, &location),
        Commands::Screens { name } => handle_screens(&ctx, name.as_deref()),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Init => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli, use_color: bool) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = resolve_config_dir(&cwd, cli.global)?;
    let config = TableFilterConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), global = cli.global, "using config dir");

    let source = FileSource::new().with_root(cwd);
    Ok(AppContext {
        api: TableFilterApi::new(source, config, config_dir),
        use_color,
    })
}

fn resolve_config_dir(cwd: &Path, global: bool) -> Result<PathBuf> {
    if !global {
        return Ok(cwd.join(PROJECT_DIR));
    }
    ProjectDirs::from("com", "tablefilter", "tablefilter")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            TableFilterError::Config("Could not determine the user config directory".to_string())
        })
}

fn handle_filter(
    ctx: &AppContext,
    screen: &str,
    location: &str,
    request: FilterRequest,
    json: bool,
) -> Result<()> {
    let result = ctx.api.filter(screen, location, request)?;
    print_view(ctx, &result, json)
}

fn handle_session(
    ctx: &AppContext,
    screen: &str,
    location: &str,
    script: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let content = match script {
        Some(path) => std::fs::read_to_string(path)?,
        None if location == STDIN_LOCATION => {
            return Err(TableFilterError::Api(
                "records and script cannot both come from stdin; pass --script".to_string(),
            ))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    let result = ctx.api.session(screen, location, &lines)?;
    print_view(ctx, &result, json)
}

fn print_view(ctx: &AppContext, result: &CmdResult, json: bool) -> Result<()> {
    if json {
        let rows: &[Record] = result
            .view
            .as_ref()
            .map(|view| view.rows.as_slice())
            .unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(rows)?);
        eprint_warnings(&result.messages);
        return Ok(());
    }

    if let Some(view) = &result.view {
        if let Some(bar) = &view.bar {
            print_rendered(&render_bar(bar, ctx.use_color));
            println!();
        }
        print_rendered(&render_table(
            view,
            ctx.api.config().cell_width,
            ctx.use_color,
        ));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_counts(ctx: &AppContext, screen: &str, location: &str) -> Result<()> {
    let result = ctx.api.counts(screen, location)?;
    if let Some(counts) = &result.counts {
        print_rendered(&render_counts(counts, ctx.use_color));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_screens(ctx: &AppContext, name: Option<&str>) -> Result<()> {
    let result = ctx.api.screens(name)?;
    print_rendered(&render_screens(&result.screens, ctx.use_color));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action)?;
    if key.is_none() {
        let lines: Vec<String> = result
            .config
            .as_ref()
            .map(|config| {
                let mut lines: Vec<String> = CONFIG_KEYS
                    .iter()
                    .filter_map(|k| config.get(k).ok().map(|v| format!("{} = {}", k, v)))
                    .collect();
                if !config.screens.is_empty() {
                    let names: Vec<&str> = config.screens.iter().map(|s| s.name.as_str()).collect();
                    lines.push(format!("screens = {}", names.join(", ")));
                }
                lines
            })
            .unwrap_or_default();
        print_rendered(&render_text_list(
            &lines,
            "No configuration values.",
            ctx.use_color,
        ));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

//! # CLI Layer
//!
//! The only place that:
//! - reads files and the environment
//! - initializes logging
//! - prints to stdout
//!
//! Each command mounts a [`FilterApi`] over an in-memory history seeded with
//! `--url` (or the configured base URL), applies at most one event and renders.

use super::render::{self, SelectionView};
use super::setup::{Cli, Commands};
use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;
use zamfilter::api::{FilterApi, Outcome};
use zamfilter::config::ZamConfig;
use zamfilter::engine::FilterEngine;
use zamfilter::error::ZamError;
use zamfilter::history::{backlink, MemoryHistory};
use zamfilter::model::Page;
use zamfilter::selection::Selection;

type Api = FilterApi<MemoryHistory>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ZamConfig::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    let page_path = cli
        .page
        .as_deref()
        .ok_or_else(|| anyhow!("No page snapshot given, use --page <FILE>"))?;
    let page = Page::load(page_path).map_err(|e| anyhow!("{}: {}", page_path.display(), e))?;
    let location = parse_url(cli.url.as_deref().unwrap_or(&config.base_url))?;
    debug!(
        page = %page_path.display(),
        url = %location,
        rows = page.rows.len(),
        "mounting filters"
    );
    let mut api = FilterApi::mount(page, MemoryHistory::new(location));
    let json = cli.json;

    let output = match cli.command.unwrap_or(Commands::List { all: false }) {
        Commands::List { all } => {
            if json {
                render::list_json(api.engine(), api.location(), all)?
            } else {
                render::list_text(api.engine(), api.location(), all)
            }
        }
        Commands::Set { filter, value } => {
            let outcome = api.set(&filter, &value)?;
            event(&api, &outcome, json)?
        }
        Commands::Cycle { filter, times } => {
            let mut outcome = api.cycle(&filter)?;
            for _ in 1..times {
                outcome = api.cycle(&filter)?;
            }
            event(&api, &outcome, json)?
        }
        Commands::Check { filter, off } => {
            let outcome = api.check(&filter, !off)?;
            event(&api, &outcome, json)?
        }
        Commands::Tags { tags } => {
            let outcome = api.tags(tags)?;
            event(&api, &outcome, json)?
        }
        Commands::Select { nums, all, link } => select(&api, &nums, all, link.as_deref(), json)?,
    };

    print!("{}", output);
    Ok(())
}

/// Logging goes to stderr. `RUST_LOG` wins over `-v`, which wins over config.
fn init_tracing(config: &ZamConfig, verbose: u8) {
    let fallback = match verbose {
        0 => config.log.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| anyhow!("Invalid URL {:?}: {}", raw, e))
}

fn event(api: &Api, outcome: &Outcome, json: bool) -> Result<String> {
    Ok(if json {
        render::outcome_json(outcome, api.engine())?
    } else {
        render::outcome_text(outcome, api.engine())
    })
}

/// Row ids matching an amendement number, or a row's full number list.
fn rows_for(engine: &FilterEngine, num: &str) -> Vec<String> {
    engine
        .page()
        .rows
        .iter()
        .filter(|r| r.is_filterable())
        .filter(|r| r.amendement == num || r.amendements.iter().any(|n| n == num))
        .map(|r| r.id.clone())
        .collect()
}

fn select(api: &Api, nums: &[String], all: bool, link: Option<&str>, json: bool) -> Result<String> {
    let engine = api.engine();
    let mut selection = Selection::new();
    if all {
        selection.select_all(engine, true);
    }
    for num in nums {
        let ids = rows_for(engine, num);
        if ids.is_empty() {
            return Err(ZamError::RowNotFound(num.clone()).into());
        }
        for id in ids {
            selection.set(engine, &id, true)?;
        }
    }

    let actions = selection.group_actions(engine);
    let link = match link {
        Some(raw) => Some(backlink(api.location(), &actions.link(&parse_url(raw)?)).to_string()),
        None => None,
    };
    let view = SelectionView {
        checked: selection.len(),
        status: selection.status(engine),
        actions,
        link,
    };
    Ok(if json {
        render::selection_json(&view)?
    } else {
        render::selection_text(&view)
    })
}

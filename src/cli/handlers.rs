// src/cli/handlers.rs
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::args::{InputArgs, RankArgs};
use crate::config::{Config, CONFIG_FILE};
use crate::engine::GraphEngine;
use crate::events::{EventKind, EventLogger};
use crate::exit::LinkRankExit;
use crate::graph::{BuiltGraph, GraphStats};
use crate::ingest;
use crate::rank::ObserverSet;
use crate::reporting::{self, console, ConsoleObserver, OutputFormat, StatsReport};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    Ok(Config::load(config_path)?)
}

fn read_graph(input: &InputArgs, config: &Config) -> Result<BuiltGraph> {
    let built = ingest::read_files(&input.files, &config.input).with_context(|| {
        let names: Vec<_> = input.files.iter().map(|p| p.display().to_string()).collect();
        format!("reading {}", names.join(", "))
    })?;
    Ok(built)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the config is invalid, the input cannot be read or
/// ranked, or the output cannot be written.
pub fn handle_rank(args: &RankArgs, config_path: Option<&Path>) -> Result<LinkRankExit> {
    let mut config = load_config(config_path)?;
    args.apply(&mut config);
    config.validate()?;

    let events = args.events.as_deref().map(EventLogger::new);
    let built = read_graph(&args.input, &config)?;
    let stats = GraphStats::of(&built.graph);
    log_build(events.as_ref(), &built, &stats);

    // Keep stdout clean for machine formats going to stdout.
    let chatty = args.output.is_some() || args.format == OutputFormat::Text;
    if chatty {
        console::print_build_summary(&built.summary, &stats);
    }
    console::warn_skipped(&built.summary);
    if args.verbose {
        console::print_skipped(&built.summary);
    }

    let mut console_observer = ConsoleObserver;
    let mut event_observer = events.clone();
    let mut observers = ObserverSet::new();
    if args.verbose {
        observers.push(&mut console_observer);
    }
    if let Some(logger) = event_observer.as_mut() {
        observers.push(logger);
    }

    let outcome = GraphEngine::rank_built(built, &config, &mut observers)?;
    if let Some(logger) = &events {
        logger.log(EventKind::RankCompleted {
            iterations: outcome.result.iterations,
            delta: outcome.result.delta,
            converged: outcome.converged(),
        });
    }
    if chatty {
        console::print_convergence(&outcome.result);
    } else if !outcome.converged() {
        eprintln!(
            "{} iteration cap of {} reached before convergence",
            "warn:".yellow().bold(),
            outcome.result.iterations
        );
    }

    let top = outcome.reporter.top(config.rank.top_k);
    match (&args.output, args.format) {
        (Some(path), format) => {
            reporting::write_output(path, &reporting::render(top, format)?)?;
            println!("{} {} entries to {}", "Wrote".green(), top.len(), path.display());
        }
        (None, OutputFormat::Text) => console::print_ranking(top),
        (None, format) => print!("{}", reporting::render(top, format)?),
    }

    if args.strict_convergence && !outcome.converged() {
        return Ok(LinkRankExit::NotConverged);
    }
    Ok(LinkRankExit::Success)
}

fn log_build(events: Option<&EventLogger>, built: &BuiltGraph, stats: &GraphStats) {
    let Some(logger) = events else {
        return;
    };
    for s in &built.summary.skipped {
        logger.log(EventKind::RecordSkipped {
            origin: s.origin.as_ref().map(|p| p.display().to_string()),
            line: s.line,
            reason: s.reason.clone(),
        });
    }
    logger.log(EventKind::GraphBuilt {
        nodes: stats.nodes,
        edges: stats.edges,
        dangling: stats.dangling,
        skipped: built.summary.skipped_count(),
    });
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if the config is invalid or the input cannot be read.
pub fn handle_stats(
    input: &InputArgs,
    adjacency: bool,
    json: bool,
    config_path: Option<&Path>,
) -> Result<LinkRankExit> {
    let mut config = load_config(config_path)?;
    input.apply(&mut config.input);
    config.validate()?;

    let built = read_graph(input, &config)?;
    let stats = GraphStats::of(&built.graph);

    console::warn_skipped(&built.summary);
    if json {
        reporting::print_json(&StatsReport::new(&stats, &built.summary))?;
        return Ok(LinkRankExit::Success);
    }
    console::print_build_summary(&built.summary, &stats);
    console::print_skipped(&built.summary);
    console::print_stats(&stats);
    if adjacency {
        console::print_adjacency(&built.graph, &built.index);
    }
    Ok(LinkRankExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(force: bool, config_path: Option<&Path>) -> Result<LinkRankExit> {
    let path = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("{} {}", "Created".green().bold(), path.display());
    Ok(LinkRankExit::Success)
}

// src/reporting/console.rs
use colored::Colorize;

use crate::graph::{BuildSummary, Graph, GraphStats, NodeIndex};
use crate::rank::{IterationObserver, IterationRecord, PageRankResult, RankedEntry};

/// Prints what the build produced.
pub fn print_build_summary(summary: &BuildSummary, stats: &GraphStats) {
    println!(
        "{} {} unique pages, {} links ({} dangling, {} component{})",
        "Graph:".cyan().bold(),
        stats.nodes,
        stats.edges,
        stats.dangling,
        stats.components,
        if stats.components == 1 { "" } else { "s" }
    );
    if summary.duplicate_edges > 0 {
        println!(
            "  {} duplicate link{} collapsed",
            summary.duplicate_edges,
            if summary.duplicate_edges == 1 { "" } else { "s" }
        );
    }
}

/// Warns on stderr when malformed records were dropped.
pub fn warn_skipped(summary: &BuildSummary) {
    let skipped = summary.skipped_count();
    if skipped > 0 {
        eprintln!(
            "{} skipped {} malformed record{} of {}",
            "warn:".yellow().bold(),
            skipped,
            if skipped == 1 { "" } else { "s" },
            summary.records_read
        );
    }
}

/// Lists every skipped record with its origin on stderr.
pub fn print_skipped(summary: &BuildSummary) {
    for s in &summary.skipped {
        let origin = s
            .origin
            .as_ref()
            .map_or_else(|| "<input>".to_string(), |p| p.display().to_string());
        eprintln!("  {} {}:{} {}", "-->".blue(), origin, s.line, s.reason.dimmed());
    }
}

pub fn print_stats(stats: &GraphStats) {
    println!("{}", "Graph statistics".cyan().bold());
    println!("  nodes            {}", stats.nodes);
    println!("  links            {}", stats.edges);
    println!("  dangling         {}", stats.dangling);
    println!("  without inlinks  {}", stats.without_inlinks);
    println!("  self links       {}", stats.self_links);
    println!("  components       {}", stats.components);
}

/// Prints `index: neighbors` for both adjacency views.
pub fn print_adjacency(graph: &Graph, index: &NodeIndex) {
    println!("{}", "Outlinks".cyan().bold());
    for (id, name) in index.iter() {
        println!("{id:>5}: {} {}", join(graph.out_neighbors(id)), name.dimmed());
    }
    println!("{}", "Inlinks".cyan().bold());
    for (id, name) in index.iter() {
        println!("{id:>5}: {} {}", join(graph.in_neighbors(id)), name.dimmed());
    }
}

fn join(ids: &[usize]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

pub fn print_convergence(result: &PageRankResult) {
    if result.converged() {
        println!(
            "{} after {} iteration{} (delta {:.3e})",
            "Converged".green().bold(),
            result.iterations,
            if result.iterations == 1 { "" } else { "s" },
            result.delta
        );
    } else {
        eprintln!(
            "{} iteration cap of {} reached before convergence (delta {:.3e}); scores are the last iterate",
            "warn:".yellow().bold(),
            result.iterations,
            result.delta
        );
    }
}

pub fn print_ranking(entries: &[RankedEntry]) {
    println!(
        "{}",
        format!("Top {} pages by PageRank", entries.len()).cyan().bold()
    );
    let width = entries.len().to_string().len();
    for e in entries {
        println!(
            "({:>width$}) {} {}",
            e.position,
            format!("{:.10}", e.score).yellow(),
            e.identifier
        );
    }
}

/// Streams iteration progress to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl IterationObserver for ConsoleObserver {
    fn on_iteration(&mut self, record: &IterationRecord) {
        eprintln!(
            "  {} {:>4}  delta {:.3e}  sum {:.12}",
            "iter".dimmed(),
            record.iteration,
            record.delta,
            record.rank_sum
        );
    }
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, DeltaNorm, InputConfig, SourceColumn};
use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank for crawled link graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./linkrank.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the pages of one or more edge tables
    Rank(RankArgs),
    /// Print graph statistics without ranking
    Stats {
        #[command(flatten)]
        input: InputArgs,
        /// Also list the out- and in-adjacency of every node
        #[arg(long)]
        adjacency: bool,
        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default linkrank.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Options shared by every command that reads edge tables.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Edge tables, read in order into one graph
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
    /// Abort on the first malformed record instead of skipping it
    #[arg(long)]
    pub strict: bool,
    /// Column holding the page the link starts from
    #[arg(long, value_enum, value_name = "COLUMN")]
    pub source_column: Option<SourceColumn>,
    /// Field delimiter
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,
    /// Treat the first line as data
    #[arg(long)]
    pub no_header: bool,
}

impl InputArgs {
    pub fn apply(&self, input: &mut InputConfig) {
        if self.strict {
            input.strict = true;
        }
        if let Some(col) = self.source_column {
            input.source_column = col;
        }
        if let Some(d) = self.delimiter {
            input.delimiter = d;
        }
        if self.no_header {
            input.has_header = false;
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Probability of following a link, in (0, 1)
    #[arg(long, short)]
    pub damping: Option<f64>,
    /// Stop once the per-iteration delta falls below this
    #[arg(long, short)]
    pub tolerance: Option<f64>,
    /// Hard iteration cap
    #[arg(long, short = 'm')]
    pub max_iterations: Option<usize>,
    /// Number of ranked pages to report
    #[arg(long, short = 'k')]
    pub top: Option<usize>,
    /// Delta norm used for the convergence test
    #[arg(long, value_enum)]
    pub norm: Option<DeltaNorm>,
    /// Compute each iteration in parallel
    #[arg(long)]
    pub parallel: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the ranking to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Append JSON-lines events to this file
    #[arg(long, value_name = "FILE")]
    pub events: Option<PathBuf>,
    /// Print every iteration and every skipped record
    #[arg(long, short)]
    pub verbose: bool,
    /// Exit with a distinct code when the iteration cap is reached
    #[arg(long)]
    pub strict_convergence: bool,
}

impl RankArgs {
    /// Layers the flags over a loaded config.
    pub fn apply(&self, config: &mut Config) {
        self.input.apply(&mut config.input);
        let rank = &mut config.rank;
        if let Some(d) = self.damping {
            rank.damping_factor = d;
        }
        if let Some(t) = self.tolerance {
            rank.convergence_tolerance = t;
        }
        if let Some(m) = self.max_iterations {
            rank.max_iterations = m;
        }
        if let Some(k) = self.top {
            rank.top_k = k;
        }
        if let Some(n) = self.norm {
            rank.norm = n;
        }
        if self.parallel {
            rank.parallel = true;
        }
    }
}

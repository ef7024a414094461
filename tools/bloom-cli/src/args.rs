//! Command-line arguments

use std::path::PathBuf;

use bloom_filters::BloomConfig;
use clap::{Parser, Subcommand};

/// Bloom filter operation-stream runner
#[derive(Parser, Debug)]
#[command(name = "bloom-cli")]
#[command(about = "Feed insert (+) and query (?) operations to a Bloom filter")]
pub struct Args {
    /// Expected number of distinct items (overrides BLOOM_CAPACITY)
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// Target false positive rate (overrides BLOOM_FALSE_POSITIVE_RATE)
    #[arg(long, global = true)]
    pub fpr: Option<f64>,

    /// Print a JSON metrics snapshot to stderr on exit
    #[arg(long, global = true)]
    pub stats: bool,

    /// Without a subcommand, ask for the input method
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Read operations typed on the terminal
    Interactive,

    /// Read operations from a file
    Batch {
        /// Operation stream file
        file: PathBuf,
    },

    /// Write a random operation stream
    Generate {
        /// Output file
        file: PathBuf,

        /// Number of operations; prompted for when omitted
        #[arg(short = 'n', long)]
        operations: Option<usize>,

        /// RNG seed for a reproducible stream
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Args {
    /// Filter configuration: defaults, then environment, then flags
    pub fn filter_config(&self) -> BloomConfig {
        self.apply_overrides(BloomConfig::from_env())
    }

    fn apply_overrides(&self, mut config: BloomConfig) -> BloomConfig {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(fpr) = self.fpr {
            config.false_positive_rate = fpr;
        }
        config
    }
}

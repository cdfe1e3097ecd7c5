pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "space-traveling")]
#[command(about = "Blog reader for the space-traveling content repository", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List posts, loading more pages on demand
    List {
        /// Extra pages to load after the first one
        #[arg(short, long, default_value_t = 0)]
        pages: usize,

        /// Keep loading until the feed ends
        #[arg(long, conflicts_with = "pages")]
        all: bool,
    },
    /// Show a single post
    Post {
        /// Uid of the post
        uid: String,

        /// Print the comment widget embed
        #[arg(long)]
        comments: bool,
    },
    /// List post routes to pre-render
    Paths {
        /// Maximum number of routes (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

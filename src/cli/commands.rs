//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// pagefeed CLI
#[derive(Parser, Debug)]
#[command(name = "pagefeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a paged endpoint and print the list as pages arrive
    Browse {
        /// Endpoint URL to fetch from
        #[arg(short, long)]
        endpoint: String,

        /// Items requested per page
        #[arg(long, default_value = "30")]
        page_size: u32,

        /// Field name of the item collection in the response body
        #[arg(long, default_value = "data")]
        collection_path: String,

        /// Columns to lay rows out in
        #[arg(long, default_value = "1")]
        columns: u32,

        /// Entity noun for the empty-state message
        #[arg(long, default_value = "items")]
        entity: String,

        /// Item field printed as the row label
        #[arg(long, default_value = "name")]
        label_field: String,

        /// Stop after this many pages (0 walks to the end)
        #[arg(long, default_value = "0")]
        max_pages: usize,
    },
}

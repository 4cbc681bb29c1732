//! FriendBook CLI - command-line interface for FriendBook
//!
//! This is the entry point for users working with a book from the
//! shell. Each command loads the book from a JSON file, applies one
//! operation, and saves it back if anything changed.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "friendbook")]
#[command(author = "FriendBook Contributors")]
#[command(version)]
#[command(about = "A small social graph with naive friend recommendations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the book file
    #[arg(short, long, global = true, default_value = "friendbook.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty book
    New,

    /// Add one or more people to the book
    Add {
        /// Names to add
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List everyone in the book, in id order
    List,

    /// Record a friendship between two people
    Friend {
        name1: String,
        name2: String,
    },

    /// Remove a friendship between two people
    Unfriend {
        name1: String,
        name2: String,
    },

    /// Check whether two people are friends
    Check {
        name1: String,
        name2: String,
    },

    /// Show how many friends a person has
    Count {
        name: String,
    },

    /// List the mutual friends of two people
    Mutual {
        name1: String,
        name2: String,
    },

    /// Print friend recommendations for a person
    Recommend {
        name: String,
    },

    /// Show book statistics
    Status,

    /// Export the book to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "friendbook-export.json")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let file = cli.file.as_path();
    let result = match cli.command {
        Commands::New => commands::new(file),
        Commands::Add { names } => commands::add(file, &names),
        Commands::List => commands::list(file),
        Commands::Friend { name1, name2 } => commands::friend(file, &name1, &name2),
        Commands::Unfriend { name1, name2 } => commands::unfriend(file, &name1, &name2),
        Commands::Check { name1, name2 } => commands::check(file, &name1, &name2),
        Commands::Count { name } => commands::count(file, &name),
        Commands::Mutual { name1, name2 } => commands::mutual(file, &name1, &name2),
        Commands::Recommend { name } => commands::recommend(file, &name),
        Commands::Status => commands::status(file),
        Commands::Export { output } => commands::export(file, &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

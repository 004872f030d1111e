use clap::{Parser, Subcommand};
use git_sift::commands::*;
use git_sift::core::{error::Result, print_error, FileCategory};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-sift")]
#[command(about = "Find the repository root and sort git status into new, modified and untracked files")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the working root of the repository containing PATH
    Root {
        /// Where to start searching (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Show new, modified and untracked files
    Status {
        /// Where to start searching (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Print paths joined onto the repository root
        #[arg(long, conflicts_with = "relative")]
        full_path: bool,
        /// Print paths relative to the repository root, overriding the config
        #[arg(long)]
        relative: bool,
        /// Print the classified status as JSON
        #[arg(long, conflicts_with = "category")]
        json: bool,
        /// Print only one category, one path per line
        #[arg(long)]
        category: Option<FileCategory>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Root { path } => execute_root(path.as_deref()),
        Commands::Status {
            path,
            full_path,
            relative,
            json,
            category,
        } => execute_status(&StatusOptions {
            path,
            full_path: match (full_path, relative) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            json,
            category,
        }),
    };

    if let Err(e) = result {
        if e.is_not_found() {
            log::debug!("{e}");
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}

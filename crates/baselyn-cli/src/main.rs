//! Baselyn CLI
//!
//! Command-line tool for the Baselyn dashboard data layer: snapshot the
//! normalized feature dataset, inspect single features, render filtered
//! listings, and manage starred/custom feature ids.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use baselyn_core::{BaselineStatus, Category};
use baselyn_query::{FavoritesFilter, FeatureFilters, SortOrder};
use baselyn_store::{FileStore, KeyValueStore};

mod commands;
mod snapshot;

/// Baselyn - Web Platform Baseline dashboard data tool
#[derive(Parser, Debug)]
#[command(name = "baselyn")]
#[command(about = "Web Platform Baseline dashboard data tool", long_about = None)]
struct Args {
    /// Key-value store file for starred and custom feature ids
    #[arg(long, env = "BASELYN_STORE", default_value = "data/store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the normalized feature dataset and write JSON snapshot files
    Fetch {
        /// Feature ids to fetch (merged with stored custom ids)
        ids: Vec<String>,

        /// File of feature ids, one per line (# starts a comment)
        #[arg(long)]
        ids_file: Option<PathBuf>,

        /// Output directory for features.json and feature-ids.json
        #[arg(long, default_value = "data")]
        out: PathBuf,
    },
    /// Fetch and print a single feature as JSON
    Show {
        /// Feature id
        id: String,
    },
    /// Render a filtered, grouped listing of a fetched snapshot
    List {
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,

        /// Only this category (css, html, javascript, web-platform)
        #[arg(long)]
        category: Option<Category>,

        /// Only this status (limited, newly, widely, unknown)
        #[arg(long)]
        status: Option<BaselineStatus>,

        /// Only starred features
        #[arg(long)]
        starred: bool,

        /// Sort order (newest, oldest, az, za)
        #[arg(long, default_value = "newest")]
        sort: SortOrder,

        /// Snapshot file written by `fetch`
        #[arg(long, default_value = "data/features.json")]
        data: PathBuf,
    },
    /// Star a feature id
    Star {
        /// Feature id
        id: String,
    },
    /// Unstar a feature id
    Unstar {
        /// Feature id
        id: String,
    },
    /// List starred feature ids
    Starred,
    /// Record a custom feature id, fetched alongside the base set
    Add {
        /// Feature id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&args.store)?);

    match args.command {
        Command::Fetch { ids, ids_file, out } => commands::fetch::run(ids, ids_file, out, store).await,
        Command::Show { id } => commands::show::run(&id).await,
        Command::List {
            search,
            category,
            status,
            starred,
            sort,
            data,
        } => {
            let filters = FeatureFilters {
                search,
                category,
                status,
                favorites: if starred {
                    FavoritesFilter::Starred
                } else {
                    FavoritesFilter::All
                },
                sort,
            };
            commands::list::run(&data, &filters, store)
        }
        Command::Star { id } => commands::star::star(&id, store),
        Command::Unstar { id } => commands::star::unstar(&id, store),
        Command::Starred => commands::star::starred(store),
        Command::Add { id } => commands::add::run(&id, store),
    }
}

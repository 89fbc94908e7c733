mod commands;
mod config;
mod error;
mod gif;
mod metadata;
mod processor;
mod store;
mod walker;

use crate::commands::{EditRequest, ScanRequest};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::metadata::GifMetadata;
use crate::store::MetadataStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gif-indexer",
    about = "Extracts, stores and edits structural metadata from GIF files"
)]
struct Cli {
    /// JSON sidecar holding the metadata store (overrides the configured default)
    #[arg(long, global = true)]
    metadata_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recursively scan a folder for GIF files and index their metadata
    Scan { folder: PathBuf },
    /// List all indexed file paths
    List,
    /// Print the stored metadata for one file
    Show { file: PathBuf },
    /// Overwrite stored metadata fields for one file
    Edit {
        file: PathBuf,
        #[arg(long)]
        version: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        colors: Option<String>,
        #[arg(long)]
        background_color: Option<String>,
        #[arg(long)]
        compression_type: Option<String>,
        #[arg(long)]
        numeric_format: Option<String>,
        #[arg(long)]
        image_count: Option<String>,
        #[arg(long)]
        creation_date: Option<String>,
        #[arg(long)]
        modification_date: Option<String>,
        #[arg(long)]
        comments: Option<String>,
    },
}

fn main() -> Result<()> {
    let config = AppConfig::new()?;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    let cli = Cli::parse();
    let metadata_file = cli
        .metadata_file
        .unwrap_or_else(|| PathBuf::from(&config.metadata_file));

    info!("Starting gif-indexer");
    let mut store = MetadataStore::load(&metadata_file);

    match cli.command {
        Command::Scan { folder } => {
            let outcome = commands::scan_folder(&config, &mut store, &ScanRequest { folder });
            store.save(&metadata_file)?;
            println!(
                "Indexed {} GIF files ({} skipped)",
                outcome.indexed.len(),
                outcome.skipped
            );
        }
        Command::List => {
            let mut paths: Vec<_> = store.paths().collect();
            paths.sort_unstable();
            for path in paths {
                println!("{}", path);
            }
        }
        Command::Show { file } => {
            let key = commands::store_key(&file);
            match commands::get_metadata(&store, &key) {
                Some(metadata) => print_metadata(&key, metadata),
                None => println!("No metadata recorded for {}", key),
            }
        }
        Command::Edit {
            file,
            version,
            size,
            colors,
            background_color,
            compression_type,
            numeric_format,
            image_count,
            creation_date,
            modification_date,
            comments,
        } => {
            let request = EditRequest {
                path: commands::store_key(&file),
                version,
                size,
                colors,
                background_color,
                compression_type,
                numeric_format,
                image_count,
                creation_date,
                modification_date,
                comments,
            };
            match commands::edit_metadata(&mut store, &request) {
                Ok(()) => {
                    store.save(&metadata_file)?;
                    println!("Changes saved for {}", request.path);
                }
                // Editing a record that was never indexed is informational,
                // not a failure.
                Err(AppError::NotFound(path)) => {
                    println!("No metadata available to edit for {}", path);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    info!("gif-indexer finished");
    Ok(())
}

fn print_metadata(path: &str, metadata: &GifMetadata) {
    println!("{}", path);
    println!("  Version:           {}", metadata.version);
    println!("  Size:              {}", metadata.size);
    println!("  Colors:            {}", metadata.colors);
    println!("  Compression type:  {}", metadata.compression_type);
    println!("  Numeric format:    {}", metadata.numeric_format);
    println!("  Background color:  {}", metadata.background_color);
    println!("  Image count:       {}", metadata.image_count);
    println!("  Creation date:     {}", metadata.creation_date);
    println!("  Modification date: {}", metadata.modification_date);
    println!("  Comments:          {}", metadata.comments);
}

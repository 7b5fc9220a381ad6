//! Lathe gallery CLI
//!
//! Builds the revolved demo shapes (or those of a JSON gallery file) and
//! reports on them or writes them out.
//!
//! # Usage
//!
//! ```bash
//! # Build every shape and log counts, bounds and buffer sizes
//! lathe summary
//! lathe --config gallery.json summary
//!
//! # Write one mesh as JSON
//! lathe export --shape ripple_heart --output heart.json
//!
//! # Print the built-in gallery, a starting point for --config
//! lathe default-config > gallery.json
//! ```
//!
//! Logging defaults to WARN, INFO for lathe; override with `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use lathe_core::{LatheError, Result};
use lathe_mesh::{GalleryConfig, ShapeConfig};
use lathe_render::prepare_mesh;

#[derive(Parser, Debug)]
#[command(author, version, about = "Procedural surface-of-revolution meshes")]
struct Args {
    /// Gallery JSON file; the built-in gallery is used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build every shape and log mesh statistics
    Summary,
    /// Build one shape and write it as JSON
    Export {
        /// Shape name from the gallery
        #[arg(long)]
        shape: String,
        /// Output path for the mesh JSON
        #[arg(long)]
        output: PathBuf,
    },
    /// Print the built-in gallery as JSON
    DefaultConfig,
}

/// WARN for everything, INFO for every `lathe*` target; `RUST_LOG` adds to it.
fn default_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lathe=info".parse().unwrap_or_default())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(default_filter()).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::DefaultConfig => {
            println!("{}", GalleryConfig::default().to_json_string()?);
            Ok(())
        }
        Command::Summary => {
            let gallery = load_gallery(args.config.as_deref())?;
            for shape in &gallery.shapes {
                summarize(shape)?;
            }
            Ok(())
        }
        Command::Export { shape, output } => {
            let gallery = load_gallery(args.config.as_deref())?;
            export(gallery.shape(&shape)?, &output)
        }
    }
}

fn load_gallery(path: Option<&Path>) -> Result<GalleryConfig> {
    match path {
        Some(path) => GalleryConfig::load(path),
        None => Ok(GalleryConfig::default()),
    }
}

fn summarize(shape: &ShapeConfig) -> Result<()> {
    let mesh = shape.build()?;
    let gpu = prepare_mesh(&mesh);
    let bounds = mesh.bounding_box();

    tracing::info!(
        shape = %shape.name,
        profile = shape.profile.name(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built mesh"
    );
    tracing::info!(
        shape = %shape.name,
        min = ?bounds.min,
        max = ?bounds.max,
        vertex_bytes = gpu.vertex_bytes().len(),
        index_bytes = gpu.index_bytes().len(),
        "bounds and buffers"
    );
    Ok(())
}

fn export(shape: &ShapeConfig, output: &Path) -> Result<()> {
    let mesh = shape.build()?;
    let json =
        serde_json::to_string(&mesh).map_err(|e| LatheError::Serialization(e.to_string()))?;
    std::fs::write(output, json)?;

    tracing::info!(
        shape = %shape.name,
        path = %output.display(),
        vertices = mesh.vertex_count(),
        "exported mesh"
    );
    Ok(())
}

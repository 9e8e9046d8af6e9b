//! Meshtex CLI - texture procedural surface meshes from the command line
//!
//! # Commands
//!
//! - `meshtex init` - Write a default meshtex.toml
//! - `meshtex render` - Tessellate a height-field surface, texture it and
//!   report the resulting buffers
//!
//! # Usage
//!
//! ```bash
//! # Color faces from a 12-entry palette and save palette.png
//! meshtex render --mode faces --colors 12 --save
//!
//! # Tile the configured pattern twice as densely on a 48x24 grid
//! meshtex render --config meshtex.toml --mode pattern --scale 2 --grid 48x24
//!
//! # Color vertices by height
//! meshtex render --mode vertices --density height
//! ```

mod init;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Meshtex CLI - texture buffers for procedural meshes
#[derive(Parser)]
#[command(name = "meshtex")]
#[command(about = "Texture buffers for procedural triangle meshes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default meshtex.toml
    Init(init::InitArgs),

    /// Texture a generated surface and report its buffers
    Render(render::RenderArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => init::execute(args),
        Commands::Render(args) => render::execute(args),
    }
}

//! Init command - write a default meshtex.toml

use anyhow::{bail, Context, Result};
use clap::Args;
use meshtex::TexturingConfig;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args)]
pub struct InitArgs {
    /// Path of the config file to create
    #[arg(short, long, default_value = "meshtex.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    TexturingConfig::default()
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Created {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("meshtex.toml");

        execute(InitArgs {
            output: output.clone(),
            force: false,
        })
        .unwrap();
        assert_eq!(
            TexturingConfig::load(&output).unwrap(),
            TexturingConfig::default()
        );

        let again = execute(InitArgs {
            output: output.clone(),
            force: false,
        });
        assert!(again.is_err());

        execute(InitArgs {
            output,
            force: true,
        })
        .unwrap();
    }
}

//! Creates an ICNS file from a directory of prebuilt PNG icons.
//!
//! To create an ICNS file, run:
//!
//! ```shell
//! cargo run --example pngs2icns <path/to/dir>
//! # ICNS will be saved to path/to/dir/icon.icns
//! ```
//!
//! The directory should contain files named `icon-<size>.png`, where <size>
//! is one of 32, 64, 128, 256, 512 or 1024.  Sizes with no file are skipped.
//! Pass `--output` to save the ICNS file somewhere else.

use anyhow::{bail, Context, Result};
use clap::Parser;
use icnspack::{pack_to_path, Asset, IconSize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pngs2icns")]
#[command(about = "Pack a directory of icon-<size>.png files into an ICNS file")]
struct Cli {
    /// Directory containing the PNG files
    dir: PathBuf,

    /// Output ICNS file path (defaults to <dir>/icon.icns)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let assets: Vec<Asset> = IconSize::ALL
        .iter()
        .map(|size| {
            let path = cli.dir.join(format!("icon-{}.png", size.pixels()));
            Asset::from_path(size.pixels(), path)
        })
        .filter(|asset| asset.path.as_ref().map_or(false, |p| p.is_file()))
        .collect();
    if assets.is_empty() {
        bail!("no icon-<size>.png files found in {}", cli.dir.display());
    }

    let output = cli.output.unwrap_or_else(|| cli.dir.join("icon.icns"));
    pack_to_path(&assets, &output)
        .with_context(|| format!("failed to pack {}", output.display()))?;
    println!("ICNS file contains {} icon(s): {}", assets.len(), output.display());
    Ok(())
}

use std::path::Path;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use listing_art::{Artifact, PageSpec, RenderThreading, fonts_for, write_pages_with};

/// Render the store-listing artwork into the current directory.
#[derive(Parser, Debug)]
#[command(name = "listing-art", version)]
struct Cli {
    /// Artifacts to render; all of them when omitted.
    #[arg(value_enum)]
    artifacts: Vec<ArtifactChoice>,

    /// Render pages on a thread pool, one canvas per worker.
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ArtifactChoice {
    /// Crescent-and-star app icon.
    Icon,
    /// Hexagram app icon.
    IconShatkona,
    /// Feature graphic.
    Feature,
    /// Numbered tablet screenshots.
    Tablet,
}

impl From<ArtifactChoice> for Artifact {
    fn from(choice: ArtifactChoice) -> Self {
        match choice {
            ArtifactChoice::Icon => Artifact::Icon,
            ArtifactChoice::IconShatkona => Artifact::IconShatkona,
            ArtifactChoice::Feature => Artifact::FeatureGraphic,
            ArtifactChoice::Tablet => Artifact::TabletScreenshots,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();
    let mut artifacts: Vec<Artifact> = Vec::new();
    for choice in cli.artifacts {
        let artifact = Artifact::from(choice);
        if !artifacts.contains(&artifact) {
            artifacts.push(artifact);
        }
    }
    if artifacts.is_empty() {
        artifacts = Artifact::ALL.to_vec();
    }

    let pages: Vec<PageSpec> = artifacts.iter().flat_map(|a| a.pages()).collect();
    let fonts = fonts_for(&pages);
    let threading = RenderThreading {
        parallel: cli.parallel,
        threads: None,
    };

    write_pages_with(&pages, Path::new("."), &fonts, &threading, |written| {
        let shown = std::path::absolute(&written.path).unwrap_or_else(|_| written.path.clone());
        println!("Wrote: {} ({} bytes)", shown.display(), written.bytes);
    })
    .context("render store listing artwork")?;

    Ok(())
}

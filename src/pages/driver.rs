use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::{
    export::png::export_png,
    foundation::error::{ArtError, ArtResult},
    pages::{
        catalog,
        model::{PageSpec, render_page},
    },
    text::{fonts::FontLibrary, layout::TextLayoutEngine},
};

/// The independent artifact scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Crescent-and-star app icon, 512 px.
    Icon,
    /// Hexagram app icon, 512 px.
    IconShatkona,
    /// 1024x500 store feature graphic.
    FeatureGraphic,
    /// 1920x1080 screenshots for the default page list.
    TabletScreenshots,
}

impl Artifact {
    pub const ALL: [Self; 4] = [
        Self::Icon,
        Self::IconShatkona,
        Self::FeatureGraphic,
        Self::TabletScreenshots,
    ];

    pub const ICON_SIZE: u32 = 512;

    pub fn pages(self) -> Vec<PageSpec> {
        match self {
            Self::Icon => vec![catalog::app_icon(Self::ICON_SIZE)],
            Self::IconShatkona => vec![catalog::app_icon_shatkona(Self::ICON_SIZE)],
            Self::FeatureGraphic => vec![catalog::feature_graphic()],
            Self::TabletScreenshots => catalog::tablet_screenshots(catalog::TABLET_PAGES),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render pages on a rayon pool, one canvas per worker.
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// An exported artifact and its size on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Font library sized to the batch: pages without text never touch system fonts.
pub fn fonts_for(pages: &[PageSpec]) -> FontLibrary {
    if pages.iter().any(PageSpec::has_text) {
        FontLibrary::system()
    } else {
        FontLibrary::from_database(usvg::fontdb::Database::new())
    }
}

/// Render `page` and export it into `out_dir` under its file name.
pub fn write_page<R: Rng>(
    page: &PageSpec,
    out_dir: &Path,
    fonts: &FontLibrary,
    engine: &mut TextLayoutEngine,
    rng: &mut R,
) -> ArtResult<WrittenFile> {
    let canvas = render_page(page, fonts, engine, rng)?;
    let path = out_dir.join(&page.file_name);
    let bytes = export_png(&canvas, &path)?;
    Ok(WrittenFile { path, bytes })
}

/// Render and export every page, stopping at the first failure.
///
/// `on_written` runs right after each successful export. Files written before a failure are
/// left in place. Results are returned in page order.
pub fn write_pages_with<F>(
    pages: &[PageSpec],
    out_dir: &Path,
    fonts: &FontLibrary,
    threading: &RenderThreading,
    on_written: F,
) -> ArtResult<Vec<WrittenFile>>
where
    F: Fn(&WrittenFile) + Sync,
{
    std::fs::create_dir_all(out_dir).map_err(|e| ArtError::io(out_dir, e))?;

    if !threading.parallel {
        let mut engine = TextLayoutEngine::new();
        let mut rng = rand::thread_rng();
        let mut out = Vec::with_capacity(pages.len());
        for page in pages {
            let written = write_page(page, out_dir, fonts, &mut engine, &mut rng)?;
            on_written(&written);
            out.push(written);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        pages
            .par_iter()
            .map_init(
                || (TextLayoutEngine::new(), StdRng::from_entropy()),
                |(engine, rng), page| {
                    let written = write_page(page, out_dir, fonts, engine, rng)?;
                    on_written(&written);
                    Ok(written)
                },
            )
            .collect::<ArtResult<Vec<_>>>()
    })
}

pub fn write_pages(
    pages: &[PageSpec],
    out_dir: &Path,
    fonts: &FontLibrary,
    threading: &RenderThreading,
) -> ArtResult<Vec<WrittenFile>> {
    write_pages_with(pages, out_dir, fonts, threading, |_| {})
}

fn build_thread_pool(threads: Option<usize>) -> ArtResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ArtError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ArtError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pages/driver.rs"]
mod tests;

//! Procedural store-listing artwork rendered on the CPU.
//!
//! Every output image is described by a [`PageSpec`] and painted back to front onto a
//! [`Canvas`]:
//!
//! 1. **Background**: solid fill or vertical gradient
//! 2. **Decoration**: a random starfield of translucent dots
//! 3. **Motif**: crescent-and-star or shatkona (hexagram) built from [`star`] and
//!    [`equilateral_triangle`] paths
//! 4. **Text**: role-based fonts, drop shadows, greedy word wrap
//! 5. **Export**: lossless RGBA PNG via [`export_png`]
//!
//! The literal page tables live in [`catalog`]; [`write_pages`] runs a batch of pages and
//! reports every written file.
//!
//! Drawing state is never implicit: every call takes its color and stroke style explicitly, and
//! randomness comes from a caller-supplied [`rand::Rng`].
#![forbid(unsafe_code)]

mod decor;
mod export;
mod foundation;
mod geometry;
mod pages;
mod render;
mod text;

pub use decor::scatter::{Dot, plan_dots};
pub use export::png::{encode_png, export_png};
pub use foundation::core::{Affine, BezPath, Circle, Ellipse, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{ArtError, ArtResult};
pub use geometry::shapes::{Polygon, equilateral_triangle, hexagram, star};
pub use pages::catalog;
pub use pages::driver::{
    Artifact, RenderThreading, WrittenFile, fonts_for, write_page, write_pages, write_pages_with,
};
pub use pages::model::{
    Background, Motif, PageSpec, Ring, StarAccent, Starfield, render_page,
};
pub use render::canvas::{Canvas, Layer};
pub use render::composite::{over, over_in_place};
pub use render::paint::{LineCap, LineJoin, Paint, StrokeStyle};
pub use text::fonts::{Font, FontLibrary, FontRole};
pub use text::layout::{
    FontMeasure, Shadow, TextBlock, TextLayoutEngine, TextMeasure, Wrap, wrap_text,
};

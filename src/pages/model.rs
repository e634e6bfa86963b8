use rand::Rng;

use crate::{
    foundation::{
        core::{Circle, Ellipse, Point, Rgba8},
        error::ArtResult,
    },
    geometry::shapes::{hexagram, star},
    render::{
        canvas::Canvas,
        paint::{Paint, StrokeStyle},
    },
    text::{
        fonts::FontLibrary,
        layout::{TextBlock, TextLayoutEngine},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Background {
    Solid(Rgba8),
    /// Top color at row 0, interpolated per channel toward `bottom`.
    VerticalGradient { top: Rgba8, bottom: Rgba8 },
}

/// Random dot decoration painted right after the background.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Starfield {
    pub count: usize,
    pub max_radius_px: f64,
    pub color: Rgba8,
}

/// Filled star centered on a crescent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarAccent {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub points: u32,
    pub color: Rgba8,
}

/// Stroked circle inside a hexagram.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    pub radius: f64,
    pub stroke_width: f64,
}

/// Brand mark drawn on every page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Motif {
    /// A moon-colored disc overpainted by a background-colored disc shifted right by
    /// `inner_offset_x`. This is a painted approximation, not a geometric subtraction.
    Crescent {
        center: Point,
        outer_radius: f64,
        inner_radius: f64,
        inner_offset_x: f64,
        color: Rgba8,
        carve_color: Rgba8,
        accent: Option<StarAccent>,
    },
    /// Two stroked equilateral triangles (up and down) with an optional inner ring.
    Shatkona {
        center: Point,
        radius: f64,
        stroke_width: f64,
        color: Rgba8,
        ring: Option<Ring>,
    },
}

impl Motif {
    pub fn draw(&self, canvas: &mut Canvas) -> ArtResult<()> {
        match *self {
            Self::Crescent {
                center,
                outer_radius,
                inner_radius,
                inner_offset_x,
                color,
                carve_color,
                accent,
            } => canvas.layer(|l| {
                l.draw_ellipse(
                    &Ellipse::from(Circle::new(center, outer_radius)),
                    &Paint::fill(color),
                );
                let carve_center = Point::new(center.x + inner_offset_x, center.y);
                l.draw_ellipse(
                    &Ellipse::from(Circle::new(carve_center, inner_radius)),
                    &Paint::fill(carve_color),
                );
                if let Some(a) = accent {
                    l.fill_path(
                        &star(center, a.outer_radius, a.inner_radius, a.points),
                        a.color,
                    );
                }
                Ok(())
            }),
            Self::Shatkona {
                center,
                radius,
                stroke_width,
                color,
                ring,
            } => canvas.layer(|l| {
                let style = StrokeStyle::round(stroke_width);
                for tri in hexagram(center, radius) {
                    l.stroke_path(&tri, color, style);
                }
                if let Some(r) = ring {
                    l.draw_ellipse(
                        &Ellipse::from(Circle::new(center, r.radius)),
                        &Paint::stroke(color, StrokeStyle::round(r.stroke_width)),
                    );
                }
                Ok(())
            }),
        }
    }
}

/// Everything needed to render one output image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    pub starfield: Option<Starfield>,
    pub motif: Motif,
    pub texts: Vec<TextBlock>,
    pub file_name: String,
}

impl PageSpec {
    pub fn has_text(&self) -> bool {
        !self.texts.is_empty()
    }
}

/// Paint a page back to front: background, starfield, motif, text.
#[tracing::instrument(skip_all, fields(file = %page.file_name, width = page.width, height = page.height))]
pub fn render_page<R: Rng>(
    page: &PageSpec,
    fonts: &FontLibrary,
    engine: &mut TextLayoutEngine,
    rng: &mut R,
) -> ArtResult<Canvas> {
    let mut canvas = Canvas::new(page.width, page.height)?;

    match page.background {
        Background::Solid(color) => canvas.fill_background(color),
        Background::VerticalGradient { top, bottom } => {
            canvas.fill_background_gradient(top, bottom)
        }
    }

    if let Some(field) = page.starfield {
        canvas.scatter_dots(rng, field.count, field.max_radius_px, field.color)?;
    }

    page.motif.draw(&mut canvas)?;

    for block in &page.texts {
        let font = fonts.select(block.role, block.size_px)?;
        let lines = canvas.draw_text_block(engine, &font, block)?;
        tracing::debug!(family = %font.family, fallback = font.fallback, lines, "drew text block");
    }

    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/pages/model.rs"]
mod tests;

use rand::Rng;

use crate::{
    foundation::{
        core::{Circle, Ellipse, Point, Rgba8},
        error::{ArtError, ArtResult},
    },
    render::{canvas::Canvas, paint::Paint},
};

/// One decoration dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
}

/// Uniform positions in `[0, width) x [0, height)` and radii in `[1, max_radius_px]`.
pub fn plan_dots<R: Rng>(
    rng: &mut R,
    count: usize,
    width: f64,
    height: f64,
    max_radius_px: f64,
) -> ArtResult<Vec<Dot>> {
    if !(max_radius_px.is_finite() && max_radius_px >= 1.0) {
        return Err(ArtError::validation("scatter max_radius_px must be >= 1"));
    }
    if !(width > 0.0 && height > 0.0) {
        return Err(ArtError::validation("scatter area must be non-empty"));
    }

    Ok((0..count)
        .map(|_| Dot {
            center: Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            radius: rng.gen_range(1.0..=max_radius_px),
        })
        .collect())
}

impl Canvas {
    /// Fill `count` random dots in a single layer and return where they landed.
    pub fn scatter_dots<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        max_radius_px: f64,
        color: Rgba8,
    ) -> ArtResult<Vec<Dot>> {
        let dots = plan_dots(
            rng,
            count,
            f64::from(self.width()),
            f64::from(self.height()),
            max_radius_px,
        )?;
        let paint = Paint::fill(color);
        self.layer(|l| {
            for dot in &dots {
                l.draw_ellipse(&Ellipse::from(Circle::new(dot.center, dot.radius)), &paint);
            }
            Ok(())
        })?;
        tracing::trace!(count = dots.len(), "scattered dots");
        Ok(dots)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decor/scatter.rs"]
mod tests;

pub use kurbo::{Affine, BezPath, Circle, Ellipse, Point, Rect, Vec2};

use crate::foundation::math::{lerp_u8, mul_div255_u8};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `0xRRGGBB`, fully opaque.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }

    pub fn from_premul(px: [u8; 4]) -> Self {
        let a = px[3];
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            v.min(255) as u8
        };
        Self {
            r: unpremul(px[0]),
            g: unpremul(px[1]),
            b: unpremul(px[2]),
            a,
        }
    }

    /// Per-channel linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp_u8(self.r, other.r, t),
            g: lerp_u8(self.g, other.g, t),
            b: lerp_u8(self.b, other.b, t),
            a: lerp_u8(self.a, other.a, t),
        }
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

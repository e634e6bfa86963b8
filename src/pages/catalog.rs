//! Literal parameters for every artifact: palette, copy, sizes, and placement.
//!
//! Positions mirror integer pixel placement, so fractional anchors are truncated.

use crate::{
    foundation::core::{Point, Rgba8},
    pages::model::{Background, Motif, PageSpec, Ring, StarAccent, Starfield},
    text::{
        fonts::FontRole,
        layout::{Shadow, TextBlock, Wrap},
    },
};

pub const APP_NAME: &str = "Vedic Light";

/// Material Blue 500.
pub const BRAND_BLUE: Rgba8 = Rgba8::from_hex(0x2196F3);
/// Material Blue 900.
pub const BRAND_BLUE_DARK: Rgba8 = Rgba8::from_hex(0x0D47A1);

pub const FEATURE_SUBTITLE: &str = "Sidereal charts, periods, lunar mansions";

pub const FEATURE_WIDTH: u32 = 1024;
pub const FEATURE_HEIGHT: u32 = 500;
pub const TABLET_WIDTH: u32 = 1920;
pub const TABLET_HEIGHT: u32 = 1080;

/// Default (title, subtitle) pairs for the tablet screenshot batch, in output order.
pub const TABLET_PAGES: &[(&str, &str)] = &[
    ("Accurate Sidereal Charts", "Swiss Ephemeris • Lahiri • On‑device"),
    ("South Indian Chart", "Fixed signs • Pisces top left • Lagna"),
    (
        "Planet Positions",
        "Degrees • Degrees in sign • Retrograde (R)",
    ),
    ("Lunar Mansions", "Nakshatra and quarter for each body"),
    (
        "Vimshottari Dasha",
        "120‑year cycle • Tap to expand sub‑periods",
    ),
    ("Antar & Pratyantar", "Expand on demand • Clear timelines"),
    ("Time & Place", "AM/PM time picker • Offline city list"),
    ("Private & Offline", "No accounts • No tracking • No internet"),
];

fn px(v: f64) -> f64 {
    v.trunc()
}

/// Crescent icon: white disc carved by an offset blue disc, white five-point star on top.
///
/// Measurements are authored for 512 px and scale linearly with `size`.
pub fn app_icon(size: u32) -> PageSpec {
    let s = f64::from(size) / 512.0;
    let c = f64::from(size / 2);
    PageSpec {
        width: size,
        height: size,
        background: Background::Solid(BRAND_BLUE),
        starfield: None,
        motif: Motif::Crescent {
            center: Point::new(c, c),
            outer_radius: 180.0 * s,
            inner_radius: 150.0 * s,
            inner_offset_x: 40.0 * s,
            color: Rgba8::WHITE,
            carve_color: BRAND_BLUE,
            accent: Some(StarAccent {
                outer_radius: 85.0 * s,
                inner_radius: 38.0 * s,
                points: 5,
                color: Rgba8::WHITE,
            }),
        },
        texts: vec![],
        file_name: format!("app_icon_{size}.png"),
    }
}

/// Shatkona icon: stroked hexagram with a thin balancing ring.
pub fn app_icon_shatkona(size: u32) -> PageSpec {
    let s = f64::from(size) / 512.0;
    let c = f64::from(size) / 2.0;
    PageSpec {
        width: size,
        height: size,
        background: Background::Solid(BRAND_BLUE),
        starfield: None,
        motif: Motif::Shatkona {
            center: Point::new(c, c),
            radius: 170.0 * s,
            stroke_width: 22.0 * s,
            color: Rgba8::WHITE,
            ring: Some(Ring {
                radius: 115.0 * s,
                stroke_width: 10.0 * s,
            }),
        },
        texts: vec![],
        file_name: format!("app_icon_{size}_shatkona.png"),
    }
}

fn brand_gradient() -> Background {
    Background::VerticalGradient {
        top: BRAND_BLUE,
        bottom: BRAND_BLUE_DARK,
    }
}

/// Hexagram with a ring at 68% of its radius, as used on the wide canvases.
fn banner_shatkona(center: Point, radius: f64) -> Motif {
    Motif::Shatkona {
        center,
        radius,
        stroke_width: 16.0,
        color: Rgba8::WHITE,
        ring: Some(Ring {
            radius: radius * 0.68,
            stroke_width: 8.0,
        }),
    }
}

pub fn feature_graphic() -> PageSpec {
    let w = f64::from(FEATURE_WIDTH);
    let h = f64::from(FEATURE_HEIGHT);
    let tx = px(w * 0.54);
    let ty = px(h * 0.45);
    PageSpec {
        width: FEATURE_WIDTH,
        height: FEATURE_HEIGHT,
        background: brand_gradient(),
        starfield: Some(Starfield {
            count: 120,
            max_radius_px: 2.0,
            color: Rgba8::WHITE.with_alpha(60),
        }),
        motif: banner_shatkona(Point::new(w * 0.32, h * 0.52), h * 0.30),
        texts: vec![
            TextBlock {
                content: APP_NAME.to_string(),
                role: FontRole::Title,
                size_px: 76.0,
                position: Point::new(tx, ty),
                color: Rgba8::WHITE,
                shadow: Some(Shadow::soft(3.0, 80)),
                wrap: None,
            },
            TextBlock {
                content: FEATURE_SUBTITLE.to_string(),
                role: FontRole::Subtitle,
                size_px: 28.0,
                position: Point::new(tx, ty + 48.0),
                color: Rgba8::WHITE.with_alpha(220),
                shadow: None,
                wrap: None,
            },
        ],
        file_name: format!("feature_graphic_{FEATURE_WIDTH}x{FEATURE_HEIGHT}.png"),
    }
}

/// File name of the `index`-th (0-based) tablet screenshot: `tablet_ss_01.png`, ...
pub fn tablet_file_name(index: usize) -> String {
    format!("tablet_ss_{:02}.png", index + 1)
}

pub fn tablet_screenshot(index: usize, title: &str, subtitle: &str) -> PageSpec {
    let w = f64::from(TABLET_WIDTH);
    let h = f64::from(TABLET_HEIGHT);
    let x = px(w * 0.45);
    let ty = px(h * 0.50);
    PageSpec {
        width: TABLET_WIDTH,
        height: TABLET_HEIGHT,
        background: brand_gradient(),
        starfield: Some(Starfield {
            count: 180,
            max_radius_px: 2.0,
            color: Rgba8::WHITE.with_alpha(70),
        }),
        motif: banner_shatkona(Point::new(w * 0.25, h * 0.55), h * 0.26),
        texts: vec![
            TextBlock {
                content: APP_NAME.to_string(),
                role: FontRole::Title,
                size_px: 52.0,
                position: Point::new(x, px(h * 0.34)),
                color: Rgba8::WHITE,
                shadow: Some(Shadow::soft(3.0, 90)),
                wrap: None,
            },
            TextBlock {
                content: title.to_string(),
                role: FontRole::Title,
                size_px: 88.0,
                position: Point::new(x, ty),
                color: Rgba8::WHITE,
                shadow: Some(Shadow::soft(4.0, 90)),
                wrap: None,
            },
            TextBlock {
                content: subtitle.to_string(),
                role: FontRole::Body,
                size_px: 34.0,
                position: Point::new(x, ty + 60.0),
                color: Rgba8::WHITE.with_alpha(230),
                shadow: None,
                wrap: Some(Wrap {
                    max_width_px: px(w * 0.48) as f32,
                    line_step_px: 42.0,
                }),
            },
        ],
        file_name: tablet_file_name(index),
    }
}

/// One page per (title, subtitle) pair, numbered in list order.
pub fn tablet_screenshots<S: AsRef<str>>(pages: &[(S, S)]) -> Vec<PageSpec> {
    pages
        .iter()
        .enumerate()
        .map(|(i, (title, subtitle))| tablet_screenshot(i, title.as_ref(), subtitle.as_ref()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pages/catalog.rs"]
mod tests;

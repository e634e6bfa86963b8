use std::{borrow::Cow, collections::HashMap};

use crate::{
    foundation::{
        core::{Point, Rgba8, Vec2},
        error::{ArtError, ArtResult},
    },
    render::canvas::{Canvas, Layer},
    text::fonts::{Font, FontRole},
};

/// Drop shadow drawn underneath text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    pub offset: Vec2,
    pub color: Rgba8,
}

impl Shadow {
    /// Dark, low-alpha shadow offset by `(d, d)`.
    pub fn soft(d: f64, alpha: u8) -> Self {
        Self {
            offset: Vec2::new(d, d),
            color: Rgba8::BLACK.with_alpha(alpha),
        }
    }
}

/// Greedy wrap parameters; each wrapped line moves the baseline down by `line_step_px`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wrap {
    pub max_width_px: f32,
    pub line_step_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextBlock {
    pub content: String,
    pub role: FontRole,
    pub size_px: f32,
    /// Baseline-left anchor of the first line.
    pub position: Point,
    pub color: Rgba8,
    pub shadow: Option<Shadow>,
    pub wrap: Option<Wrap>,
}

/// Rendered advance width of a string.
pub trait TextMeasure {
    fn measure(&mut self, text: &str) -> ArtResult<f32>;
}

/// Greedy word wrap on whitespace.
///
/// A word joins the current line while `current + " " + word` measures within `max_width_px`.
/// A word wider than the limit on its own gets a line to itself and is never split.
pub fn wrap_text(
    text: &str,
    measure: &mut dyn TextMeasure,
    max_width_px: f32,
) -> ArtResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure.measure(&candidate)? <= max_width_px {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

/// Shapes strings with parley for fonts resolved by [`FontLibrary`](crate::FontLibrary).
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: HashMap<String, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Register the font's face once and return the family name parley knows it by.
    fn family_for(&mut self, font: &Font) -> ArtResult<String> {
        if let Some(name) = self.families.get(font.key()) {
            return Ok(name.clone());
        }

        let registered = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.face.bytes.as_ref().clone()),
            None,
        );
        let family_id = registered
            .iter()
            .find(|(_, faces)| faces.iter().any(|f| f.index() == font.face.index))
            .or_else(|| registered.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| ArtError::font("no font families registered from font bytes"))?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ArtError::font("registered font family has no name"))?
            .to_string();

        self.families.insert(font.key().to_string(), name.clone());
        Ok(name)
    }

    /// Single-line layout of `text`.
    pub fn layout(&mut self, text: &str, font: &Font) -> ArtResult<parley::Layout<()>> {
        let family = self.family_for(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(font.weight)),
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    pub fn measure(&mut self, text: &str, font: &Font) -> ArtResult<f32> {
        Ok(self.layout(text, font)?.width())
    }
}

/// [`TextMeasure`] backed by real glyph advances.
pub struct FontMeasure<'a> {
    pub engine: &'a mut TextLayoutEngine,
    pub font: &'a Font,
}

impl TextMeasure for FontMeasure<'_> {
    fn measure(&mut self, text: &str) -> ArtResult<f32> {
        self.engine.measure(text, self.font)
    }
}

impl Canvas {
    /// Draw one line with its baseline-left corner at `position`.
    ///
    /// With a shadow, the same string is painted first at `position + shadow.offset`.
    pub fn draw_text(
        &mut self,
        engine: &mut TextLayoutEngine,
        font: &Font,
        text: &str,
        position: Point,
        color: Rgba8,
        shadow: Option<Shadow>,
    ) -> ArtResult<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let layout = engine.layout(text, font)?;
        self.layer(|l| {
            if let Some(s) = shadow {
                paint_layout(l, &layout, font, position + s.offset, s.color);
            }
            paint_layout(l, &layout, font, position, color);
            Ok(())
        })
    }

    /// Draw a [`TextBlock`], wrapping it when requested. Returns the number of lines drawn.
    pub fn draw_text_block(
        &mut self,
        engine: &mut TextLayoutEngine,
        font: &Font,
        block: &TextBlock,
    ) -> ArtResult<usize> {
        let lines = match block.wrap {
            Some(wrap) => {
                let mut measure = FontMeasure {
                    engine: &mut *engine,
                    font,
                };
                wrap_text(&block.content, &mut measure, wrap.max_width_px)?
            }
            None => vec![block.content.clone()],
        };
        let step = block.wrap.map(|w| w.line_step_px).unwrap_or(0.0);

        let mut baseline = block.position;
        for line in &lines {
            self.draw_text(engine, font, line, baseline, block.color, block.shadow)?;
            baseline.y += step;
        }
        Ok(lines.len())
    }
}

fn paint_layout(
    layer: &mut Layer,
    layout: &parley::Layout<()>,
    font: &Font,
    baseline_origin: Point,
    color: Rgba8,
) {
    let first_baseline = layout
        .lines()
        .next()
        .map(|line| f64::from(line.metrics().baseline))
        .unwrap_or(0.0);

    let ctx = layer.ctx_mut();
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        baseline_origin.x,
        baseline_origin.y - first_baseline,
    )));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_cpu());

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let mut x = run.offset();
            let y = run.baseline();
            let glyphs = run.glyphs().map(|g| {
                let glyph = vello_cpu::Glyph {
                    id: g.id,
                    x: x + g.x,
                    y: y - g.y,
                };
                x += g.advance;
                glyph
            });
            ctx.glyph_run(&font.face.render)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;

use crate::{
    foundation::{
        core::{BezPath, Ellipse, Rgba8},
        error::{ArtError, ArtResult},
    },
    geometry::shapes::Polygon,
    render::{
        composite::over_in_place,
        paint::{Paint, StrokeStyle},
    },
};

/// Fixed-size premultiplied RGBA8 pixel buffer; every draw call mutates it in place.
pub struct Canvas {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> ArtResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| ArtError::validation("canvas width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| ArtError::validation("canvas height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(ArtError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Raw premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Straight-alpha color of one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data().get(i..i + 4)?;
        Some(Rgba8::from_premul([px[0], px[1], px[2], px[3]]))
    }

    /// Un-premultiplied copy of the buffer for encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data().len());
        for px in self.data().chunks_exact(4) {
            let c = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }

    /// Overwrite every pixel with `color`.
    pub fn fill_background(&mut self, color: Rgba8) {
        let premul = color.to_premul();
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Overwrite every pixel with a vertical gradient; row `y` uses `t = y / height`.
    pub fn fill_background_gradient(&mut self, top: Rgba8, bottom: Rgba8) {
        let row_bytes = self.width as usize * 4;
        let height = f64::from(self.height);
        for (y, row) in self
            .pixmap
            .data_as_u8_slice_mut()
            .chunks_exact_mut(row_bytes)
            .enumerate()
        {
            let premul = top.lerp(bottom, y as f64 / height).to_premul();
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&premul);
            }
        }
    }

    /// Rasterize everything drawn into a [`Layer`] and composite it over the canvas.
    ///
    /// Draws within one layer keep their order, so a layer may batch many primitives.
    pub fn layer<F>(&mut self, draw: F) -> ArtResult<()>
    where
        F: FnOnce(&mut Layer) -> ArtResult<()>,
    {
        let mut layer = Layer {
            ctx: vello_cpu::RenderContext::new(self.width, self.height),
        };
        draw(&mut layer)?;

        let mut scratch = vello_cpu::Pixmap::new(self.width, self.height);
        layer.ctx.flush();
        layer.ctx.render_to_pixmap(&mut scratch);
        over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            scratch.data_as_u8_slice(),
        )
    }

    pub fn fill_path(&mut self, path: &Polygon, color: Rgba8) -> ArtResult<()> {
        self.layer(|l| {
            l.fill_path(path, color);
            Ok(())
        })
    }

    pub fn stroke_path(
        &mut self,
        path: &Polygon,
        color: Rgba8,
        style: StrokeStyle,
    ) -> ArtResult<()> {
        self.layer(|l| {
            l.stroke_path(path, color, style);
            Ok(())
        })
    }

    pub fn draw_shape(&mut self, path: &Polygon, paint: &Paint) -> ArtResult<()> {
        self.layer(|l| {
            l.draw_shape(path, paint);
            Ok(())
        })
    }

    /// Stroke-only or fill-only ellipse, depending on `paint`.
    pub fn draw_ellipse(&mut self, ellipse: &Ellipse, paint: &Paint) -> ArtResult<()> {
        self.layer(|l| {
            l.draw_ellipse(ellipse, paint);
            Ok(())
        })
    }
}

/// One compositing pass over a [`Canvas`].
pub struct Layer {
    ctx: vello_cpu::RenderContext,
}

impl Layer {
    pub fn fill_path(&mut self, path: &Polygon, color: Rgba8) {
        self.fill_bezpath(&path.to_bezpath(), color);
    }

    pub fn stroke_path(&mut self, path: &Polygon, color: Rgba8, style: StrokeStyle) {
        self.stroke_bezpath(&path.to_bezpath(), color, style);
    }

    pub fn draw_shape(&mut self, path: &Polygon, paint: &Paint) {
        self.draw_bezpath(&path.to_bezpath(), paint);
    }

    pub fn draw_ellipse(&mut self, ellipse: &Ellipse, paint: &Paint) {
        use kurbo::Shape as _;
        self.draw_bezpath(&ellipse.to_path(0.1), paint);
    }

    pub fn draw_bezpath(&mut self, path: &BezPath, paint: &Paint) {
        match *paint {
            Paint::Fill { color } => self.fill_bezpath(path, color),
            Paint::Stroke { color, style } => self.stroke_bezpath(path, color, style),
        }
    }

    fn fill_bezpath(&mut self, path: &BezPath, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_bezpath(&mut self, path: &BezPath, color: Rgba8, style: StrokeStyle) {
        self.reset_transform();
        self.ctx.set_paint(color.to_cpu());
        self.ctx.set_stroke(style.to_cpu());
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn reset_transform(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

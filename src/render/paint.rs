use crate::foundation::core::Rgba8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Outline parameters for a stroked shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Round caps and round joins, the style every motif outline uses.
    pub fn round(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::kurbo::Stroke {
        use vello_cpu::kurbo::{Cap, Join, Stroke};

        let cap = match self.cap {
            LineCap::Butt => Cap::Butt,
            LineCap::Round => Cap::Round,
            LineCap::Square => Cap::Square,
        };
        let join = match self.join {
            LineJoin::Miter => Join::Miter,
            LineJoin::Round => Join::Round,
            LineJoin::Bevel => Join::Bevel,
        };
        Stroke::new(self.width).with_caps(cap).with_join(join)
    }
}

/// Immutable rendering intent attached to a shape at draw time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Paint {
    Fill { color: Rgba8 },
    Stroke { color: Rgba8, style: StrokeStyle },
}

impl Paint {
    pub fn fill(color: Rgba8) -> Self {
        Self::Fill { color }
    }

    pub fn stroke(color: Rgba8, style: StrokeStyle) -> Self {
        Self::Stroke { color, style }
    }

    pub fn color(&self) -> Rgba8 {
        match *self {
            Self::Fill { color } | Self::Stroke { color, .. } => color,
        }
    }
}

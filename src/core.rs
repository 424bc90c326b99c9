use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A coordinate pair in data space.
pub type Point2D = DVec2;

/// Process-unique identity of a figure.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FigureId(pub u64);

/// Process-unique identity of an axes.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AxesId(pub u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

impl FigureId {
    pub(crate) fn next() -> Self {
        Self(next_id())
    }
}

impl AxesId {
    pub(crate) fn next() -> Self {
        Self(next_id())
    }
}

/// A resolved RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn with_a(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const DARK_GRAY: Self = Self::rgb(169, 169, 169);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

#[cfg(feature = "window")]
impl From<Color> for bevy::prelude::Color {
    #[inline]
    fn from(c: Color) -> Self {
        bevy::prelude::Color::srgba_u8(c.r, c.g, c.b, c.a)
    }
}

/// Dash pattern of a stroked line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Text with its resolved color and font size, used for titles and axis labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub color: Color,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub visible: bool,
    pub color: Color,
    pub style: LineStyle,
}

/// A coordinate range stored exactly as given; `start > end` flips the axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub start: f64,
    pub end: f64,
}

impl Limits {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// A line drawing directive with its styling already validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineCommand {
    pub points: Vec<Point2D>,
    pub color: Color,
    pub linewidth: f32,
    pub style: LineStyle,
    pub label: Option<String>,
}

/// One buffered drawing directive on an axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PlotCommand {
    Line(LineCommand),
}

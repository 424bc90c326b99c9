pub mod axes;
pub mod core;
pub mod figure;
pub mod options;
pub mod pyplot;
pub mod render;
pub mod scene;
pub mod session;
pub mod style;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("invalid color token {0:?}")]
    InvalidColorToken(String),

    #[error("invalid line style token {0:?}")]
    InvalidLineStyle(String),

    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("malformed options: {0}")]
    MalformedOptions(String),

    #[error("x and y must have the same length (x has {x}, y has {y})")]
    DimensionMismatch { x: usize, y: usize },

    #[error("figure has no axes to render")]
    NoAxes,

    #[error("rendering engine unavailable: {0}")]
    RenderingEngineUnavailable(String),

    #[error("failed to write output")]
    Output,
}

pub type Result<T> = std::result::Result<T, error_stack::Report<PlotError>>;

pub mod prelude {
    pub use crate::axes::*;
    pub use crate::core::*;
    pub use crate::figure::*;
    pub use crate::options::*;
    pub use crate::render::{Backend, Capture, Renderer, Target};
    pub use crate::scene::*;
    pub use crate::session::*;
    pub use crate::style::resolve;
    pub use crate::{PlotError, Result};
}

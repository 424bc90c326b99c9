//! The implicit "current figure" state machine behind the directive API.
//!
//! A [`Session`] is either without an active figure or has exactly one.
//! `figure`/`subplots` always replace the active figure with a new one; every
//! other directive acts on the active figure's axes, creating the figure and
//! the axes on demand. `show`/`savefig` never change the state.

use crate::axes::Axes;
use crate::core::{AxesId, FigureId};
use crate::figure::Figure;
use crate::options::{FigureOptions, GridOptions, LineOptions, SaveOptions, TextOptions};
use crate::render::{Backend, Renderer};
use crate::Result;
use error_stack::ResultExt;
use std::path::Path;
use tracing::{debug, warn};

/// Result of a display or save request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The active figure's scene was handed to the renderer
    Delivered,
    /// There was no active figure; nothing was rendered
    NoActiveFigure,
}

pub struct Session {
    active: Option<Figure>,
    renderer: Box<dyn Renderer>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(Backend))
    }
}

impl Session {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            active: None,
            renderer,
        }
    }

    /// Replace the rendering engine; the active figure is kept.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = renderer;
    }

    pub fn current_figure(&self) -> Option<&Figure> {
        self.active.as_ref()
    }

    pub fn current_figure_mut(&mut self) -> Option<&mut Figure> {
        self.active.as_mut()
    }

    /// Create a new figure and make it the active one.
    pub fn figure(&mut self, opts: FigureOptions) -> Result<&mut Figure> {
        let figure = Figure::new(opts)?;
        debug!(figure = figure.id().0, "new active figure");
        Ok(self.active.insert(figure))
    }

    /// Create a new active figure together with its axes.
    pub fn subplots(&mut self, opts: FigureOptions) -> Result<(FigureId, &mut Axes)> {
        let figure = self.figure(opts)?;
        let id = figure.id();
        Ok((id, figure.add_subplot()))
    }

    /// The active figure's axes, creating a default figure and axes if needed.
    pub fn gca(&mut self) -> Result<&mut Axes> {
        let figure = match self.active.take() {
            Some(figure) => figure,
            None => {
                let figure = Figure::new(FigureOptions::default())?;
                debug!(figure = figure.id().0, "implicit default figure");
                figure
            }
        };
        Ok(self.active.insert(figure).add_subplot())
    }

    pub fn plot(&mut self, x: &[f64], y: &[f64], opts: LineOptions) -> Result<AxesId> {
        let axes = self.gca()?;
        axes.plot(x, y, opts).attach("in directive `plot`")?;
        Ok(axes.id())
    }

    pub fn plot_y(&mut self, y: &[f64], opts: LineOptions) -> Result<AxesId> {
        let axes = self.gca()?;
        axes.plot_y(y, opts).attach("in directive `plot`")?;
        Ok(axes.id())
    }

    pub fn title(&mut self, text: impl Into<String>, opts: TextOptions) -> Result<()> {
        self.gca()?
            .set_title(text, opts)
            .attach("in directive `title`")?;
        Ok(())
    }

    pub fn xlabel(&mut self, text: impl Into<String>, opts: TextOptions) -> Result<()> {
        self.gca()?
            .set_xlabel(text, opts)
            .attach("in directive `xlabel`")?;
        Ok(())
    }

    pub fn ylabel(&mut self, text: impl Into<String>, opts: TextOptions) -> Result<()> {
        self.gca()?
            .set_ylabel(text, opts)
            .attach("in directive `ylabel`")?;
        Ok(())
    }

    pub fn xlim(&mut self, left: f64, right: f64) -> Result<()> {
        self.gca()?.set_xlim(left, right);
        Ok(())
    }

    pub fn ylim(&mut self, bottom: f64, top: f64) -> Result<()> {
        self.gca()?.set_ylim(bottom, top);
        Ok(())
    }

    pub fn grid(&mut self, visible: bool, opts: GridOptions) -> Result<()> {
        self.gca()?
            .grid(visible, opts)
            .attach("in directive `grid`")?;
        Ok(())
    }

    /// Display the active figure. The figure stays active afterwards.
    pub fn show(&mut self) -> Result<Outcome> {
        let Some(figure) = &self.active else {
            warn!("no active figure to show");
            return Ok(Outcome::NoActiveFigure);
        };
        figure.render(self.renderer.as_mut())?;
        Ok(Outcome::Delivered)
    }

    /// Save the active figure to `path`. The figure stays active afterwards.
    pub fn savefig(&mut self, path: impl AsRef<Path>, opts: SaveOptions) -> Result<Outcome> {
        let Some(figure) = &self.active else {
            warn!("no active figure to save");
            return Ok(Outcome::NoActiveFigure);
        };
        figure.save(self.renderer.as_mut(), path, opts)?;
        Ok(Outcome::Delivered)
    }
}

use crate::core::{
    AxesId, FigureId, GridConfig, Limits, LineCommand, PlotCommand, Point2D, StyledText,
};
use crate::options::{GridOptions, LineOptions, TextOptions, positive};
use crate::style::{resolve, resolve_line_style};
use crate::{PlotError, Result};
use error_stack::{Report, ResultExt};
use tracing::debug;

/// A single coordinate space and its ordered command buffer.
///
/// Commands are append-only: render order is the order they were plotted.
/// Scalar settings (title, labels, limits, grid) are last-write-wins.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    id: AxesId,
    figure: FigureId,
    commands: Vec<PlotCommand>,
    title: Option<StyledText>,
    x_label: Option<StyledText>,
    y_label: Option<StyledText>,
    x_limits: Option<Limits>,
    y_limits: Option<Limits>,
    grid: Option<GridConfig>,
}

impl Axes {
    pub(crate) fn new(figure: FigureId) -> Self {
        Self {
            id: AxesId::next(),
            figure,
            commands: vec![],
            title: None,
            x_label: None,
            y_label: None,
            x_limits: None,
            y_limits: None,
            grid: None,
        }
    }

    pub fn id(&self) -> AxesId {
        self.id
    }

    /// The figure this axes belongs to.
    pub fn figure_id(&self) -> FigureId {
        self.figure
    }

    pub fn commands(&self) -> &[PlotCommand] {
        &self.commands
    }

    pub fn title(&self) -> Option<&StyledText> {
        self.title.as_ref()
    }

    pub fn x_label(&self) -> Option<&StyledText> {
        self.x_label.as_ref()
    }

    pub fn y_label(&self) -> Option<&StyledText> {
        self.y_label.as_ref()
    }

    pub fn x_limits(&self) -> Option<Limits> {
        self.x_limits
    }

    pub fn y_limits(&self) -> Option<Limits> {
        self.y_limits
    }

    pub fn grid_config(&self) -> Option<GridConfig> {
        self.grid
    }

    /// Plot `y` versus `x` as a line.
    ///
    /// Nothing is buffered unless every argument validates.
    pub fn plot(&mut self, x: &[f64], y: &[f64], opts: LineOptions) -> Result<&mut Self> {
        if x.len() != y.len() {
            return Err(Report::new(PlotError::DimensionMismatch {
                x: x.len(),
                y: y.len(),
            }));
        }

        let color = resolve(&opts.color).attach("while resolving the line color")?;
        let linewidth = positive("linewidth", opts.linewidth)?;
        let style = resolve_line_style(&opts.linestyle)?;
        let points: Vec<Point2D> = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();

        debug!(axes = self.id.0, points = points.len(), "buffered line");
        self.commands.push(PlotCommand::Line(LineCommand {
            points,
            color,
            linewidth,
            style,
            label: opts.label,
        }));
        Ok(self)
    }

    /// Plot `y` against its indices `0..n`.
    pub fn plot_y(&mut self, y: &[f64], opts: LineOptions) -> Result<&mut Self> {
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        self.plot(&x, y, opts)
    }

    pub fn set_title(&mut self, text: impl Into<String>, opts: TextOptions) -> Result<&mut Self> {
        self.title = Some(styled_text(text.into(), &opts).attach("while setting the title")?);
        Ok(self)
    }

    pub fn set_xlabel(&mut self, text: impl Into<String>, opts: TextOptions) -> Result<&mut Self> {
        self.x_label = Some(styled_text(text.into(), &opts).attach("while setting the x label")?);
        Ok(self)
    }

    pub fn set_ylabel(&mut self, text: impl Into<String>, opts: TextOptions) -> Result<&mut Self> {
        self.y_label = Some(styled_text(text.into(), &opts).attach("while setting the y label")?);
        Ok(self)
    }

    pub fn set_xlim(&mut self, left: f64, right: f64) -> &mut Self {
        self.x_limits = Some(Limits::new(left, right));
        self
    }

    pub fn set_ylim(&mut self, bottom: f64, top: f64) -> &mut Self {
        self.y_limits = Some(Limits::new(bottom, top));
        self
    }

    /// Replace the grid configuration as a whole.
    pub fn grid(&mut self, visible: bool, opts: GridOptions) -> Result<&mut Self> {
        let color = resolve(&opts.color).attach("while resolving the grid color")?;
        let style = resolve_line_style(&opts.linestyle)?;
        self.grid = Some(GridConfig {
            visible,
            color,
            style,
        });
        Ok(self)
    }
}

fn styled_text(text: String, opts: &TextOptions) -> Result<StyledText> {
    Ok(StyledText {
        text,
        color: resolve(&opts.color)?,
        size: positive("size", opts.size)?,
    })
}

use crate::axes::Axes;
use crate::core::{Color, FigureId};
use crate::options::{FigureOptions, SaveOptions, positive};
use crate::render::{Renderer, Target};
use crate::scene::{self, Scene};
use crate::style::resolve;
use crate::Result;
use error_stack::ResultExt;
use std::path::Path;
use tracing::info;

/// The top-level container and the unit of conversion.
///
/// A figure holds at most one axes; `add_subplot` returns it once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    id: FigureId,
    size: (f64, f64),
    dpi: f64,
    background: Color,
    axes: Option<Axes>,
}

impl Figure {
    pub fn new(opts: FigureOptions) -> Result<Self> {
        let (width, height) = opts.figsize;
        let size = (positive("figsize", width)?, positive("figsize", height)?);
        let dpi = positive("dpi", opts.dpi)?;
        let background = resolve(&opts.facecolor).attach("while resolving the figure facecolor")?;

        Ok(Self {
            id: FigureId::next(),
            size,
            dpi,
            background,
            axes: None,
        })
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    /// Width and height in inches.
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn axes(&self) -> Option<&Axes> {
        self.axes.as_ref()
    }

    pub fn axes_mut(&mut self) -> Option<&mut Axes> {
        self.axes.as_mut()
    }

    /// Return the figure's axes, creating it on first call.
    pub fn add_subplot(&mut self) -> &mut Axes {
        let id = self.id;
        self.axes.get_or_insert_with(|| Axes::new(id))
    }

    /// Pixel dimensions at `dpi`, computed in `f64` and truncated toward zero.
    pub fn pixel_size(&self, dpi: f64) -> (u32, u32) {
        let (width, height) = self.size;
        ((width * dpi) as u32, (height * dpi) as u32)
    }

    /// Project the buffered state into a scene without touching it.
    pub fn to_scene(&self, dpi: Option<f64>) -> Result<Scene> {
        let dpi = match dpi {
            Some(dpi) => positive("dpi", dpi)?,
            None => self.dpi,
        };
        scene::convert(self, dpi)
    }

    /// Convert and hand the scene to `renderer` for display.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let scene = self.to_scene(None)?;
        info!(
            figure = self.id.0,
            width = scene.size_pixels.0,
            height = scene.size_pixels.1,
            artists = scene.artist_count(),
            "rendering figure"
        );
        renderer.render(scene, &Target::Window)
    }

    /// Convert and hand the scene to `renderer` for writing to `path`.
    ///
    /// A dpi override applies to this call only.
    pub fn save(
        &self,
        renderer: &mut dyn Renderer,
        path: impl AsRef<Path>,
        opts: SaveOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let scene = self.to_scene(opts.dpi)?;
        info!(
            figure = self.id.0,
            path = %path.display(),
            width = scene.size_pixels.0,
            height = scene.size_pixels.1,
            "saving figure"
        );
        renderer.render(scene, &Target::File(path.to_path_buf()))
    }
}

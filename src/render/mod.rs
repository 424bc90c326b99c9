//! The boundary to the rendering engine.
//!
//! A [`Renderer`] receives each scene by value; nothing on this side keeps a
//! reference to it afterwards.

pub mod capture;
pub mod file;
#[cfg(feature = "window")]
pub mod window;

pub use capture::Capture;

use crate::scene::Scene;
use crate::Result;
use std::path::PathBuf;

/// Where a delivered scene should end up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Display it, blocking until the viewer is dismissed
    Window,
    /// Write it to a file
    File(PathBuf),
}

pub trait Renderer: Send {
    fn render(&mut self, scene: Scene, target: &Target) -> Result<()>;
}

/// Default renderer: a Bevy window for display, the scene document writer for files.
#[derive(Clone, Copy, Debug, Default)]
pub struct Backend;

impl Renderer for Backend {
    fn render(&mut self, scene: Scene, target: &Target) -> Result<()> {
        match target {
            Target::Window => show(scene),
            Target::File(path) => file::write_scene(scene, path),
        }
    }
}

#[cfg(feature = "window")]
fn show(scene: Scene) -> Result<()> {
    window::run_scene(scene)
}

#[cfg(not(feature = "window"))]
fn show(_scene: Scene) -> Result<()> {
    Err(error_stack::Report::new(crate::PlotError::RenderingEngineUnavailable(
        "this build has no display backend; rebuild spirographicals with `--features window`"
            .into(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlotError;

    #[test]
    fn backend_rejects_unknown_file_formats() {
        let scene = Scene {
            figure: crate::core::FigureId(0),
            size_pixels: (1, 1),
            background: crate::core::Color::BLACK,
            axes: vec![],
        };
        let err = Backend
            .render(scene, &Target::File("plot.png".into()))
            .unwrap_err();
        assert!(matches!(
            err.current_context(),
            PlotError::RenderingEngineUnavailable(_)
        ));
    }
}

//! Process-wide directive functions over one shared [`Session`].
//!
//! Every call takes the session lock for its whole duration, so directives
//! from different threads are serialized in lock order. `show` holds the lock
//! until the display returns.

use crate::core::{AxesId, FigureId};
use crate::options::{FigureOptions, GridOptions, LineOptions, SaveOptions, TextOptions};
use crate::render::Renderer;
use crate::session::{Outcome, Session};
use crate::Result;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::LazyLock;

static SESSION: LazyLock<Mutex<Session>> = LazyLock::new(|| Mutex::new(Session::default()));

/// Run `f` with exclusive access to the shared session.
pub fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    f(&mut SESSION.lock())
}

/// Replace the shared session's rendering engine.
pub fn set_renderer(renderer: Box<dyn Renderer>) {
    with_session(|s| s.set_renderer(renderer))
}

pub fn figure(opts: FigureOptions) -> Result<FigureId> {
    with_session(|s| s.figure(opts).map(|f| f.id()))
}

pub fn subplots(opts: FigureOptions) -> Result<(FigureId, AxesId)> {
    with_session(|s| s.subplots(opts).map(|(fig, ax)| (fig, ax.id())))
}

pub fn plot(x: &[f64], y: &[f64], opts: LineOptions) -> Result<AxesId> {
    with_session(|s| s.plot(x, y, opts))
}

pub fn plot_y(y: &[f64], opts: LineOptions) -> Result<AxesId> {
    with_session(|s| s.plot_y(y, opts))
}

pub fn title(text: impl Into<String>, opts: TextOptions) -> Result<()> {
    with_session(|s| s.title(text, opts))
}

pub fn xlabel(text: impl Into<String>, opts: TextOptions) -> Result<()> {
    with_session(|s| s.xlabel(text, opts))
}

pub fn ylabel(text: impl Into<String>, opts: TextOptions) -> Result<()> {
    with_session(|s| s.ylabel(text, opts))
}

pub fn xlim(left: f64, right: f64) -> Result<()> {
    with_session(|s| s.xlim(left, right))
}

pub fn ylim(bottom: f64, top: f64) -> Result<()> {
    with_session(|s| s.ylim(bottom, top))
}

pub fn grid(visible: bool, opts: GridOptions) -> Result<()> {
    with_session(|s| s.grid(visible, opts))
}

pub fn show() -> Result<Outcome> {
    with_session(|s| s.show())
}

pub fn savefig(path: impl AsRef<Path>, opts: SaveOptions) -> Result<Outcome> {
    with_session(|s| s.savefig(path, opts))
}

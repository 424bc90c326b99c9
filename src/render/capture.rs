use super::{Renderer, Target};
use crate::scene::Scene;
use crate::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A renderer that records every delivered scene.
///
/// Clones share one log, so a clone can be handed to a session while the
/// original is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    delivered: Arc<Mutex<Vec<(Target, Scene)>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.lock().is_empty()
    }

    /// The most recently delivered scene.
    pub fn last(&self) -> Option<(Target, Scene)> {
        self.delivered.lock().last().cloned()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<(Target, Scene)> {
        std::mem::take(&mut *self.delivered.lock())
    }
}

impl Renderer for Capture {
    fn render(&mut self, scene: Scene, target: &Target) -> Result<()> {
        self.delivered.lock().push((target.clone(), scene));
        Ok(())
    }
}

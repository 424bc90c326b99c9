//! The renderer-facing scene and the conversion that produces it.
//!
//! A scene holds resolved values only: pixel size, colors, line style tags.
//! Conversion reads the figure and never mutates it, so converting the same
//! buffered state twice yields equal scenes.

use crate::core::{
    AxesId, Color, FigureId, GridConfig, Limits, LineStyle, PlotCommand, Point2D, StyledText,
};
use crate::figure::Figure;
use crate::{PlotError, Result};
use error_stack::Report;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub figure: FigureId,
    pub size_pixels: (u32, u32),
    pub background: Color,
    pub axes: Vec<AxesScene>,
}

impl Scene {
    pub fn artist_count(&self) -> usize {
        self.axes.iter().map(|a| a.artists.len()).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxesScene {
    pub id: AxesId,
    /// Draw order.
    pub artists: Vec<Artist>,
    pub title: Option<StyledText>,
    pub x_label: Option<StyledText>,
    pub y_label: Option<StyledText>,
    pub x_limits: Option<Limits>,
    pub y_limits: Option<Limits>,
    pub grid: Option<GridConfig>,
}

/// Data-space rectangle a renderer should map onto the axes area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: Limits,
    pub y: Limits,
}

impl AxesScene {
    /// Explicit limits win per axis; otherwise the finite extent of all points.
    pub fn view_bounds(&self) -> Option<Bounds> {
        let mut min = Point2D::splat(f64::INFINITY);
        let mut max = Point2D::splat(f64::NEG_INFINITY);
        let mut any = false;
        for artist in &self.artists {
            for p in artist.points() {
                if !p.is_finite() {
                    continue;
                }
                min = min.min(*p);
                max = max.max(*p);
                any = true;
            }
        }

        let extent = any.then(|| (Limits::new(min.x, max.x), Limits::new(min.y, max.y)));
        let x = self.x_limits.or(extent.map(|e| e.0))?;
        let y = self.y_limits.or(extent.map(|e| e.1))?;
        Some(Bounds { x, y })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Artist {
    Line(LineArtist),
}

impl Artist {
    pub fn points(&self) -> &[Point2D] {
        match self {
            Artist::Line(line) => &line.points,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineArtist {
    pub points: Vec<Point2D>,
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
    pub label: Option<String>,
}

/// Build the scene for `figure` at `dpi`.
pub(crate) fn convert(figure: &Figure, dpi: f64) -> Result<Scene> {
    let axes = figure
        .axes()
        .ok_or_else(|| Report::new(PlotError::NoAxes))?;

    let artists = axes
        .commands()
        .iter()
        .map(|command| match command {
            PlotCommand::Line(line) => Artist::Line(LineArtist {
                points: line.points.clone(),
                color: line.color,
                width: line.linewidth,
                style: line.style,
                label: line.label.clone(),
            }),
        })
        .collect();

    let axes_scene = AxesScene {
        id: axes.id(),
        artists,
        title: axes.title().cloned(),
        x_label: axes.x_label().cloned(),
        y_label: axes.y_label().cloned(),
        x_limits: axes.x_limits(),
        y_limits: axes.y_limits(),
        grid: axes.grid_config(),
    };

    Ok(Scene {
        figure: figure.id(),
        size_pixels: figure.pixel_size(dpi),
        background: figure.background(),
        axes: vec![axes_scene],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FigureOptions, GridOptions, LineOptions, TextOptions};

    fn figure() -> Figure {
        Figure::new(FigureOptions::new().figsize(10.0, 10.0).facecolor("#121212")).unwrap()
    }

    #[test]
    fn converts_commands_in_buffer_order() {
        let mut fig = figure();
        fig.add_subplot()
            .plot(&[0.0, 1.0], &[0.0, 1.0], LineOptions::new().color("red"))
            .unwrap()
            .plot(&[2.0, 3.0], &[4.0, 5.0], LineOptions::new().color("blue").label("b"))
            .unwrap();

        let scene = fig.to_scene(None).unwrap();
        assert_eq!(scene.size_pixels, (1000, 1000));
        assert_eq!(scene.background, Color::rgb(0x12, 0x12, 0x12));
        assert_eq!(scene.axes.len(), 1);

        let colors: Vec<Color> = scene.axes[0]
            .artists
            .iter()
            .map(|Artist::Line(l)| l.color)
            .collect();
        assert_eq!(colors, vec![Color::RED, Color::BLUE]);
        let Artist::Line(second) = &scene.axes[0].artists[1];
        assert_eq!(second.label.as_deref(), Some("b"));
    }

    #[test]
    fn absent_settings_stay_absent() {
        let mut fig = figure();
        fig.add_subplot();
        let axes = &fig.to_scene(None).unwrap().axes[0];
        assert!(axes.artists.is_empty());
        assert_eq!(axes.title, None);
        assert_eq!(axes.x_label, None);
        assert_eq!(axes.y_label, None);
        assert_eq!(axes.grid, None);
        assert_eq!(axes.view_bounds(), None);
    }

    #[test]
    fn conversion_is_repeatable_and_read_only() {
        let mut fig = figure();
        fig.add_subplot()
            .plot(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], LineOptions::default())
            .unwrap()
            .set_title("t", TextOptions::default())
            .unwrap()
            .grid(true, GridOptions::default())
            .unwrap();
        let before = fig.clone();

        assert_eq!(fig.to_scene(None).unwrap(), fig.to_scene(None).unwrap());
        assert_eq!(fig, before);
    }

    #[test]
    fn view_bounds_prefer_limits_and_skip_non_finite() {
        let mut fig = figure();
        fig.add_subplot()
            .plot(&[-1.0, f64::NAN, 3.0], &[2.0, 100.0, 8.0], LineOptions::default())
            .unwrap();
        let bounds = fig.to_scene(None).unwrap().axes[0].view_bounds().unwrap();
        assert_eq!(bounds.x, Limits::new(-1.0, 3.0));
        assert_eq!(bounds.y, Limits::new(2.0, 8.0));

        fig.axes_mut().unwrap().set_ylim(10.0, 0.0);
        let bounds = fig.to_scene(None).unwrap().axes[0].view_bounds().unwrap();
        assert_eq!(bounds.x, Limits::new(-1.0, 3.0));
        assert_eq!(bounds.y, Limits::new(10.0, 0.0));
    }

    #[test]
    fn scene_serializes_without_tokens() {
        let mut fig = figure();
        fig.add_subplot()
            .plot(&[0.0], &[1.0], LineOptions::new().color("cyan"))
            .unwrap();
        let json = serde_json::to_value(fig.to_scene(None).unwrap()).unwrap();
        let color = &json["axes"][0]["artists"][0]["Line"]["color"];
        assert_eq!(color["g"], 255);
        assert_eq!(color["a"], 255);
    }
}

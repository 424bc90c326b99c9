//! Interactive display of a scene in a Bevy window.
//!
//! Data space is mapped onto a padded rectangle centred on the window using
//! each axes' view bounds. Lines and grid are gizmos, texts are `Text2d`.
//! Gizmo width is set per config group, so every line is drawn at the width
//! of the scene's widest artist.
//!
//! winit allows one event loop per process, so only the first display opens
//! a window. Later displays fail with `RenderingEngineUnavailable`.

use crate::core::{Limits, LineStyle};
use crate::scene::{Artist, AxesScene, Bounds, Scene};
use crate::{PlotError, Result};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use error_stack::Report;
use std::sync::atomic::{AtomicBool, Ordering};

/// Share of the window taken by the plot area.
const PADDING: f32 = 0.85;
const GRID_DIVISIONS: usize = 10;

static EVENT_LOOP_CLAIMED: AtomicBool = AtomicBool::new(false);

#[derive(Resource)]
struct SceneRes(Scene);

fn claim_event_loop(flag: &AtomicBool) -> Result<()> {
    if flag.swap(true, Ordering::SeqCst) {
        return Err(Report::new(PlotError::RenderingEngineUnavailable(
            "a window was already opened in this process and the event loop cannot be \
             recreated; save the figure to a .json path instead"
                .into(),
        )));
    }
    Ok(())
}

/// Open a window sized to the scene and block until it is closed.
pub fn run_scene(scene: Scene) -> Result<()> {
    claim_event_loop(&EVENT_LOOP_CLAIMED)?;
    let (width, height) = scene.size_pixels;
    let background: Color = scene.background.into();

    App::new()
        .insert_resource(ClearColor(background))
        .insert_resource(SceneRes(scene))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Spirographicals".into(),
                resolution: WindowResolution::new(width, height),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, draw_scene)
        .run();
    Ok(())
}

fn setup_scene(
    mut commands: Commands,
    scene: Res<SceneRes>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    commands.spawn(Camera2d::default());

    let widest = scene
        .0
        .axes
        .iter()
        .flat_map(|a| &a.artists)
        .map(|Artist::Line(line)| line.width)
        .fold(1.0_f32, f32::max);
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = widest;

    let (width, height) = scene.0.size_pixels;
    let area = plot_area(Vec2::new(width as f32, height as f32));

    for axes in &scene.0.axes {
        spawn_texts(&mut commands, axes, area);
    }
}

fn spawn_texts(commands: &mut Commands, axes: &AxesScene, area: Rect) {
    let text = |styled: &crate::core::StyledText| {
        (
            Text2d::new(styled.text.clone()),
            TextFont {
                font_size: styled.size,
                ..default()
            },
            TextColor(styled.color.into()),
        )
    };

    if let Some(title) = &axes.title {
        commands.spawn((
            text(title),
            Transform::from_translation(Vec3::new(0.0, area.max.y + title.size, 3.0)),
        ));
    }

    if let Some(label) = &axes.x_label {
        commands.spawn((
            text(label),
            Transform::from_translation(Vec3::new(0.0, area.min.y - label.size, 2.0)),
        ));
    }

    if let Some(label) = &axes.y_label {
        commands.spawn((
            text(label),
            Transform {
                translation: Vec3::new(area.min.x - label.size, 0.0, 2.0),
                rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
                ..default()
            },
        ));
    }
}

fn draw_scene(
    mut gizmos: Gizmos,
    scene: Res<SceneRes>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let area = plot_area(Vec2::new(window.width(), window.height()));

    for axes in &scene.0.axes {
        let Some(bounds) = axes.view_bounds() else {
            continue;
        };

        if let Some(grid) = axes.grid.filter(|g| g.visible) {
            let color: Color = grid.color.into();
            for i in 0..=GRID_DIVISIONS {
                let t = i as f32 / GRID_DIVISIONS as f32;
                let x = area.min.x + t * area.width();
                let y = area.min.y + t * area.height();
                for (a, b) in stroke(Vec2::new(x, area.min.y), Vec2::new(x, area.max.y), grid.style) {
                    gizmos.line_2d(a, b, color);
                }
                for (a, b) in stroke(Vec2::new(area.min.x, y), Vec2::new(area.max.x, y), grid.style) {
                    gizmos.line_2d(a, b, color);
                }
            }
        }

        for artist in &axes.artists {
            let Artist::Line(line) = artist;
            let color: Color = line.color.into();
            let points: Vec<Vec2> = line
                .points
                .iter()
                .filter(|p| p.is_finite())
                .map(|p| data_to_world(p.x, p.y, &bounds, area))
                .collect();
            for pair in points.windows(2) {
                for (a, b) in stroke(pair[0], pair[1], line.style) {
                    gizmos.line_2d(a, b, color);
                }
            }
        }
    }
}

fn plot_area(window: Vec2) -> Rect {
    Rect::from_center_size(Vec2::ZERO, window * PADDING)
}

/// Map a data point into the plot area. A flipped range flips the axis.
fn data_to_world(x: f64, y: f64, bounds: &Bounds, area: Rect) -> Vec2 {
    Vec2::new(
        area.min.x + normalize(x, bounds.x) * area.width(),
        area.min.y + normalize(y, bounds.y) * area.height(),
    )
}

fn normalize(v: f64, limits: Limits) -> f32 {
    let span = limits.end - limits.start;
    if span == 0.0 || !span.is_finite() {
        return 0.5;
    }
    ((v - limits.start) / span) as f32
}

/// Split a segment into the visible pieces of a dash pattern, in pixels.
fn stroke(a: Vec2, b: Vec2, style: LineStyle) -> Vec<(Vec2, Vec2)> {
    let pattern: &[f32] = match style {
        LineStyle::Solid => return vec![(a, b)],
        LineStyle::Dashed => &[8.0, 6.0],
        LineStyle::Dotted => &[2.0, 4.0],
        LineStyle::DashDot => &[8.0, 4.0, 2.0, 4.0],
    };

    let length = a.distance(b);
    if length == 0.0 {
        return vec![];
    }
    let dir = (b - a) / length;

    let mut pieces = vec![];
    let mut at = 0.0;
    for (i, &step) in pattern.iter().cycle().enumerate() {
        if at >= length {
            break;
        }
        let end = (at + step).min(length);
        if i % 2 == 0 {
            pieces.push((a + dir * at, a + dir * end));
        }
        at = end;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_loop_is_claimed_once() {
        let flag = AtomicBool::new(false);
        claim_event_loop(&flag).unwrap();
        let err = claim_event_loop(&flag).unwrap_err();
        assert!(matches!(
            err.current_context(),
            PlotError::RenderingEngineUnavailable(_)
        ));
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn maps_bounds_onto_area_corners() {
        let bounds = Bounds {
            x: Limits::new(0.0, 10.0),
            y: Limits::new(10.0, 0.0),
        };
        let area = Rect::from_center_size(Vec2::ZERO, Vec2::new(100.0, 50.0));
        assert_eq!(data_to_world(0.0, 10.0, &bounds, area), Vec2::new(-50.0, -25.0));
        assert_eq!(data_to_world(10.0, 0.0, &bounds, area), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn degenerate_range_maps_to_centre() {
        let bounds = Bounds {
            x: Limits::new(1.0, 1.0),
            y: Limits::new(1.0, 1.0),
        };
        let area = Rect::from_center_size(Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert_eq!(data_to_world(1.0, 1.0, &bounds, area), Vec2::ZERO);
    }

    #[test]
    fn dashed_stroke_alternates() {
        let pieces = stroke(Vec2::ZERO, Vec2::new(20.0, 0.0), LineStyle::Dashed);
        assert_eq!(
            pieces,
            vec![
                (Vec2::ZERO, Vec2::new(8.0, 0.0)),
                (Vec2::new(14.0, 0.0), Vec2::new(20.0, 0.0)),
            ]
        );
        assert_eq!(stroke(Vec2::ZERO, Vec2::X, LineStyle::Solid).len(), 1);
        assert!(stroke(Vec2::ONE, Vec2::ONE, LineStyle::Dotted).is_empty());
    }
}

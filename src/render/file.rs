//! File consumer: writes the scene document.

use crate::scene::Scene;
use crate::{PlotError, Result};
use error_stack::{Report, ResultExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `scene` to `path`, choosing the format from the extension.
pub fn write_scene(scene: Scene, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => write_json(&scene, path),
        other => Err(Report::new(PlotError::RenderingEngineUnavailable(format!(
            "no file backend for {}; save to a .json path",
            other.map_or_else(|| "paths without an extension".to_string(), |e| format!("`.{e}` files")),
        )))),
    }
}

/// JSON has no encoding for NaN or infinities, so such a scene cannot be
/// written without losing points.
fn check_finite(scene: &Scene) -> Result<()> {
    for (axes_index, axes) in scene.axes.iter().enumerate() {
        for (command_index, artist) in axes.artists.iter().enumerate() {
            if let Some(point) = artist.points().iter().position(|p| !p.is_finite()) {
                return Err(Report::new(PlotError::Output).attach(format!(
                    "axes {axes_index}, command {command_index}, point {point} is not finite; \
                     JSON scene documents only hold finite coordinates"
                )));
            }
        }
    }
    Ok(())
}

fn write_json(scene: &Scene, path: &Path) -> Result<()> {
    check_finite(scene).attach(format!("saving {}", path.display()))?;
    let file = File::create(path)
        .change_context(PlotError::Output)
        .attach(format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, scene)
        .change_context(PlotError::Output)
        .attach(format!("serializing scene to {}", path.display()))?;
    writer
        .flush()
        .change_context(PlotError::Output)
        .attach(format!("flushing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, FigureId};

    fn scene() -> Scene {
        Scene {
            figure: FigureId(7),
            size_pixels: (640, 480),
            background: Color::BLACK,
            axes: vec![],
        }
    }

    #[test]
    fn writes_json_document() {
        let path = std::env::temp_dir().join(format!("spiro-scene-{}.json", std::process::id()));
        write_scene(scene(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(back, scene());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn non_finite_points_are_rejected_before_writing() {
        let mut fig =
            crate::figure::Figure::new(crate::options::FigureOptions::default()).unwrap();
        fig.add_subplot()
            .plot(&[0.0, 1.0], &[0.0, 1.0], crate::options::LineOptions::default())
            .unwrap()
            .plot(&[0.0, f64::NAN, 2.0], &[1.0, 2.0, 3.0], crate::options::LineOptions::default())
            .unwrap();
        let scene = fig.to_scene(None).unwrap();

        let path = std::env::temp_dir().join(format!("spiro-nan-{}.json", std::process::id()));
        let err = write_scene(scene, &path).unwrap_err();
        assert_eq!(err.current_context(), &PlotError::Output);
        let report = format!("{err:?}");
        assert!(report.contains("axes 0, command 1, point 1"), "{report}");
        assert!(!path.exists());
    }

    #[test]
    fn unsupported_extension_names_it() {
        let err = write_scene(scene(), Path::new("figure.PNG")).unwrap_err();
        match err.current_context() {
            PlotError::RenderingEngineUnavailable(msg) => assert!(msg.contains(".png")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unwritable_path_is_an_output_error() {
        let path = Path::new("/nonexistent-dir/for/sure/scene.json");
        let err = write_scene(scene(), path).unwrap_err();
        assert_eq!(err.current_context(), &PlotError::Output);
    }
}

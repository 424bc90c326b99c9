//! Option structures accepted by the directives.
//!
//! Each structure lists every recognized option with its default. They can be
//! built with chained setters or deserialized from JSON, in which case unknown
//! keys are rejected.

use crate::{PlotError, Result};
use error_stack::Report;
use serde::Deserialize;
use serde::de::DeserializeOwned;

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| Report::new(PlotError::MalformedOptions(e.to_string())))
}

pub(crate) fn positive<T>(name: &'static str, value: T) -> Result<T>
where
    T: Copy + Into<f64> + std::fmt::Display,
{
    let v: f64 = value.into();
    if v.is_finite() && v > 0.0 {
        Ok(value)
    } else {
        Err(Report::new(PlotError::InvalidOption {
            name,
            reason: format!("must be a positive finite number, got {value}"),
        }))
    }
}

/// Figure construction options
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigureOptions {
    /// Width and height in inches
    pub figsize: (f64, f64),
    /// Pixels per inch
    pub dpi: f64,
    /// Background color token
    pub facecolor: String,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            figsize: (8.0, 8.0),
            dpi: 100.0,
            facecolor: "#121212".into(),
        }
    }
}

impl FigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }

    pub fn figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = (width, height);
        self
    }

    pub fn dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn facecolor(mut self, token: impl Into<String>) -> Self {
        self.facecolor = token.into();
        self
    }
}

/// Options for a line plot
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineOptions {
    pub color: String,
    pub linewidth: f32,
    pub linestyle: String,
    pub label: Option<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            color: "#00FFFF".into(),
            linewidth: 1.5,
            linestyle: "-".into(),
            label: None,
        }
    }
}

impl LineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }

    pub fn color(mut self, token: impl Into<String>) -> Self {
        self.color = token.into();
        self
    }

    pub fn linewidth(mut self, width: f32) -> Self {
        self.linewidth = width;
        self
    }

    pub fn linestyle(mut self, token: impl Into<String>) -> Self {
        self.linestyle = token.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Options for titles and axis labels
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextOptions {
    pub color: String,
    pub size: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            color: "white".into(),
            size: 12.0,
        }
    }
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }

    pub fn color(mut self, token: impl Into<String>) -> Self {
        self.color = token.into();
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Options for grid lines
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridOptions {
    pub color: String,
    pub linestyle: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            color: "#80808080".into(),
            linestyle: "--".into(),
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }

    pub fn color(mut self, token: impl Into<String>) -> Self {
        self.color = token.into();
        self
    }

    pub fn linestyle(mut self, token: impl Into<String>) -> Self {
        self.linestyle = token.into();
        self
    }
}

/// Options for saving a figure
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaveOptions {
    /// Overrides the figure's dpi for this save only
    pub dpi: Option<f64>,
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }

    pub fn dpi(mut self, dpi: f64) -> Self {
        self.dpi = Some(dpi);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let opts = LineOptions::from_json(r#"{ "color": "red" }"#).unwrap();
        assert_eq!(opts.color, "red");
        assert_eq!(opts.linewidth, 1.5);
        assert_eq!(opts.label, None);
    }

    #[test]
    fn json_rejects_unknown_keys() {
        let err = LineOptions::from_json(r#"{ "colour": "red" }"#).unwrap_err();
        assert!(matches!(err.current_context(), PlotError::MalformedOptions(_)));

        let err = FigureOptions::from_json(r#"{ "figsize": [4, 3], "alpha": 1 }"#).unwrap_err();
        assert!(matches!(err.current_context(), PlotError::MalformedOptions(_)));
    }

    #[test]
    fn figure_options_from_json() {
        let opts = FigureOptions::from_json(r##"{ "figsize": [4, 3], "facecolor": "#000000" }"##)
            .unwrap();
        assert_eq!(opts, FigureOptions::new().figsize(4.0, 3.0).facecolor("#000000"));
    }

    #[test]
    fn positive_rejects_zero_negative_and_nan() {
        assert_eq!(positive("linewidth", 2.0_f32).unwrap(), 2.0);
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = positive("linewidth", bad).unwrap_err();
            assert!(matches!(
                err.current_context(),
                PlotError::InvalidOption { name: "linewidth", .. }
            ));
        }
    }
}

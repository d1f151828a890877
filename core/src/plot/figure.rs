use crate::waveform::{Domain, WaveSet};
use serde::{Deserialize, Serialize};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    /// Discrete markers, one per sample.
    Points,
    /// A polyline through consecutive samples.
    Line,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Blue,
    Red,
    Green,
    Yellow,
}

impl SeriesColor {
    /// Linear RGB components in `0.0..=1.0`.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            SeriesColor::Blue => [0.2, 0.4, 0.95],
            SeriesColor::Red => [0.9, 0.2, 0.2],
            SeriesColor::Green => [0.2, 0.75, 0.3],
            SeriesColor::Yellow => [0.95, 0.85, 0.1],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub style: DrawStyle,
    pub color: SeriesColor,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotSeries {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Everything a backend needs to draw one shared coordinate plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub title: String,
    pub series: Vec<PlotSeries>,
}

impl Figure {
    /// y1..y3 as points in blue, red, green; y4 as a yellow line.
    pub fn from_waves(domain: &Domain, waves: &WaveSet) -> Self {
        let styles = [
            (DrawStyle::Points, SeriesColor::Blue),
            (DrawStyle::Points, SeriesColor::Red),
            (DrawStyle::Points, SeriesColor::Green),
            (DrawStyle::Line, SeriesColor::Yellow),
        ];
        let x = domain.to_vec();
        let series = waves
            .labelled()
            .into_iter()
            .zip(styles)
            .map(|((label, values), (style, color))| PlotSeries {
                label: label.to_string(),
                style,
                color,
                x: x.clone(),
                y: values.to_vec(),
            })
            .collect();

        Self {
            title: "Superposed Sine Waves".into(),
            series,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::enclosing(self.series.iter().flat_map(|s| s.points()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Axis-aligned data rectangle shared by every series of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn enclosing(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut bounds = Bounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for (x, y) in points {
            bounds.x_min = bounds.x_min.min(x);
            bounds.x_max = bounds.x_max.max(x);
            bounds.y_min = bounds.y_min.min(y);
            bounds.y_max = bounds.y_max.max(y);
        }
        if !bounds.x_min.is_finite() {
            bounds.x_min = 0.0;
            bounds.x_max = 0.0;
        }
        if !bounds.y_min.is_finite() {
            bounds.y_min = 0.0;
            bounds.y_max = 0.0;
        }
        bounds
    }

    fn x_span(&self) -> f64 {
        let span = self.x_max - self.x_min;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    fn y_span(&self) -> f64 {
        let span = self.y_max - self.y_min;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// Maps a data point into a `width` x `height` pixel rectangle, y down.
    pub fn project(&self, x: f64, y: f64, width: f32, height: f32) -> (f32, f32) {
        let nx = (x - self.x_min) / self.x_span();
        let ny = (y - self.y_min) / self.y_span();
        (
            (nx * width as f64) as f32,
            (height as f64 - ny * height as f64) as f32,
        )
    }

    pub fn contains_x(&self, x: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x)
    }

    pub fn contains_y(&self, y: f64) -> bool {
        (self.y_min..=self.y_max).contains(&y)
    }
}

use super::point::TaggedPoint;

/// Both axes of a Ramachandran plot span a full turn.
pub const AXIS_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Nominal edge length (inches) of a single-series plot.
pub const SINGLE_SERIES_SIZE_INCHES: f64 = 4.0;
/// Nominal edge length (inches) of a plot with named sub-series.
pub const MULTI_SERIES_SIZE_INCHES: f64 = 5.0;

/// Everything a renderer needs besides the points themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotMetadata {
    pub title: String,
    /// Output file name without extension; the renderer picks the extension.
    pub file_stem: String,
    pub x_label: String,
    pub y_label: String,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
    pub grid: bool,
    pub width_inches: f64,
    pub height_inches: f64,
}

impl PlotMetadata {
    /// Standard phi/psi metadata. Plots built from named sub-series get the larger canvas.
    pub fn ramachandran(title: &str, file_stem: &str, multi_series: bool) -> Self {
        let size = if multi_series {
            MULTI_SERIES_SIZE_INCHES
        } else {
            SINGLE_SERIES_SIZE_INCHES
        };
        Self {
            title: title.to_string(),
            file_stem: file_stem.to_string(),
            x_label: "Phi".to_string(),
            y_label: "Psi".to_string(),
            x_bounds: AXIS_BOUNDS,
            y_bounds: AXIS_BOUNDS,
            grid: true,
            width_inches: size,
            height_inches: size,
        }
    }
}

/// A named group of points sharing one color (or one color ramp).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<TaggedPoint>,
}

/// A fully assembled plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub metadata: PlotMetadata,
    pub series: Vec<Series>,
}

impl Plot {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, &TaggedPoint)> {
        self.series
            .iter()
            .enumerate()
            .flat_map(|(i, s)| s.points.iter().map(move |p| (i, p)))
    }
}

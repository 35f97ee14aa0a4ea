use super::traits::Renderer;
use crate::core::models::plot::Plot;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvRenderError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

#[derive(Debug, Serialize)]
struct PointRecord<'a> {
    series: &'a str,
    residue_id: isize,
    residue_name: &'a str,
    phi: f64,
    psi: f64,
    r: u8,
    g: u8,
    b: u8,
    shape: &'static str,
    tag_rank: Option<usize>,
}

/// Writes every point of a plot as one CSV row.
pub fn write_points<W: Write>(plot: &Plot, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for series in &plot.series {
        for point in &series.points {
            wtr.serialize(PointRecord {
                series: &series.name,
                residue_id: point.residue_id,
                residue_name: &point.residue_name,
                phi: point.angle.phi,
                psi: point.angle.psi,
                r: point.color.r,
                g: point.color.g,
                b: point.color.b,
                shape: point.shape.as_str(),
                tag_rank: point.tag_rank,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Renders plots as `<dir>/<file_stem>.csv` tables.
#[derive(Debug, Clone)]
pub struct CsvRenderer {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvRenderer {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Paths of the files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn output_path(&self, plot: &Plot) -> PathBuf {
        self.dir.join(format!("{}.csv", plot.metadata.file_stem))
    }
}

impl Renderer for CsvRenderer {
    type Error = CsvRenderError;

    fn render(&mut self, plot: &Plot) -> Result<(), Self::Error> {
        let path = self.output_path(plot);
        let display = path.to_string_lossy().to_string();
        let file = File::create(&path).map_err(|e| CsvRenderError::Io {
            path: display.clone(),
            source: e,
        })?;
        write_points(plot, io::BufWriter::new(file)).map_err(|e| CsvRenderError::Csv {
            path: display,
            source: e,
        })?;
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::plot::{PlotMetadata, Series};
    use crate::core::models::point::{DihedralAngle, TaggedPoint};
    use crate::core::style::color::Rgb;
    use crate::core::style::shape::Shape;
    use tempfile::tempdir;

    fn sample_plot(stem: &str) -> Plot {
        Plot {
            metadata: PlotMetadata::ramachandran("test", stem, false),
            series: vec![Series {
                name: "all".to_string(),
                points: vec![
                    TaggedPoint {
                        angle: DihedralAngle::new(-60.0, -45.0),
                        tag_rank: None,
                        color: Rgb::new(255, 0, 0),
                        shape: Shape::Dot,
                        residue_id: 2,
                        residue_name: "ALA".to_string(),
                    },
                    TaggedPoint {
                        angle: DihedralAngle::new(-120.0, 130.0),
                        tag_rank: Some(0),
                        color: Rgb::new(0, 0, 255),
                        shape: Shape::Pyramid,
                        residue_id: 3,
                        residue_name: "GLY".to_string(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn write_points_emits_header_and_one_row_per_point() {
        let mut buf = Vec::new();
        write_points(&sample_plot("x"), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "series,residue_id,residue_name,phi,psi,r,g,b,shape,tag_rank"
        );
        assert_eq!(lines[1], "all,2,ALA,-60.0,-45.0,255,0,0,dot,");
        assert_eq!(lines[2], "all,3,GLY,-120.0,130.0,0,0,255,pyramid,0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn renderer_writes_file_named_after_stem() {
        let dir = tempdir().unwrap();
        let mut renderer = CsvRenderer::new(dir.path());
        renderer.render(&sample_plot("rama")).unwrap();

        let expected = dir.path().join("rama.csv");
        assert_eq!(renderer.written(), &[expected.clone()]);
        let content = std::fs::read_to_string(expected).unwrap();
        assert!(content.contains("GLY"));
    }

    #[test]
    fn renderer_reports_io_error_for_missing_directory() {
        let dir = tempdir().unwrap();
        let mut renderer = CsvRenderer::new(dir.path().join("does/not/exist"));
        let result = renderer.render(&sample_plot("rama"));
        assert!(matches!(result, Err(CsvRenderError::Io { .. })));
        assert!(renderer.written().is_empty());
    }
}

use crate::core::io::traits::Renderer;
use crate::core::models::atom::AtomSequence;
use crate::core::models::plot::{Plot, PlotMetadata, Series};
use crate::core::models::site::DihedralSite;
use crate::engine::assembler::PlotAssembler;
use crate::engine::config::{ConfigError, PlotConfig};
use crate::engine::error::PlotError;
use crate::engine::evaluator::CoordinateLookup;
use crate::engine::filter::{FilteredSites, ResidueFilter};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scanner::BackboneScanner;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

/// Name of the only series of a single-series plot.
pub const SINGLE_SERIES_NAME: &str = "all";

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render plot '{file_stem}': {source}")]
    Render {
        file_stem: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Scans, filters, evaluates and styles everything `config` asks for.
///
/// Without configured sub-series the plot has one series named
/// [`SINGLE_SERIES_NAME`], colored point by point along the chain. Otherwise every
/// configured sub-series becomes one uniformly colored series, in configuration
/// order. Tags always refer to the scanned (unfiltered) site list and are remapped
/// through the series' residue filter.
///
/// # Errors
///
/// Returns the first fatal [`PlotError`] raised by any stage.
#[instrument(skip_all, name = "plot_assembly", fields(title = %config.title))]
pub fn build_plot<L>(
    atoms: &AtomSequence,
    coords: &L,
    config: &PlotConfig,
    reporter: &ProgressReporter,
) -> Result<Plot, PlotError>
where
    L: CoordinateLookup + Sync + ?Sized,
{
    // === Phase 1: Backbone scan ===
    reporter.report(Progress::PhaseStart { name: "Scanning" });
    let sites = BackboneScanner::new(&config.chains, &config.residues).scan(atoms)?;
    info!(sites = sites.len(), "Resolved dihedral sites.");
    reporter.report(Progress::SitesResolved { count: sites.len() });
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Series selection ===
    reporter.report(Progress::PhaseStart { name: "Filtering" });
    let (names, assembler, selected) = if config.is_multi_series() {
        let selected = config
            .series
            .iter()
            .map(|s| select(&sites, s.residue_filter.as_ref(), &s.tags))
            .collect::<Result<Vec<_>, _>>()?;
        let names = config.series.iter().map(|s| s.name.clone()).collect();
        (names, PlotAssembler::parts(), selected)
    } else {
        let selected = select(&sites, config.residue_filter.as_ref(), &config.tags)?;
        (
            vec![SINGLE_SERIES_NAME.to_string()],
            PlotAssembler::single(),
            vec![selected],
        )
    };
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Evaluation and styling ===
    reporter.report(Progress::PhaseStart { name: "Assembly" });
    let (series_sites, tags): (Vec<Vec<DihedralSite>>, Vec<Vec<usize>>) =
        selected.into_iter().unzip();
    let assembled = assembler.assemble(&series_sites, coords, Some(tags.as_slice()))?;

    let series: Vec<Series> = names
        .into_iter()
        .zip(assembled)
        .enumerate()
        .map(|(index, (name, points))| {
            reporter.report(Progress::SeriesAssembled {
                index,
                points: points.len(),
            });
            Series { name, points }
        })
        .collect();
    reporter.report(Progress::PhaseFinish);

    let plot = Plot {
        metadata: PlotMetadata::ramachandran(
            &config.title,
            &config.file_stem,
            config.is_multi_series(),
        ),
        series,
    };
    info!(
        series = plot.series.len(),
        points = plot.point_count(),
        "Plot assembled."
    );
    Ok(plot)
}

/// Builds the plot described by `config` and hands it to `renderer`.
///
/// The renderer is only invoked once the plot is complete; on any assembly error
/// it is never called.
///
/// # Errors
///
/// Returns [`WorkflowError::Plot`] for assembly failures and
/// [`WorkflowError::Render`] if the renderer rejects the plot.
#[instrument(skip_all, name = "ramachandran_workflow")]
pub fn run<L, R>(
    atoms: &AtomSequence,
    coords: &L,
    config: &PlotConfig,
    mut renderer: R,
    reporter: &ProgressReporter,
) -> Result<Plot, WorkflowError>
where
    L: CoordinateLookup + Sync + ?Sized,
    R: Renderer,
{
    let plot = build_plot(atoms, coords, config, reporter)?;

    reporter.report(Progress::PhaseStart { name: "Rendering" });
    renderer
        .render(&plot)
        .map_err(|e| WorkflowError::Render {
            file_stem: plot.metadata.file_stem.clone(),
            source: Box::new(e),
        })?;
    reporter.report(Progress::PhaseFinish);

    info!(file_stem = %plot.metadata.file_stem, "Plot rendered.");
    Ok(plot)
}

/// Like [`run`], reading the configuration from a TOML file first.
pub fn run_with_config_file<L, R>(
    atoms: &AtomSequence,
    coords: &L,
    config_path: &Path,
    renderer: R,
    reporter: &ProgressReporter,
) -> Result<Plot, WorkflowError>
where
    L: CoordinateLookup + Sync + ?Sized,
    R: Renderer,
{
    let config = PlotConfig::load(config_path)?;
    reporter.report(Progress::Message(format!(
        "Loaded plot configuration from '{}'.",
        config_path.display()
    )));
    run(atoms, coords, &config, renderer, reporter)
}

fn select(
    sites: &[DihedralSite],
    filter: Option<&ResidueFilter>,
    tags: &[usize],
) -> Result<(Vec<DihedralSite>, Vec<usize>), PlotError> {
    let filtered = match filter {
        Some(filter) => filter.apply(sites),
        None => FilteredSites::unfiltered(sites),
    };
    let tags = filtered.remap_tags(tags)?;
    Ok((filtered.sites, tags))
}

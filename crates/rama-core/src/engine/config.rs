use crate::core::models::atom::NO_CHAIN;
use crate::engine::filter::ResidueFilter;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Upper bound sentinel meaning "to the end of the chain" in a two-element range.
pub const OPEN_UPPER_BOUND: isize = -1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Chains to scan. An empty filter accepts every chain.
///
/// Atoms without a chain marker ([`NO_CHAIN`]) are accepted by every filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct ChainFilter {
    chains: Vec<char>,
}

impl ChainFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only<I: IntoIterator<Item = char>>(chains: I) -> Self {
        Self {
            chains: chains.into_iter().collect(),
        }
    }

    pub fn accepts(&self, chain: char) -> bool {
        self.chains.is_empty() || chain == NO_CHAIN || self.chains.contains(&chain)
    }

    pub fn is_all(&self) -> bool {
        self.chains.is_empty()
    }
}

impl From<String> for ChainFilter {
    fn from(s: String) -> Self {
        Self::only(s.chars().filter(|c| !c.is_whitespace()))
    }
}

impl From<&str> for ChainFilter {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

/// Which residues (by the residue id of their N atom) produce dihedral sites.
///
/// The selector is a plain list of ids read in two ways at once: when it has
/// exactly two elements they are an inclusive `[start, end]` range (an `end` of
/// [`OPEN_UPPER_BOUND`] means "to the end of the chain"), and independently any id
/// listed verbatim is selected. A residue is selected if either reading accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ResidueSelector {
    ids: Vec<isize>,
}

impl Default for ResidueSelector {
    fn default() -> Self {
        Self::all()
    }
}

impl ResidueSelector {
    /// Selects every residue.
    pub fn all() -> Self {
        Self::range_to_end(isize::MIN)
    }

    /// Inclusive range `[start, end]`.
    pub fn range(start: isize, end: isize) -> Self {
        Self {
            ids: vec![start, end],
        }
    }

    /// Everything from `start` to the end of the chain.
    pub fn range_to_end(start: isize) -> Self {
        Self::range(start, OPEN_UPPER_BOUND)
    }

    /// Explicit list of residue ids.
    pub fn ids<I: IntoIterator<Item = isize>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.ids
    }

    pub fn selects(&self, residue_id: isize) -> bool {
        self.in_range(residue_id) || self.ids.contains(&residue_id)
    }

    fn in_range(&self, residue_id: isize) -> bool {
        match self.ids.as_slice() {
            &[start, end] => {
                let end = if end == OPEN_UPPER_BOUND {
                    isize::MAX
                } else {
                    end
                };
                residue_id >= start && residue_id <= end
            }
            _ => false,
        }
    }
}

/// One named sub-series of a multi-series plot.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesConfig {
    pub name: String,
    /// Residue-name filter applied to the scanned sites; `None` keeps all of them.
    pub residue_filter: Option<ResidueFilter>,
    /// Sites to highlight, as indices into the unfiltered scanned site list.
    pub tags: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub file_stem: String,
    pub chains: ChainFilter,
    pub residues: ResidueSelector,
    /// Residue-name filter for single-series plots.
    pub residue_filter: Option<ResidueFilter>,
    /// Highlighted sites for single-series plots, as indices into the scanned site list.
    pub tags: Vec<usize>,
    /// Named sub-series. When empty, a single series is plotted.
    pub series: Vec<SeriesConfig>,
}

impl PlotConfig {
    pub fn is_multi_series(&self) -> bool {
        !self.series.is_empty()
    }

    /// Loads a plot configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML, has
    /// unknown keys, or lacks a required parameter.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FilePlotConfig = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<string>".to_string(),
            source: e,
        })?;
        file.into_builder().build()
    }
}

#[derive(Default)]
pub struct PlotConfigBuilder {
    title: Option<String>,
    file_stem: Option<String>,
    chains: Option<ChainFilter>,
    residues: Option<ResidueSelector>,
    residue_filter: Option<ResidueFilter>,
    tags: Vec<usize>,
    series: Vec<SeriesConfig>,
}

impl PlotConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
    pub fn file_stem(mut self, stem: &str) -> Self {
        self.file_stem = Some(stem.to_string());
        self
    }
    pub fn chains(mut self, chains: ChainFilter) -> Self {
        self.chains = Some(chains);
        self
    }
    pub fn residues(mut self, residues: ResidueSelector) -> Self {
        self.residues = Some(residues);
        self
    }
    pub fn residue_filter(mut self, filter: ResidueFilter) -> Self {
        self.residue_filter = Some(filter);
        self
    }
    pub fn tags(mut self, tags: Vec<usize>) -> Self {
        self.tags = tags;
        self
    }
    pub fn add_series(mut self, series: SeriesConfig) -> Self {
        self.series.push(series);
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        let title = self.title.ok_or(ConfigError::MissingParameter("title"))?;
        let file_stem = self.file_stem.unwrap_or_else(|| default_file_stem(&title));
        if file_stem.is_empty() {
            return Err(ConfigError::MissingParameter("file_stem"));
        }
        Ok(PlotConfig {
            title,
            file_stem,
            chains: self.chains.unwrap_or_default(),
            residues: self.residues.unwrap_or_default(),
            residue_filter: self.residue_filter,
            tags: self.tags,
            series: self.series,
        })
    }
}

fn default_file_stem(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FilePlotConfig {
    title: Option<String>,
    file_stem: Option<String>,
    chains: Option<ChainFilter>,
    residues: Option<ResidueSelector>,
    residue_filter: Option<ResidueFilter>,
    #[serde(default)]
    tags: Vec<usize>,
    #[serde(default)]
    series: Vec<FileSeriesConfig>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileSeriesConfig {
    name: String,
    residue_filter: Option<ResidueFilter>,
    #[serde(default)]
    tags: Vec<usize>,
}

impl From<FileSeriesConfig> for SeriesConfig {
    fn from(f: FileSeriesConfig) -> Self {
        Self {
            name: f.name,
            residue_filter: f.residue_filter,
            tags: f.tags,
        }
    }
}

impl FilePlotConfig {
    fn into_builder(self) -> PlotConfigBuilder {
        let mut builder = PlotConfigBuilder::new().tags(self.tags);
        if let Some(title) = self.title {
            builder = builder.title(&title);
        }
        if let Some(stem) = self.file_stem {
            builder = builder.file_stem(&stem);
        }
        if let Some(chains) = self.chains {
            builder = builder.chains(chains);
        }
        if let Some(residues) = self.residues {
            builder = builder.residues(residues);
        }
        if let Some(filter) = self.residue_filter {
            builder = builder.residue_filter(filter);
        }
        for series in self.series {
            builder = builder.add_series(series.into());
        }
        builder
    }
}

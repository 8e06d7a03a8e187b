//! TOML configuration for the `nodesim` binary.

use std::io;
use std::path::{Path, PathBuf};

use nodesim_core::Point;
use nodesim_paths::{Algorithm, Distance, SearchOptions, UnknownAlgorithm, UnknownDistance};
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "nodesim.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("layout kind \"file\" requires [layout] path")]
    MissingLayoutPath,

    #[error(transparent)]
    Algorithm(#[from] UnknownAlgorithm),

    #[error(transparent)]
    Distance(#[from] UnknownDistance),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Grid,
    Octagon,
    File,
}

/// Where the layout comes from.
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub kind: LayoutKind,

    /// Grid side length
    #[serde(default = "default_size")]
    pub size: u32,

    /// Grid edge length
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Octagon recursion depth
    #[serde(default = "default_depth")]
    pub depth: usize,

    /// Layout file, for `kind = "file"`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchConfig {
    /// Start coordinates (default: first node of the layout)
    #[serde(default)]
    pub start: Option<[i32; 2]>,

    /// Goal coordinates (default: last node of the layout)
    #[serde(default)]
    pub goal: Option<[i32; 2]>,

    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<String>,

    /// Metric for the A* heuristic
    #[serde(default = "default_heuristic")]
    pub heuristic: String,

    #[serde(default = "default_heuristic_scale")]
    pub heuristic_scale: f64,

    /// Timed runs per algorithm
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default)]
    pub max_expansions: Option<usize>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_render")]
    pub render: bool,

    /// Layouts wider or taller than this are not drawn
    #[serde(default = "default_render_limit")]
    pub render_limit: u32,

    /// Save the layout here after the searches
    #[serde(default)]
    pub save: Option<PathBuf>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            kind: LayoutKind::default(),
            size: default_size(),
            weight: default_weight(),
            depth: default_depth(),
            path: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: None,
            goal: None,
            algorithms: default_algorithms(),
            heuristic: default_heuristic(),
            heuristic_scale: default_heuristic_scale(),
            iterations: default_iterations(),
            max_expansions: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            render: default_render(),
            render_limit: default_render_limit(),
            save: None,
        }
    }
}

fn default_size() -> u32 {
    5
}
fn default_weight() -> f64 {
    1.0
}
fn default_depth() -> usize {
    1
}
fn default_algorithms() -> Vec<String> {
    ["dijkstra", "astar", "astar-zero"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_heuristic() -> String {
    "manhattan".to_string()
}
fn default_heuristic_scale() -> f64 {
    1.0
}
fn default_iterations() -> u32 {
    1
}
fn default_render() -> bool {
    true
}
fn default_render_limit() -> u32 {
    60
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it
    /// exists, otherwise the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            log::info!("loading config from {}", path.display());
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::info!("loading config from {DEFAULT_CONFIG_FILE}");
            Self::load(fallback)
        } else {
            log::info!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn layout_path(&self) -> Result<&Path, ConfigError> {
        self.layout
            .path
            .as_deref()
            .ok_or(ConfigError::MissingLayoutPath)
    }

    pub fn algorithms(&self) -> Result<Vec<Algorithm>, ConfigError> {
        let algs = self
            .search
            .algorithms
            .iter()
            .map(|s| s.parse())
            .collect::<Result<_, UnknownAlgorithm>>()?;
        Ok(algs)
    }

    pub fn distance(&self) -> Result<Distance, ConfigError> {
        Ok(self.search.heuristic.parse()?)
    }

    pub fn start(&self) -> Option<Point> {
        self.search.start.map(|[x, y]| Point::new(x, y))
    }

    pub fn goal(&self) -> Option<Point> {
        self.search.goal.map(|[x, y]| Point::new(x, y))
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_expansions: self.search.max_expansions,
        }
    }
}

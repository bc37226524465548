use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::parser::Markers;

/// Load markers from a JSON file. Fields left out keep their defaults.
pub fn load_markers(path: &Path) -> Result<Markers> {
    let text = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let markers = Markers::from_json_str(&text).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    markers.validate()?;

    info!(config = %path.display(), "loaded marker config");
    Ok(markers)
}

/// Markers from `path` if given, else the defaults.
pub fn resolve_markers(path: Option<&Path>) -> Result<Markers> {
    match path {
        Some(p) => load_markers(p),
        None => Ok(Markers::default()),
    }
}

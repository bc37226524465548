//! Reading the source, keeping a backup, writing the result.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::parser::Markers;
use crate::rewrite::{rewrite_document, RewriteOptions, RewriteReport};

/// Reference location of the file this tool was written for.
pub const DEFAULT_SOURCE_PATH: &str = "lib/features/onboarding/screens/onboarding_screen.dart";

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// `<path>.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".backup");
    PathBuf::from(name)
}

/// Write the pre-rewrite content next to the source, replacing any older backup.
pub fn write_backup(path: &Path, content: &str) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::write(&backup, content).map_err(|source| Error::Backup {
        path: backup.clone(),
        source,
    })?;
    info!(backup = %backup.display(), "backup written");
    Ok(backup)
}

/// Write to a temp file in the same directory, then rename it over `path`.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub report: RewriteReport,
    /// Set when a backup was written.
    pub backup: Option<PathBuf>,
    pub written: bool,
}

/// Read `path`, rewrite it and, unless `dry_run`, back it up and replace it.
/// Nothing is written when the rewrite changes nothing.
pub fn fix_file(
    path: &Path,
    markers: &Markers,
    options: &RewriteOptions,
    dry_run: bool,
) -> Result<FixOutcome> {
    let original = read_source(path)?;
    let rewrite = rewrite_document(&original, markers, options);

    if dry_run || !rewrite.changed(&original) {
        if !dry_run {
            info!(path = %path.display(), "no legacy blocks converted, file left untouched");
        }
        return Ok(FixOutcome {
            report: rewrite.report,
            backup: None,
            written: false,
        });
    }

    let backup = write_backup(path, &original)?;
    write_atomic(path, &rewrite.text)?;
    info!(
        path = %path.display(),
        converted = rewrite.report.blocks_converted,
        "rewritten file saved"
    );

    Ok(FixOutcome {
        report: rewrite.report,
        backup: Some(backup),
        written: true,
    })
}

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads and parses a JSON input file. `kind` names the input in error messages.
pub fn load_json<P: AsRef<Path>>(path: P, kind: &str) -> Result<Value> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            anyhow::bail!("{} file not found: {}", kind, path.display());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {} file: {}", kind, path.display()));
        }
    };

    serde_json::from_str(&contents)
        .with_context(|| format!("{} file is not valid JSON: {}", kind, path.display()))
}

pub fn ensure_results_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create results directory: {}", dir.display()))
}

/// Picks the report path inside `dir`.
///
/// Without `incremental` the same file is reused on every run. With it, the
/// first of `name.ext`, `name-1.ext`, `name-2.ext`, ... that does not exist yet.
pub fn output_path(dir: &Path, filename: &str, incremental: bool) -> PathBuf {
    let candidate = dir.join(filename);
    if !incremental || !candidate.exists() {
        return candidate;
    }

    let as_path = Path::new(filename);
    let stem = as_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("SalesResults");
    let extension = as_path.extension().and_then(|s| s.to_str());

    (1..)
        .map(|n| match extension {
            Some(ext) => dir.join(format!("{}-{}.{}", stem, n, ext)),
            None => dir.join(format!("{}-{}", stem, n)),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Writes the report through a temporary file in the target directory so a
/// failed write never leaves a truncated report behind.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    temp_file
        .write_all(contents.as_bytes())
        .context("Failed to write report contents")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write results file: {}", path.display()))?;

    Ok(())
}

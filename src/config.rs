//! Loading and saving [`ProgressSpec`] files.
//!
//! Specs are stored as pretty-printed JSON:
//!
//! ```json
//! {
//!   "cycle_ms": 1332.0,
//!   "easing": "fast-out-slow-in",
//!   "mode": "indeterminate"
//! }
//! ```

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::types::{AnimError, ProgressSpec};

/// Read and validate a spec file.
///
/// # Errors
///
/// Returns `AnimError::Io` if the file cannot be read, `AnimError::Json` if it
/// does not parse, or `AnimError::InvalidConfiguration` if the cycle length is
/// not positive or the easing parameters are out of range.
pub fn load_spec(path: &Path) -> Result<ProgressSpec, AnimError> {
    let reader = BufReader::new(File::open(path)?);
    let spec: ProgressSpec = serde_json::from_reader(reader)?;
    spec.validate()?;
    debug!(path = %path.display(), ?spec, "loaded progress spec");
    Ok(spec)
}

/// Write a spec file atomically. Refuses to replace an existing file unless
/// `force` is set.
pub fn save_spec(path: &Path, spec: &ProgressSpec, force: bool) -> Result<(), AnimError> {
    spec.validate()?;
    if path.exists() && !force {
        return Err(AnimError::OutputExists);
    }
    let mut json = serde_json::to_vec_pretty(spec)?;
    json.push(b'\n');
    write_all_atomic(path, &json)?;
    debug!(path = %path.display(), "saved progress spec");
    Ok(())
}

/// Write via a temp file in the target directory, then rename over `path`.
fn write_all_atomic(path: &Path, data: &[u8]) -> Result<(), AnimError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => return Err(AnimError::InvalidArgument("output path has no parent")),
    };
    fs::create_dir_all(parent)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| AnimError::Io(e.error))?;
    Ok(())
}

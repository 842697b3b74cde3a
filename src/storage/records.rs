//! Plaintext record files

use std::path::{Path, PathBuf};

use crate::{Result, TriageError};

/// The only extension accepted for input records.
pub const RECORD_EXTENSION: &str = "txt";

/// `<records_dir>/<patient_id>.txt`
pub fn input_path(records_dir: &Path, patient_id: &str) -> PathBuf {
    records_dir.join(format!("{}.{}", patient_id, RECORD_EXTENSION))
}

/// `<output_dir>/summary_<patient_id>.txt`
pub fn output_path(output_dir: &Path, patient_id: &str) -> PathBuf {
    output_dir.join(format!("summary_{}.{}", patient_id, RECORD_EXTENSION))
}

/// Read a UTF-8 record in full. The extension is checked before touching the
/// filesystem.
pub fn load_record(path: &Path) -> Result<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
        return Err(TriageError::UnsupportedFileType(path.to_path_buf()));
    }

    if !path.exists() {
        return Err(TriageError::InputNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    tracing::debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write the summary, replacing any previous file at `path`.
pub fn save_summary(summary: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, summary)?;
    tracing::debug!("Wrote {} bytes to {}", summary.len(), path.display());
    Ok(())
}

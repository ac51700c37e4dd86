use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::MappingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Two-space indented JSON with non-ASCII text left unescaped.
pub fn to_json<T: Serialize>(artifact: &'static str, value: &T) -> Result<String, MappingError> {
    serde_json::to_string_pretty(value).map_err(|source| MappingError::Serialize { artifact, source })
}

pub fn write_json<T: Serialize>(
    path: &Path,
    artifact: &'static str,
    value: &T,
) -> Result<WrittenArtifact, MappingError> {
    let json = to_json(artifact, value)?;
    write_atomic(path, json.as_bytes())?;

    let written = WrittenArtifact {
        path: path.to_path_buf(),
        bytes: json.len(),
        sha256: fingerprint(json.as_bytes()),
    };
    eprintln!(
        "[MAP] wrote {} ({} bytes, sha256 {})",
        written.path.display(),
        written.bytes,
        written.sha256
    );
    Ok(written)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), MappingError> {
    let tmp = tmp_path(path);
    let write_err = |source: io::Error| MappingError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = tmp.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| MappingError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&tmp, bytes).map_err(write_err)?;

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "mapping".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}

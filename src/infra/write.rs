use crate::domain::ThemeDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ThemeFile {
    pub file_name: String,
    pub document: ThemeDocument,
}

#[derive(Clone, Debug, Default)]
pub struct WriteOutcome {
    pub written: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum WriteThemesError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {file_name}: {source}")]
    Encode {
        file_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes each theme as pretty-printed JSON under `out_dir`, creating the
/// directory first. Stops at the first failure; files already written stay.
pub fn write_themes(out_dir: &Path, files: &[ThemeFile]) -> Result<WriteOutcome, WriteThemesError> {
    fs::create_dir_all(out_dir).map_err(|source| WriteThemesError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut outcome = WriteOutcome::default();
    for file in files {
        let path = write_theme(out_dir, file)?;
        outcome.written.push(path);
    }
    Ok(outcome)
}

fn write_theme(out_dir: &Path, file: &ThemeFile) -> Result<PathBuf, WriteThemesError> {
    let mut text = file
        .document
        .to_json_pretty()
        .map_err(|source| WriteThemesError::Encode {
            file_name: file.file_name.clone(),
            source,
        })?;
    text.push('\n');

    let path = out_dir.join(&file.file_name);
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, text).map_err(|source| WriteThemesError::Write {
        path: tmp.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp, &path) {
        let _ = fs::remove_file(&tmp);
        return Err(WriteThemesError::Write { path, source });
    }

    debug!(path = %path.display(), rules = file.document.token_colors.len(), "wrote theme");
    Ok(path)
}

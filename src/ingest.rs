use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ChecklistError, Result};
use crate::model::{ChecklistStore, Item};

/// Outcome of ingesting a batch of dropped or picked paths.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    pub added: usize,
    pub failed: Vec<(PathBuf, ChecklistError)>,
}

impl IngestOutcome {
    pub fn status_line(&self) -> String {
        match (self.added, self.failed.len()) {
            (added, 0) => format!("Added {added} file(s)"),
            (added, failed) => format!("Added {added} file(s), {failed} path(s) failed"),
        }
    }
}

/// Appends `path` to the store: a regular file directly, a directory by
/// walking it depth-first and appending every regular file found.
///
/// Only metadata is touched, never file contents. Returns the number of
/// items appended.
pub fn ingest(store: &mut ChecklistStore, path: &Path) -> Result<usize> {
    let metadata = fs::metadata(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ChecklistError::PathNotFound(path.display().to_string())
        } else {
            ChecklistError::Io(err)
        }
    })?;

    if !metadata.is_dir() {
        store.append(Item::from_path(path));
        return Ok(1);
    }

    let mut added = 0;
    for entry in WalkDir::new(path).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                store.append(Item::from_path(entry.path()));
                added += 1;
            }
            Ok(_) => {}
            Err(err) => {
                // Unreadable subtree or symlink loop; skip it and keep
                // walking the rest of the directory.
                log::warn!("skipping entry under {}: {err}", path.display());
            }
        }
    }
    Ok(added)
}

/// Ingests several paths in the order given, each fully recursed before the
/// next. A failing path is logged and recorded but never aborts the batch.
pub fn ingest_batch(store: &mut ChecklistStore, paths: &[PathBuf]) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    for path in paths {
        match ingest(store, path) {
            Ok(added) => outcome.added += added,
            Err(err) => {
                log::warn!("ingest failed for {}: {err}", path.display());
                outcome.failed.push((path.clone(), err));
            }
        }
    }
    outcome
}

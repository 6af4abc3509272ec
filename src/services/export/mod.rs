// Poster export
// Captures the schedule area as a PNG and saves it next to the user's downloads.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Element id of the schedule area that gets captured.
pub const EXPORT_TARGET: &str = "export-area";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to render {target}: {reason}")]
    Render { target: String, reason: String },
    #[error("Renderer returned an empty image for {0}")]
    EmptyImage(String),
    #[error("Failed to write poster to {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders a part of the visible schedule to PNG bytes.
#[cfg_attr(test, mockall::automock)]
pub trait PosterRenderer {
    fn render(&self, target: &str) -> Result<Vec<u8>, ExportError>;
}

pub fn poster_file_name(date: NaiveDate) -> String {
    format!("weekendly-schedule-{}.png", date.format("%Y-%m-%d"))
}

/// Render the schedule and write it to `dir`. Returns the written path.
pub fn export_poster(
    renderer: &dyn PosterRenderer,
    dir: &Path,
    today: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let bytes = renderer.render(EXPORT_TARGET)?;
    if bytes.is_empty() {
        return Err(ExportError::EmptyImage(EXPORT_TARGET.to_string()));
    }

    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(poster_file_name(today));
    fs::write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Exported schedule poster to {:?} ({} bytes)", path, bytes.len());
    Ok(path)
}

use folio_core::OrderPayload;
use folio_core::ports::{ExportError, OrderExporter};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An `OrderExporter` that hands the selection off through a JSON file.
///
/// The storefront's clipboard bridge watches this file, so every write must
/// leave either the previous payload or the new one, never a partial document.
#[derive(Debug, Clone)]
pub struct ClipboardFileExporter {
  path: PathBuf,
}

impl ClipboardFileExporter {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl OrderExporter for ClipboardFileExporter {
  fn export(&self, payload: &OrderPayload) -> Result<(), ExportError> {
    let json = payload.to_json().map_err(|e| ExportError::Encode(e.to_string()))?;
    folio_fs::atomic_write_str(&self.path, &json).map_err(|e| ExportError::Io(e.to_string()))?;

    debug!(path = %self.path.display(), bytes = json.len(), "selection handed off");
    Ok(())
  }
}

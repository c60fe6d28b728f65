use entity::collection::Content;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

use super::error::ContentError;

/// Renders a collection in the published files' on-disk shape, ready to be
/// pasted back into the data directory.
///
/// Holds no state; every export is derived from the value passed in.
pub struct ExportFormatter;

impl ExportFormatter {
    /// Indented JSON (two spaces), no trailing newline.
    pub fn serialize<C: Content>(content: &C) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(content)?)
    }

    /// Writes the export to `out` (stdout for the CLI), newline-terminated.
    pub fn write_to<C: Content, W: Write>(content: &C, out: &mut W) -> Result<(), ContentError> {
        let text = Self::serialize(content)?;
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }

    /// Writes `<dir>/<collection>.json`, replacing any previous export.
    pub fn write_file<C: Content>(content: &C, dir: &Path) -> Result<PathBuf, ContentError> {
        let kind = C::KIND;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(kind.file_name());

        let mut text = Self::serialize(content)?;
        text.push('\n');
        std::fs::write(&path, &text)?;

        info!(collection = %kind, path = %path.display(), bytes = text.len(), "Export written");
        Ok(path)
    }
}

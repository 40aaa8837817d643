// File: src/persistence.rs
use crate::core::types::TranslationRecord;
use std::fs;
use std::io::{BufWriter, Error, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `records` to `path` as pretty-printed JSON. The file is written to a
/// temporary sibling first and then moved into place, so a crash never leaves
/// a half-written export behind. Exports are transcripts only; nothing reads
/// them back.
pub fn export_history(records: &[TranslationRecord], path: &Path) -> Result<(), Error> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| Error::new(ErrorKind::Other, e))?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    tracing::info!(records = records.len(), path = %path.display(), "history exported");
    Ok(())
}

// File: src/persistence.rs
use crate::core::types::LanguageDescriptor;
use crate::error::Result;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Writes a custom descriptor as pretty JSON. The file is written to a
/// temporary sibling first and then renamed into place.
pub fn save_descriptor(descriptor: &LanguageDescriptor, path: &Path) -> Result<()> {
    descriptor.validate()?;

    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(&mut writer, descriptor)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(std::io::Error::from)?;
    info!(path = %path.display(), "saved language descriptor");
    Ok(())
}

/// Reads and validates a custom descriptor.
pub fn load_descriptor(path: &Path) -> Result<LanguageDescriptor> {
    let json = fs::read_to_string(path)?;
    let descriptor = LanguageDescriptor::from_json(&json)?;
    debug!(path = %path.display(), units = descriptor.units.len(), "loaded language descriptor");
    Ok(descriptor)
}

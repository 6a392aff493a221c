//! Shaping and writing the output table.
//!
//! The core engine hands over catalog-ordered percent and count sequences;
//! everything about layout (long vs. compact, group columns) lives here.

pub mod formats;

use std::path::Path;

use crate::error::FlowCountError;

/// Output shaping options, resolved from the config file and CLI flags
/// before the run starts. The gating engine never sees this.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub grouping: bool,
    pub compact: bool,
}

/// Write the shaped rows as CSV. Rows are ragged on purpose (section
/// titles, blank separator lines), hence the flexible writer.
pub fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<(), FlowCountError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

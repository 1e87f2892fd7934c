//! Optional debug dumps.
//!
//! Diagnostics are switched on by handing a [`DiagnosticsSink::Folder`] to the components that
//! produce them. Each dump overwrites its file; nothing is appended.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::consts::{DEBUG_JSON_FILE, DEBUG_RSID_FILE};
use crate::models::Rsid;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DiagnosticsSink {
    #[default]
    Disabled,
    Folder(PathBuf),
}

impl DiagnosticsSink {
    pub fn folder<P: AsRef<Path>>(path: P) -> Self {
        DiagnosticsSink::Folder(path.as_ref().to_path_buf())
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, DiagnosticsSink::Folder(_))
    }

    /// Path a dump named `file_name` is written to, if diagnostics are enabled.
    pub fn path_for(&self, file_name: &str) -> Option<PathBuf> {
        match self {
            DiagnosticsSink::Disabled => None,
            DiagnosticsSink::Folder(folder) => Some(folder.join(file_name)),
        }
    }

    ///
    /// Dump the most recently parsed document. An absent document is written as `null`.
    ///
    pub fn record_json(&self, document: Option<&Value>) {
        let Some(path) = self.path_for(DEBUG_JSON_FILE) else {
            return;
        };

        let result = write_dump(&path, |writer| {
            match document {
                Some(document) => serde_json::to_writer_pretty(&mut *writer, document)?,
                None => write!(writer, "null")?,
            }
            writeln!(writer)?;
            Ok(())
        });

        if let Err(e) = result {
            warn!("Failed to write diagnostics to {}: {:#}", path.display(), e);
        }
    }

    ///
    /// Dump every rsid read from the input, one per line.
    ///
    pub fn record_rsids(&self, rsids: &[Rsid]) {
        let Some(path) = self.path_for(DEBUG_RSID_FILE) else {
            return;
        };

        let result = write_dump(&path, |writer| {
            writeln!(writer, "All RSIDs: ")?;
            for rsid in rsids {
                writeln!(writer, "{}", rsid)?;
            }
            Ok(())
        });

        if let Err(e) = result {
            warn!("Failed to write diagnostics to {}: {:#}", path.display(), e);
        }
    }
}

fn write_dump<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create diagnostics folder {}", parent.display()))?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush()?;

    Ok(())
}

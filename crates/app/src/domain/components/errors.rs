//! Component resolution errors.

use thiserror::Error;

/// A component could not be loaded.
///
/// Cloneable so one failed load can be handed to every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentResolutionError {
    #[error("no module registered at {import_path}")]
    ModuleNotFound { import_path: String },

    #[error("component {name} not found in {import_path}")]
    ExportNotFound { name: String, import_path: String },

    #[error("failed to import {import_path}: {reason}")]
    ImportFailed { import_path: String, reason: String },
}

//! # Export Errors
//!
//! Errors that cancel an export run. Recoverable problems (unknown node
//! categories, missing attributes, dangling references) never surface here;
//! they are reported through [`Diagnostics`](crate::Diagnostics) and the run
//! continues.

use crate::version::HostVersion;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal export failure. The run is cancelled before producing output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Package mode was selected without a destination directory.
    #[error("no save location configured for package export")]
    MissingDestination,

    /// The document was captured from a host version the schema does not cover.
    #[error("host version {version} is not supported (supported: {min} up to, but excluding, {max})")]
    UnsupportedVersion {
        version: HostVersion,
        min: HostVersion,
        max: HostVersion,
    },

    /// The menu the generated operators should be attached to does not exist.
    #[error("{0} is not a valid menu")]
    InvalidMenu(String),

    /// Nothing was selected for export.
    #[error("no root objects to export")]
    NothingToExport,

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse node tree document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("failed to parse export options: {0}")]
    Options(#[from] toml::de::Error),

    #[error("failed to render extension manifest: {0}")]
    Manifest(#[from] toml::ser::Error),
}

impl ExportError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a precondition failure detected before any
    /// traversal begins.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingDestination
                | Self::UnsupportedVersion { .. }
                | Self::InvalidMenu(_)
                | Self::NothingToExport
        )
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

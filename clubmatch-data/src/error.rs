//! Errors raised while loading catalogue files.

use camino::Utf8PathBuf;
use clubmatch_core::{ActivityError, ClubError};
use thiserror::Error;

/// Errors returned by the catalogue loaders.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalogue file failed.
    #[error("failed to read catalogue file at {path}")]
    ReadFile {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the catalogue JSON failed.
    #[error("failed to parse catalogue file at {path}")]
    Parse {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A club record named a category outside the closed enumeration.
    #[error("club record {id} in {path} has unknown category '{value}'")]
    UnknownCategory {
        /// Identifier of the offending record.
        id: u64,
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// The unrecognised category key.
        value: String,
    },
    /// An activity record named a status outside the closed enumeration.
    #[error("activity record {id} in {path} has unknown status '{value}'")]
    UnknownStatus {
        /// Identifier of the offending record.
        id: u64,
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// The unrecognised status key.
        value: String,
    },
    /// A club record failed domain validation.
    #[error("club record {id} in {path} is invalid")]
    InvalidClub {
        /// Identifier of the offending record.
        id: u64,
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from the domain constructor.
        #[source]
        source: ClubError,
    },
    /// An activity record failed domain validation.
    #[error("activity record {id} in {path} is invalid")]
    InvalidActivity {
        /// Identifier of the offending record.
        id: u64,
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Source error from the domain constructor.
        #[source]
        source: ActivityError,
    },
}

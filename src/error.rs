//! Error types for the SDS to ASM conversion.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ArchiveError`] - input archive structure and decoding errors
//! - [`MapError`] - table mapping errors
//! - [`WriteError`] - output archive errors
//! - [`ConvertError`] - top-level pipeline errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. Nothing in this
//! crate terminates the process; the binary decides exit codes.

use thiserror::Error;

// =============================================================================
// Input Archive Errors
// =============================================================================

/// Errors while reading the SDS input archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Failed to open or read the archive.
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable zip archive.
    #[error("Invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive does not hold exactly the six expected CSV files.
    #[error("The input zip file does not contain the expected number of CSV files: {found:?}")]
    UnexpectedLayout { found: Vec<String> },

    /// One of the six expected tables is absent.
    #[error("The input zip file is missing the '{0}' CSV file")]
    MissingTable(&'static str),

    /// A table could not be decoded as UTF-8.
    #[error("The '{0}' CSV file is not valid UTF-8")]
    NotUtf8(&'static str),

    /// A table is present but empty (or whitespace only).
    #[error("The '{0}' CSV file is empty")]
    EmptyTable(&'static str),

    /// A row is malformed or missing a required field.
    #[error("Invalid row in '{table}': {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Mapping Errors
// =============================================================================

/// Errors while deriving the ASM tables.
///
/// The empty-table messages are part of the user-facing contract and are
/// kept verbatim, one per output table.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("No locations found in the source data. Where is your school?")]
    NoLocations,

    #[error("No students found in the source data. That's an empty school.")]
    NoStudents,

    #[error("No staff found in the source data. Who will teach the children?")]
    NoStaff,

    #[error("No courses found in the source data. What are you teaching them?")]
    NoCourses,

    #[error("No classes found in the source data. When are you teaching?")]
    NoClasses,

    #[error("No schedules found in the source data. Look who has a very light load!")]
    NoRosters,

    /// A student username does not end in a two-digit class year.
    #[error("Cannot derive a class year from username '{0}'")]
    BadClassYear(String),
}

// =============================================================================
// Output Archive Errors
// =============================================================================

/// Errors while writing the ASM output archive.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create, remove, or write the output file.
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    /// Zip encoding error.
    #[error("Failed to write zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// CSV serialization error.
    #[error("Failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The user declined to overwrite an existing output file.
    #[error("Exiting without overwriting.")]
    OverwriteDeclined,
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the main error type returned by [`crate::pipeline::convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input archive error.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Table mapping error.
    #[error(transparent)]
    Map(#[from] MapError),

    /// Output archive error.
    #[error(transparent)]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Result type for output archive operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for the whole pipeline.
pub type ConvertResult<T> = Result<T, ConvertError>;

//! # sds2asm - Microsoft SDS to Apple School Manager conversion
//!
//! Converts a Microsoft School Data Sync classic zip export (six CSV
//! tables) into an Apple School Manager import archive, written next to
//! the input as `<input>_asm.zip`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   SDS zip   │────▶│   Loader    │────▶│   Mappers   │────▶│   ASM zip   │
//! │  (6 tables) │     │ (zip + CSV) │     │ (6 tables)  │     │  + writer   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sds2asm::convert;
//! use std::path::Path;
//!
//! fn main() -> Result<(), sds2asm::ConvertError> {
//!     let output = convert(Path::new("export.zip"), true)?;
//!     println!("Wrote {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - SDS input and ASM output row structs
//! - [`sds`] - Input archive loader
//! - [`asm`] - Table mappers and output writer
//! - [`pipeline`] - Orchestration

// Core modules
pub mod error;
pub mod models;

// Input
pub mod sds;

// Mapping and output
pub mod asm;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ArchiveError, ArchiveResult, ConvertError, ConvertResult, MapError, MapResult, WriteError,
    WriteResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Class, Course, EnrollmentRow, Location, Roster, SchoolRow, SectionRow, Staff, Student,
    StudentRow, TeacherRosterRow, TeacherRow,
};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use sds::{read_sds_zip, SdsData, EXPECTED_TABLES};

// =============================================================================
// Re-exports - Mappers
// =============================================================================

pub use asm::{
    grade_level, map_classes, map_courses, map_locations, map_rosters, map_staff, map_students,
    AsmData,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use asm::writer::{write_asm_zip, write_asm_zip_with_prompt};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{convert, convert_at, output_path};

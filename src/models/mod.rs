//! Row models for the SDS input tables and the ASM output tables.
//!
//! Input rows deserialize straight from the SDS CSV headers (spaces and
//! all) via `#[serde(rename = "...")]`. Output rows serialize with their
//! Rust field names, in declaration order, which fixes the column order
//! of each generated CSV.
//!
//! - [`SchoolRow`], [`SectionRow`], [`StudentRow`], [`TeacherRow`],
//!   [`TeacherRosterRow`], [`EnrollmentRow`] - SDS input rows
//! - [`Location`], [`Student`], [`Staff`], [`Course`], [`Class`],
//!   [`Roster`] - ASM output rows

use serde::{Deserialize, Serialize};

// =============================================================================
// SDS Input Rows
// =============================================================================

/// One row of `School.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchoolRow {
    #[serde(rename = "SIS ID")]
    pub sis_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// One row of `Section.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionRow {
    #[serde(rename = "SIS ID")]
    pub sis_id: String,
    #[serde(rename = "Section Name")]
    pub section_name: String,
    #[serde(rename = "Course SIS ID")]
    pub course_sis_id: String,
    #[serde(rename = "Course Name")]
    pub course_name: String,
    #[serde(rename = "School SIS ID")]
    pub school_sis_id: String,
}

/// One row of `Student.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRow {
    #[serde(rename = "SIS ID")]
    pub sis_id: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Student Number")]
    pub student_number: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "School SIS ID")]
    pub school_sis_id: String,
}

/// One row of `Teacher.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeacherRow {
    #[serde(rename = "SIS ID")]
    pub sis_id: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "School SIS ID")]
    pub school_sis_id: String,
}

/// One row of `TeacherRoster.csv`. `sis_id` is the teacher's.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeacherRosterRow {
    #[serde(rename = "SIS ID")]
    pub sis_id: String,
    #[serde(rename = "Section SIS ID")]
    pub section_sis_id: String,
}

/// One row of `StudentEnrollment.csv`. `sis_id` is the student's.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrollmentRow {
    #[serde(rename = "SIS ID")]
    pub sis_id: String,
    #[serde(rename = "Section SIS ID")]
    pub section_sis_id: String,
}

// =============================================================================
// ASM Output Rows
// =============================================================================

/// One row of `locations.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: String,
    pub location_name: String,
}

/// One row of `students.csv`.
///
/// `grade_level` and `password_policy` are derived, not copied; see
/// [`crate::asm::grade_level`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub person_id: String,
    pub person_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub grade_level: i32,
    pub email_address: String,
    pub sis_username: String,
    pub password_policy: u8,
    pub location_id: String,
}

/// One row of `staff.csv`. Staff re-use their SIS ID as `person_number`
/// and carry no grade level or password policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub person_id: String,
    pub person_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email_address: String,
    pub sis_username: String,
    pub location_id: String,
}

/// One row of `courses.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub course_number: String,
    pub course_name: String,
    pub location_id: String,
}

/// One row of `classes.csv`. `instructor_id` is empty when no
/// TeacherRoster entry matches the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub class_id: String,
    pub class_number: String,
    pub course_id: String,
    pub instructor_id: String,
    pub location_id: String,
}

/// One row of `rosters.csv`. `roster_id` is synthesized as
/// `"{student}.{section}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: String,
    pub class_id: String,
    pub student_id: String,
}

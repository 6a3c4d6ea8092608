//! Input loader for Microsoft SDS classic zip exports.
//!
//! Opens the archive, checks that it holds exactly the six expected CSV
//! tables (macOS `__MACOSX` metadata entries are ignored), and parses
//! each one into its typed row vector, preserving input row order.
//!
//! A leading UTF-8 BOM is the only recoverable defect: it is stripped
//! with a warning. Everything else (wrong entry count, missing table,
//! empty content, bad UTF-8, malformed rows) is fatal.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use serde::de::DeserializeOwned;
use zip::ZipArchive;

use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{
    EnrollmentRow, SchoolRow, SectionRow, StudentRow, TeacherRosterRow, TeacherRow,
};

/// The six tables every SDS classic export must contain.
pub const EXPECTED_TABLES: [&str; 6] = [
    "School.csv",
    "Section.csv",
    "Student.csv",
    "Teacher.csv",
    "TeacherRoster.csv",
    "StudentEnrollment.csv",
];

/// All six SDS input tables, parsed and in input row order.
#[derive(Debug, Clone, Default)]
pub struct SdsData {
    pub schools: Vec<SchoolRow>,
    pub sections: Vec<SectionRow>,
    pub students: Vec<StudentRow>,
    pub teachers: Vec<TeacherRow>,
    pub teacher_rosters: Vec<TeacherRosterRow>,
    pub enrollments: Vec<EnrollmentRow>,
}

/// Read and parse an SDS classic zip export.
///
/// Fails if the archive does not hold exactly the six expected tables,
/// or if any table is empty, not UTF-8, or malformed.
pub fn read_sds_zip(path: &Path) -> ArchiveResult<SdsData> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let entries: Vec<String> = archive
        .file_names()
        .filter(|name| !name.contains("__MACOSX"))
        .map(str::to_string)
        .collect();

    if entries.len() != EXPECTED_TABLES.len() {
        return Err(ArchiveError::UnexpectedLayout { found: entries });
    }
    for expected in EXPECTED_TABLES {
        if !entries.iter().any(|name| name == expected) {
            return Err(ArchiveError::MissingTable(expected));
        }
    }

    Ok(SdsData {
        schools: read_table(&mut archive, "School.csv")?,
        sections: read_table(&mut archive, "Section.csv")?,
        students: read_table(&mut archive, "Student.csv")?,
        teachers: read_table(&mut archive, "Teacher.csv")?,
        teacher_rosters: read_table(&mut archive, "TeacherRoster.csv")?,
        enrollments: read_table(&mut archive, "StudentEnrollment.csv")?,
    })
}

/// Extract one table from the archive and deserialize its rows.
fn read_table<T, R>(archive: &mut ZipArchive<R>, name: &'static str) -> ArchiveResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read + Seek,
{
    let mut entry = archive.by_name(name)?;
    let mut raw = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut raw)?;
    drop(entry);

    let mut content = String::from_utf8(raw).map_err(|_| ArchiveError::NotUtf8(name))?;
    if content.trim().is_empty() {
        return Err(ArchiveError::EmptyTable(name));
    }
    if let Some(stripped) = content.strip_prefix('\u{feff}') {
        eprintln!(
            "Warning: The '{name}' CSV file contains UTF-8 BOM. Consider saving it without BOM."
        );
        content = stripped.to_string();
    }

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result.map_err(|source| ArchiveError::Csv { table: name, source })?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const SCHOOL: &str = "SIS ID,Name\nSCH1,Springfield High\n";
    const SECTION: &str = "SIS ID,Section Name,Course SIS ID,Course Name,School SIS ID\n\
                           SEC1,Algebra P1,MATH1,Algebra,SCH1\n";
    const STUDENT: &str = "SIS ID,Username,Student Number,First Name,Last Name,School SIS ID\n\
                           S1,jdoe26@school.org,1001,Jane,Doe,SCH1\n";
    const TEACHER: &str = "SIS ID,Username,First Name,Last Name,School SIS ID\n\
                           T1,fgrady@school.org,Frank,Grady,SCH1\n";
    const TEACHER_ROSTER: &str = "SIS ID,Section SIS ID\nT1,SEC1\n";
    const ENROLLMENT: &str = "SIS ID,Section SIS ID\nS1,SEC1\n";

    /// Write the given entries into a zip file on disk.
    fn zip_fixture(entries: &[(&str, &str)]) -> NamedTempFile {
        let mut buf = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buf));
            for (name, content) in entries {
                zip.start_file(*name, SimpleFileOptions::default()).unwrap();
                zip.write_all(content.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&buf).unwrap();
        tmp
    }

    fn full_fixture() -> Vec<(&'static str, &'static str)> {
        vec![
            ("School.csv", SCHOOL),
            ("Section.csv", SECTION),
            ("Student.csv", STUDENT),
            ("Teacher.csv", TEACHER),
            ("TeacherRoster.csv", TEACHER_ROSTER),
            ("StudentEnrollment.csv", ENROLLMENT),
        ]
    }

    #[test]
    fn test_reads_all_six_tables() {
        let zip = zip_fixture(&full_fixture());
        let sds = read_sds_zip(zip.path()).unwrap();

        assert_eq!(sds.schools.len(), 1);
        assert_eq!(sds.schools[0].name, "Springfield High");
        assert_eq!(sds.sections[0].course_sis_id, "MATH1");
        assert_eq!(sds.students[0].username, "jdoe26@school.org");
        assert_eq!(sds.teachers[0].sis_id, "T1");
        assert_eq!(sds.teacher_rosters[0].section_sis_id, "SEC1");
        assert_eq!(sds.enrollments[0].sis_id, "S1");
    }

    #[test]
    fn test_wrong_entry_count_rejected() {
        let mut entries = full_fixture();
        entries.pop();
        let zip = zip_fixture(&entries);

        let err = read_sds_zip(zip.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::UnexpectedLayout { .. }));
    }

    #[test]
    fn test_missing_table_named_in_error() {
        // Six entries, but TeacherRoster.csv replaced by a stranger.
        let mut entries = full_fixture();
        entries[4] = ("Bogus.csv", TEACHER_ROSTER);
        let zip = zip_fixture(&entries);

        let err = read_sds_zip(zip.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingTable("TeacherRoster.csv")));
    }

    #[test]
    fn test_macosx_entries_are_ignored() {
        let mut entries = full_fixture();
        entries.push(("__MACOSX/._School.csv", "junk"));
        let zip = zip_fixture(&entries);

        assert!(read_sds_zip(zip.path()).is_ok());
    }

    #[test]
    fn test_empty_table_rejected() {
        let mut entries = full_fixture();
        entries[0] = ("School.csv", "  \n \n");
        let zip = zip_fixture(&entries);

        let err = read_sds_zip(zip.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::EmptyTable("School.csv")));
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let bom_school = "\u{feff}SIS ID,Name\nSCH1,Springfield High\n".to_string();
        let mut entries: Vec<(&str, &str)> = full_fixture();
        entries[0] = ("School.csv", &bom_school);
        let zip = zip_fixture(&entries);

        let sds = read_sds_zip(zip.path()).unwrap();
        assert_eq!(sds.schools[0].sis_id, "SCH1");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut buf = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buf));
            for (name, content) in full_fixture().iter().skip(1) {
                zip.start_file(*name, SimpleFileOptions::default()).unwrap();
                zip.write_all(content.as_bytes()).unwrap();
            }
            zip.start_file("School.csv", SimpleFileOptions::default()).unwrap();
            zip.write_all(&[0xff, 0xfe, 0x00]).unwrap();
            zip.finish().unwrap();
        }
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&buf).unwrap();

        let err = read_sds_zip(tmp.path()).unwrap_err();
        assert!(matches!(err, ArchiveError::NotUtf8("School.csv")));
    }

    #[test]
    fn test_row_order_preserved() {
        let students = "SIS ID,Username,Student Number,First Name,Last Name,School SIS ID\n\
                        S2,b26@school.org,2,B,Two,SCH1\n\
                        S1,a26@school.org,1,A,One,SCH1\n";
        let mut entries = full_fixture();
        entries[2] = ("Student.csv", students);
        let zip = zip_fixture(&entries);

        let sds = read_sds_zip(zip.path()).unwrap();
        assert_eq!(sds.students[0].sis_id, "S2");
        assert_eq!(sds.students[1].sis_id, "S1");
    }
}

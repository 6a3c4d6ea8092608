//! Table mappers deriving the ASM output tables from SDS input rows.
//!
//! Each mapper is a pure function from one or two input tables to one
//! output table; [`AsmData::derive`] combines their returns. Every mapper
//! fails when it would produce an empty table, with its own message.
//!
//! ```text
//! School            ──▶ locations
//! Student           ──▶ students   (grade level derived from email + date)
//! Teacher           ──▶ staff
//! Section           ──▶ courses    (dedup by Course SIS ID)
//! Section ⨝ TeacherRoster ──▶ classes
//! StudentEnrollment ──▶ rosters
//! ```

pub mod writer;

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::error::{MapError, MapResult};
use crate::models::{
    Class, Course, EnrollmentRow, Location, Roster, SchoolRow, SectionRow, Staff, Student,
    StudentRow, TeacherRosterRow, TeacherRow,
};
use crate::sds::SdsData;

/// All six ASM output tables, each guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct AsmData {
    pub locations: Vec<Location>,
    pub students: Vec<Student>,
    pub staff: Vec<Staff>,
    pub courses: Vec<Course>,
    pub classes: Vec<Class>,
    pub rosters: Vec<Roster>,
}

impl AsmData {
    /// Run all six mappers against an SDS export.
    ///
    /// `today` anchors the academic-year calculation for student grade
    /// levels; the binary passes the wall-clock date, tests pin it.
    pub fn derive(sds: &SdsData, today: NaiveDate) -> MapResult<Self> {
        Ok(Self {
            locations: map_locations(&sds.schools)?,
            students: map_students(&sds.students, today)?,
            staff: map_staff(&sds.teachers)?,
            courses: map_courses(&sds.sections)?,
            classes: map_classes(&sds.sections, &sds.teacher_rosters)?,
            rosters: map_rosters(&sds.enrollments)?,
        })
    }
}

// =============================================================================
// Locations
// =============================================================================

/// `School` rows to `locations` rows.
pub fn map_locations(schools: &[SchoolRow]) -> MapResult<Vec<Location>> {
    let locations: Vec<Location> = schools
        .iter()
        .map(|school| Location {
            location_id: school.sis_id.clone(),
            location_name: school.name.clone(),
        })
        .collect();

    if locations.is_empty() {
        return Err(MapError::NoLocations);
    }
    Ok(locations)
}

// =============================================================================
// Students
// =============================================================================

/// `Student` rows to `students` rows.
///
/// `email_address` and `sis_username` both take the SDS Username;
/// `grade_level` is derived from it relative to `today`.
pub fn map_students(students: &[StudentRow], today: NaiveDate) -> MapResult<Vec<Student>> {
    let mut out = Vec::with_capacity(students.len());

    for student in students {
        let grade_level = grade_level(&student.username, today)?;
        let password_policy = if grade_level >= 3 { 8 } else { 4 };

        out.push(Student {
            person_id: student.sis_id.clone(),
            person_number: student.student_number.clone(),
            first_name: student.first_name.clone(),
            middle_name: String::new(),
            last_name: student.last_name.clone(),
            grade_level,
            email_address: student.username.clone(),
            sis_username: student.username.clone(),
            password_policy,
            location_id: student.school_sis_id.clone(),
        });
    }

    if out.is_empty() {
        return Err(MapError::NoStudents);
    }
    Ok(out)
}

/// Grade level from the two-digit class year ending the email's local part.
///
/// The reference year is the current two-digit year, advanced by one from
/// August on (academic rollover): a username ending "26" on 2024-09-01
/// gives `12 + (25 - 26) = 11`.
pub fn grade_level(username: &str, today: NaiveDate) -> MapResult<i32> {
    let local = username.split('@').next().unwrap_or(username);
    let chars: Vec<char> = local.chars().collect();
    let class_year: i32 = match chars.len() {
        0 | 1 => None,
        n => chars[n - 2..].iter().collect::<String>().parse().ok(),
    }
    .ok_or_else(|| MapError::BadClassYear(username.to_string()))?;

    let mut reference = today.year() % 100;
    if today.month() >= 8 {
        reference += 1;
    }
    Ok(12 + (reference - class_year))
}

// =============================================================================
// Staff
// =============================================================================

/// `Teacher` rows to `staff` rows. Teachers use their SIS ID as both
/// `person_id` and `person_number`.
pub fn map_staff(teachers: &[TeacherRow]) -> MapResult<Vec<Staff>> {
    let staff: Vec<Staff> = teachers
        .iter()
        .map(|teacher| Staff {
            person_id: teacher.sis_id.clone(),
            person_number: teacher.sis_id.clone(),
            first_name: teacher.first_name.clone(),
            middle_name: String::new(),
            last_name: teacher.last_name.clone(),
            email_address: teacher.username.clone(),
            sis_username: teacher.username.clone(),
            location_id: teacher.school_sis_id.clone(),
        })
        .collect();

    if staff.is_empty() {
        return Err(MapError::NoStaff);
    }
    Ok(staff)
}

// =============================================================================
// Courses
// =============================================================================

/// `Section` rows to `courses` rows, deduplicated by Course SIS ID.
/// The first occurrence of each course wins; later sections of the same
/// course are dropped.
pub fn map_courses(sections: &[SectionRow]) -> MapResult<Vec<Course>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut courses = Vec::new();

    for section in sections {
        if !seen.insert(&section.course_sis_id) {
            continue;
        }
        courses.push(Course {
            course_id: section.course_sis_id.clone(),
            course_number: section.course_sis_id.clone(),
            course_name: section.course_name.clone(),
            location_id: section.school_sis_id.clone(),
        });
    }

    if courses.is_empty() {
        return Err(MapError::NoCourses);
    }
    Ok(courses)
}

// =============================================================================
// Classes
// =============================================================================

/// `Section` rows joined against `TeacherRoster` to `classes` rows.
///
/// The section-to-instructor lookup is last-writer-wins on duplicate
/// sections. A section with no instructor gets an empty `instructor_id`;
/// that is not an error.
pub fn map_classes(
    sections: &[SectionRow],
    teacher_rosters: &[TeacherRosterRow],
) -> MapResult<Vec<Class>> {
    let instructors: HashMap<&str, &str> = teacher_rosters
        .iter()
        .map(|row| (row.section_sis_id.as_str(), row.sis_id.as_str()))
        .collect();

    let classes: Vec<Class> = sections
        .iter()
        .map(|section| Class {
            class_id: section.sis_id.clone(),
            class_number: section.section_name.clone(),
            course_id: section.course_sis_id.clone(),
            instructor_id: instructors
                .get(section.sis_id.as_str())
                .map(|id| (*id).to_string())
                .unwrap_or_default(),
            location_id: section.school_sis_id.clone(),
        })
        .collect();

    if classes.is_empty() {
        return Err(MapError::NoClasses);
    }
    Ok(classes)
}

// =============================================================================
// Rosters
// =============================================================================

/// `StudentEnrollment` rows to `rosters` rows, one per input row with no
/// deduplication. `roster_id` is `"{student}.{section}"`.
pub fn map_rosters(enrollments: &[EnrollmentRow]) -> MapResult<Vec<Roster>> {
    let rosters: Vec<Roster> = enrollments
        .iter()
        .map(|enrollment| Roster {
            roster_id: format!("{}.{}", enrollment.sis_id, enrollment.section_sis_id),
            class_id: enrollment.section_sis_id.clone(),
            student_id: enrollment.sis_id.clone(),
        })
        .collect();

    if rosters.is_empty() {
        return Err(MapError::NoRosters);
    }
    Ok(rosters)
}

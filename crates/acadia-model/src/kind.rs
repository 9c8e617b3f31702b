//! Entity kinds managed by the console.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The entity collections the console manages.
///
/// Each kind maps to one REST collection and one cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Schools / faculties
    School,
    /// Departments within a school
    Department,
    /// Degree programs within a school
    Program,
    /// Courses within a program
    Course,
    /// Teaching staff
    Lecturer,
    /// Enrolled students
    Student,
    /// Console administrators
    Admin,
    /// Lecturer-to-course teaching assignments
    CourseAssignment,
}

/// All kinds, in sidebar order.
pub const ALL_KINDS: &[EntityKind] = &[
    EntityKind::School,
    EntityKind::Department,
    EntityKind::Program,
    EntityKind::Course,
    EntityKind::Admin,
    EntityKind::Lecturer,
    EntityKind::Student,
    EntityKind::CourseAssignment,
];

impl EntityKind {
    /// Plural REST path segment (`/schools`, `/courses`, ...).
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &'static str {
        match self {
            Self::School => "schools",
            Self::Department => "departments",
            Self::Program => "programs",
            Self::Course => "courses",
            Self::Lecturer => "lecturers",
            Self::Student => "students",
            Self::Admin => "admins",
            Self::CourseAssignment => "assignments",
        }
    }

    /// Singular segment, used for parent-scoped paths and cache keys.
    #[inline]
    #[must_use]
    pub fn singular(&self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Department => "department",
            Self::Program => "program",
            Self::Course => "course",
            Self::Lecturer => "lecturer",
            Self::Student => "student",
            Self::Admin => "admin",
            Self::CourseAssignment => "assignment",
        }
    }

    /// Human-readable screen title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::School => "Schools/Faculties",
            Self::Department => "Departments",
            Self::Program => "Programs",
            Self::Course => "Courses",
            Self::Lecturer => "Lecturers",
            Self::Student => "Students",
            Self::Admin => "Administrators",
            Self::CourseAssignment => "Course Assignments",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Error for unrecognized entity names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity kind: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for EntityKind {
    type Err = UnknownKind;

    /// Accepts both singular and plural spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.singular() == s || k.collection() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

//! Lecturer-to-course teaching assignments.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// Academic semester an assignment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    Fall,
    Spring,
    Summer,
}

impl Semester {
    /// Wire spelling, for filter comparisons.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "fall",
            Self::Spring => "spring",
            Self::Summer => "summer",
        }
    }
}

/// Role the lecturer plays on the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentRole {
    Primary,
    Assistant,
    Guest,
}

impl AssignmentRole {
    /// Wire spelling, for filter comparisons.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Assistant => "assistant",
            Self::Guest => "guest",
        }
    }
}

/// A teaching assignment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAssignment {
    /// Backend-assigned identifier.
    pub assignment_id: String,
    /// Assigned lecturer.
    pub lecturer_id: String,
    /// Course taught.
    pub course_id: String,
    /// e.g. "2025/2026".
    pub academic_year: String,
    pub semester: Semester,
    pub role: AssignmentRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Form submission payload for assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseAssignmentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecturer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AssignmentRole>,
}

impl Record for CourseAssignment {
    fn id(&self) -> &str {
        &self.assignment_id
    }

    fn label(&self) -> String {
        format!("{} / {}", self.lecturer_id, self.course_id)
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.lecturer_id, &self.course_id, &self.academic_year]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "lecturer" => value.eq_str(&self.lecturer_id),
            "course" => value.eq_str(&self.course_id),
            "academic_year" => value.eq_str(&self.academic_year),
            "semester" => value.eq_str(self.semester.as_str()),
            "role" => value.eq_str(self.role.as_str()),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "academic_year" => Some(SortKey::text(&self.academic_year)),
            "lecturer_id" => Some(SortKey::text(&self.lecturer_id)),
            "course_id" => Some(SortKey::text(&self.course_id)),
            "created_at" => self.created_at.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for CourseAssignment {
    type Payload = CourseAssignmentPayload;

    const KIND: EntityKind = EntityKind::CourseAssignment;
    const PARENT: Option<ParentSpec> = Some(ParentSpec {
        kind: EntityKind::Lecturer,
        filter: "lecturer",
    });
    const FILTER_CHAIN: &'static [&'static str] = &["lecturer"];
}

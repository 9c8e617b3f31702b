//! Courses, scoped to a program.
//!
//! Course levels follow the `year.semester` convention (1.1 through
//! 5.2); phases run 1 through 4.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// A course record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Backend-assigned identifier.
    pub course_id: String,
    pub course_name: String,
    pub course_code: String,
    /// Owning program.
    pub program_id: String,
    /// `year.semester`, e.g. 2.1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester_offered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_elective: Option<bool>,
    /// Comma-separated course codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllabus_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoursePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester_offered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_elective: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllabus_path: Option<String>,
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.course_id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.course_name, self.course_code)
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.course_name, &self.course_code]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            // The school selector only scopes the program dropdown.
            "program" => value.eq_str(&self.program_id),
            "course_level" => self.course_level.is_some_and(|l| value.eq_number(l)),
            "phase" => self.phase.is_some_and(|p| value.eq_int(p)),
            "is_elective" => self.is_elective.is_some_and(|e| value.eq_flag(e)),
            "status" => self.status.as_deref().is_some_and(|s| value.eq_str(s)),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "course_name" => Some(SortKey::text(&self.course_name)),
            "course_code" => Some(SortKey::text(&self.course_code)),
            "course_level" => self.course_level.map(SortKey::number),
            "phase" => self.phase.map(|p| SortKey::number(p as f64)),
            "credit_hours" => self.credit_hours.map(|c| SortKey::number(c as f64)),
            "created_at" => self.created_at.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for Course {
    type Payload = CoursePayload;

    const KIND: EntityKind = EntityKind::Course;
    const PARENT: Option<ParentSpec> = Some(ParentSpec {
        kind: EntityKind::Program,
        filter: "program",
    });
    const FILTER_CHAIN: &'static [&'static str] = &["school", "program"];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, code: &str) -> Course {
        Course {
            course_id: format!("C-{code}"),
            course_name: name.into(),
            course_code: code.into(),
            program_id: "P1".into(),
            course_level: Some(2.1),
            phase: Some(1),
            credit_hours: Some(3),
            semester_offered: None,
            is_elective: Some(false),
            prerequisites: None,
            description: None,
            status: Some("active".into()),
            syllabus_path: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn school_filter_never_restricts_courses() {
        let c = course("Data Structures", "CS201");
        assert!(c.matches_filter("school", &FilterValue::text("S9")));
    }

    #[test]
    fn level_filter_is_numeric() {
        let c = course("Data Structures", "CS201");
        assert!(c.matches_filter("course_level", &FilterValue::Number(2.1)));
        assert!(!c.matches_filter("course_level", &FilterValue::Number(2.2)));
    }
}

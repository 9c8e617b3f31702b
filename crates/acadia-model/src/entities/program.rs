//! Degree programs, scoped to a school.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// A degree program record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Backend-assigned identifier.
    pub program_id: String,
    pub program_name: String,
    pub program_code: String,
    /// Owning school.
    pub school_id: String,
    /// e.g. "bachelor", "master", "phd".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditation_status: Option<String>,
    /// Lecturer id of the coordinator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for programs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Record for Program {
    fn id(&self) -> &str {
        &self.program_id
    }

    fn label(&self) -> String {
        self.program_name.clone()
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.program_name, &self.program_code]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "school" => value.eq_str(&self.school_id),
            "degree_level" => self
                .degree_level
                .as_deref()
                .is_some_and(|l| value.eq_str(l)),
            "status" => self.status.as_deref().is_some_and(|s| value.eq_str(s)),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "program_name" => Some(SortKey::text(&self.program_name)),
            "program_code" => Some(SortKey::text(&self.program_code)),
            "duration_years" => self.duration_years.map(|n| SortKey::number(n as f64)),
            "credit_hours" => self.credit_hours.map(|n| SortKey::number(n as f64)),
            "created_at" => self.created_at.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for Program {
    type Payload = ProgramPayload;

    const KIND: EntityKind = EntityKind::Program;
    const PARENT: Option<ParentSpec> = Some(ParentSpec {
        kind: EntityKind::School,
        filter: "school",
    });
    const FILTER_CHAIN: &'static [&'static str] = &["school"];
}

//! Schools / faculties — the root of the academic hierarchy.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// A school or faculty record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Backend-assigned identifier.
    pub school_id: String,
    /// Display name.
    pub school_name: String,
    /// Short code (e.g. "ENG").
    pub school_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment_date: Option<String>,
    /// Lecturer id of the dean.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dean_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for schools. Absent fields are stripped from
/// the serialized body; the backend enforces required fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dean_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Record for School {
    fn id(&self) -> &str {
        &self.school_id
    }

    fn label(&self) -> String {
        self.school_name.clone()
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.school_name, &self.school_code]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "status" => self.status.as_deref().is_some_and(|s| value.eq_str(s)),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "school_name" => Some(SortKey::text(&self.school_name)),
            "school_code" => Some(SortKey::text(&self.school_code)),
            "establishment_date" => self.establishment_date.as_deref().map(SortKey::date),
            "created_at" => self.created_at.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for School {
    type Payload = SchoolPayload;

    const KIND: EntityKind = EntityKind::School;
    const PARENT: Option<ParentSpec> = None;
    const FILTER_CHAIN: &'static [&'static str] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> School {
        School {
            school_id: "S1".into(),
            school_name: "School of Engineering".into(),
            school_code: "ENG".into(),
            description: None,
            establishment_date: Some("1964-10-01".into()),
            dean_id: None,
            contact_email: Some("eng@example.edu".into()),
            contact_phone: None,
            building_location: None,
            status: Some("active".into()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn payload_strips_absent_fields() {
        let payload = SchoolPayload {
            school_name: Some("School of Law".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body, serde_json::json!({"school_name": "School of Law"}));
    }

    #[test]
    fn unknown_filter_passes() {
        let school = sample();
        assert!(school.matches_filter("program", &FilterValue::text("P1")));
        assert!(school.matches_filter("status", &FilterValue::text("active")));
        assert!(!school.matches_filter("status", &FilterValue::text("inactive")));
    }

    #[test]
    fn record_round_trips_snake_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"school_code\":\"ENG\""));
        let back: School = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}

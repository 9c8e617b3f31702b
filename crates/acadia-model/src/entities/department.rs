//! Departments, scoped to a school.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// A department record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Backend-assigned identifier.
    pub department_id: String,
    pub department_name: String,
    pub department_code: String,
    /// Owning school.
    pub school_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_of_department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for departments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_of_department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Record for Department {
    fn id(&self) -> &str {
        &self.department_id
    }

    fn label(&self) -> String {
        self.department_name.clone()
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.department_name, &self.department_code]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "school" => value.eq_str(&self.school_id),
            "department" => value.eq_str(&self.department_id),
            "status" => self.status.as_deref().is_some_and(|s| value.eq_str(s)),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "department_name" => Some(SortKey::text(&self.department_name)),
            "department_code" => Some(SortKey::text(&self.department_code)),
            "establishment_date" => self.establishment_date.as_deref().map(SortKey::date),
            "created_at" => self.created_at.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for Department {
    type Payload = DepartmentPayload;

    const KIND: EntityKind = EntityKind::Department;
    const PARENT: Option<ParentSpec> = Some(ParentSpec {
        kind: EntityKind::School,
        filter: "school",
    });
    const FILTER_CHAIN: &'static [&'static str] = &["school", "department"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_filter_matches_foreign_key() {
        let dept = Department {
            department_id: "D1".into(),
            department_name: "Computer Science".into(),
            department_code: "CS".into(),
            school_id: "S1".into(),
            head_of_department_id: None,
            description: None,
            establishment_date: None,
            contact_email: None,
            contact_phone: None,
            office_location: None,
            status: None,
            created_at: None,
            updated_at: None,
        };
        assert!(dept.matches_filter("school", &FilterValue::text("S1")));
        assert!(!dept.matches_filter("school", &FilterValue::text("S2")));
    }
}

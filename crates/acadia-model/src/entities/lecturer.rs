//! Teaching staff.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// Recorded sex, as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Wire spelling, for filter comparisons.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

/// A lecturer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Backend-assigned identifier.
    pub lecturer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Home department, when attached to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for lecturers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LecturerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<String>,
}

impl Record for Lecturer {
    fn id(&self) -> &str {
        &self.lecturer_id
    }

    fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.first_name, &self.last_name, &self.email_address]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "department" => self
                .department_id
                .as_deref()
                .is_some_and(|d| value.eq_str(d)),
            "sex" => self.sex.is_some_and(|s| value.eq_str(s.as_str())),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "first_name" => Some(SortKey::text(&self.first_name)),
            "last_name" => Some(SortKey::text(&self.last_name)),
            "email_address" => Some(SortKey::text(&self.email_address)),
            "joined_date" => self.joined_date.as_deref().map(SortKey::date),
            "date_of_birth" => self.date_of_birth.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for Lecturer {
    type Payload = LecturerPayload;

    const KIND: EntityKind = EntityKind::Lecturer;
    const PARENT: Option<ParentSpec> = None;
    const FILTER_CHAIN: &'static [&'static str] = &["department"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_uses_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"FEMALE\"");
        let back: Sex = serde_json::from_str("\"OTHER\"").unwrap();
        assert_eq!(back, Sex::Other);
    }
}

//! Enrolled students. The widest record in the system; no foreign keys.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// A student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Backend-assigned identifier.
    pub student_id: String,
    pub first_name: String,
    pub surname: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_home_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Campus RFID card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_frequency_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for students.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_home_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_frequency_id: Option<String>,
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.student_id
    }

    fn label(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.first_name, &self.surname, &self.email_address]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "nationality" => self
                .nationality
                .as_deref()
                .is_some_and(|n| value.eq_str(n)),
            "sex" => self.sex.as_deref().is_some_and(|s| value.eq_str(s)),
            "marital_status" => self
                .marital_status
                .as_deref()
                .is_some_and(|m| value.eq_str(m)),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "first_name" => Some(SortKey::text(&self.first_name)),
            "surname" => Some(SortKey::text(&self.surname)),
            "email_address" => Some(SortKey::text(&self.email_address)),
            "date_of_birth" => self.date_of_birth.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for Student {
    type Payload = StudentPayload;

    const KIND: EntityKind = EntityKind::Student;
    const PARENT: Option<ParentSpec> = None;
    const FILTER_CHAIN: &'static [&'static str] = &[];
}

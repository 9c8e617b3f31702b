//! Console administrators.

use crate::kind::EntityKind;
use crate::resource::{ParentSpec, Record, Resource};
use crate::value::{FilterValue, SortKey};
use serde::{Deserialize, Serialize};

/// Administrator privilege level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Superadmin,
}

impl AdminRole {
    /// Wire spelling, for filter comparisons.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

/// An administrator record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    /// Backend-assigned identifier.
    pub admin_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Form submission payload for administrators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl Record for Admin {
    fn id(&self) -> &str {
        &self.admin_id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool {
        match name {
            "role" => self.role.is_some_and(|r| value.eq_str(r.as_str())),
            "is_active" => self.is_active.is_some_and(|a| value.eq_flag(a)),
            _ => true,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::text(&self.name)),
            "email" => Some(SortKey::text(&self.email)),
            "last_login" => self.last_login.as_deref().map(SortKey::date),
            "created_at" => self.created_at.as_deref().map(SortKey::date),
            _ => None,
        }
    }
}

impl Resource for Admin {
    type Payload = AdminPayload;

    const KIND: EntityKind = EntityKind::Admin;
    const PARENT: Option<ParentSpec> = None;
    const FILTER_CHAIN: &'static [&'static str] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filter_uses_lowercase_wire_names() {
        let admin = Admin {
            admin_id: "A1".into(),
            name: "Root".into(),
            email: "root@example.edu".into(),
            phone_number: None,
            address: None,
            is_active: Some(true),
            role: Some(AdminRole::Superadmin),
            profile_picture_url: None,
            last_login: None,
            created_at: None,
            updated_at: None,
        };
        assert!(admin.matches_filter("role", &FilterValue::text("superadmin")));
        assert!(admin.matches_filter("is_active", &FilterValue::Flag(true)));
        assert!(!admin.matches_filter("role", &FilterValue::text("admin")));
    }
}

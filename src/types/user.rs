use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::User,
            Self::User => Self::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub show_date_time: bool,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_true() -> bool {
    true
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            show_date_time: true,
            timezone: default_timezone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub company_id: String,
    pub company_name: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: DateTime<Utc>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Fields an admin supplies when creating an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub role: Role,
}

/// Partial preference update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct PreferenceUpdate {
    pub email_notifications: Option<bool>,
    pub show_date_time: Option<bool>,
    pub timezone: Option<String>,
}

/// "Acme Corporation" -> "acme-corporation".
pub fn company_id_for(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_id_collapses_whitespace_runs() {
        assert_eq!(company_id_for("TechCorp  Inc."), "techcorp-inc.");
        assert_eq!(company_id_for("Acme Corporation"), "acme-corporation");
    }

    #[test]
    fn preferences_default_when_missing_from_json() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "9",
                "email": "a@b.com",
                "name": "A",
                "companyId": "b",
                "companyName": "B",
                "role": "user",
                "status": "inactive",
                "lastLogin": "2023-04-10T14:30:00Z"
            }"#,
        )
        .expect("user should parse");
        assert_eq!(user.preferences, Preferences::default());
        assert_eq!(user.status.toggled(), UserStatus::Active);
    }
}

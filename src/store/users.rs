use crate::error::{Result, WorkbrandError};
use crate::types::user::{
    company_id_for, NewUser, PreferenceUpdate, Preferences, Role, User, UserStatus,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
}

/// Admin-managed user accounts kept in one JSON array file.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    path: PathBuf,
}

impl UserDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<Vec<User>> {
        if !self.path.exists() {
            let seeded = demo_users();
            info!(
                "seeding user directory at {} with {} demo accounts",
                self.path.display(),
                seeded.len()
            );
            self.write(&seeded)?;
            return Ok(seeded);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn get(&self, id: &str) -> Result<User> {
        self.list()?
            .into_iter()
            .find(|user| user.id == id)
            .ok_or_else(|| WorkbrandError::NotFound(format!("user {id}")))
    }

    pub fn add(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.list()?;
        let email = new_user.email.trim().to_string();
        if !looks_like_email(&email) {
            return Err(WorkbrandError::InvalidInput(format!(
                "please enter a valid email address: {email}"
            )));
        }
        if new_user.name.trim().is_empty() || new_user.company_name.trim().is_empty() {
            return Err(WorkbrandError::InvalidInput(
                "user name and company name are required".to_string(),
            ));
        }
        if users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(&email))
        {
            return Err(WorkbrandError::InvalidInput(format!(
                "a user with email {email} already exists"
            )));
        }

        let next_id = users
            .iter()
            .filter_map(|user| user.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let company_name = new_user.company_name.trim().to_string();
        let user = User {
            id: next_id.to_string(),
            email,
            name: new_user.name.trim().to_string(),
            company_id: company_id_for(&company_name),
            company_name,
            role: new_user.role,
            status: UserStatus::Active,
            last_login: Utc::now(),
            preferences: Preferences::default(),
        };
        users.push(user.clone());
        self.write(&users)?;
        info!("added user {} ({})", user.id, user.email);
        Ok(user)
    }

    pub fn delete(&self, id: &str) -> Result<User> {
        let mut users = self.list()?;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| WorkbrandError::NotFound(format!("user {id}")))?;
        let removed = users.remove(index);
        self.write(&users)?;
        Ok(removed)
    }

    pub fn toggle_status(&self, id: &str) -> Result<User> {
        self.update(id, |user| user.status = user.status.toggled())
    }

    pub fn toggle_role(&self, id: &str) -> Result<User> {
        self.update(id, |user| user.role = user.role.toggled())
    }

    pub fn rename(&self, id: &str, name: &str) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkbrandError::InvalidInput(
                "user name is required".to_string(),
            ));
        }
        self.update(id, |user| user.name = name.to_string())
    }

    pub fn update_preferences(&self, id: &str, update: PreferenceUpdate) -> Result<User> {
        self.update(id, |user| {
            if let Some(enabled) = update.email_notifications {
                user.preferences.email_notifications = enabled;
            }
            if let Some(enabled) = update.show_date_time {
                user.preferences.show_date_time = enabled;
            }
            if let Some(timezone) = update.timezone.filter(|tz| !tz.trim().is_empty()) {
                user.preferences.timezone = timezone;
            }
        })
    }

    pub fn stats(&self) -> Result<UserStats> {
        let users = self.list()?;
        Ok(UserStats {
            total: users.len(),
            active: users
                .iter()
                .filter(|user| user.status == UserStatus::Active)
                .count(),
            admins: users.iter().filter(|user| user.role == Role::Admin).count(),
        })
    }

    /// Unique company names in order of first appearance.
    pub fn companies(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for user in self.list()? {
            if !names.contains(&user.company_name) {
                names.push(user.company_name);
            }
        }
        Ok(names)
    }

    fn update(&self, id: &str, change: impl FnOnce(&mut User)) -> Result<User> {
        let mut users = self.list()?;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| WorkbrandError::NotFound(format!("user {id}")))?;
        change(user);
        let updated = user.clone();
        self.write(&users)?;
        debug!("updated user {}", updated.id);
        Ok(updated)
    }

    fn write(&self, users: &[User]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(users)?)?;
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn demo_user(
    id: &str,
    email: &str,
    name: &str,
    company: (&str, &str),
    role: Role,
    status: UserStatus,
    last_login: DateTime<Utc>,
) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        company_id: company.0.to_string(),
        company_name: company.1.to_string(),
        role,
        status,
        last_login,
        preferences: Preferences::default(),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Accounts present in a freshly created directory.
pub fn demo_users() -> Vec<User> {
    vec![
        demo_user(
            "1",
            "admin@workbrand.com",
            "Admin User",
            ("company-1", "Workbrand Global"),
            Role::Admin,
            UserStatus::Active,
            at(2023, 4, 10, 14, 30),
        ),
        demo_user(
            "2",
            "user@acme.com",
            "John Doe",
            ("company-2", "Acme Corporation"),
            Role::User,
            UserStatus::Active,
            at(2023, 4, 9, 9, 15),
        ),
        demo_user(
            "3",
            "user@techcorp.com",
            "Jane Smith",
            ("company-3", "TechCorp Inc."),
            Role::User,
            UserStatus::Active,
            at(2023, 4, 11, 11, 45),
        ),
        demo_user(
            "4",
            "user@mastercard.com",
            "Michael Johnson",
            ("mastercard", "Mastercard"),
            Role::User,
            UserStatus::Active,
            at(2023, 4, 11, 8, 20),
        ),
        demo_user(
            "5",
            "admin@mastercard.com",
            "Sarah Williams",
            ("mastercard", "Mastercard"),
            Role::Admin,
            UserStatus::Active,
            at(2023, 4, 10, 16, 5),
        ),
        demo_user(
            "6",
            "user@inactive.com",
            "Inactive User",
            ("company-4", "Inactive Corp"),
            Role::User,
            UserStatus::Inactive,
            at(2023, 3, 15, 10, 30),
        ),
    ]
}

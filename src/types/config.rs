use crate::error::WorkbrandError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkbrandConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_companies_file")]
    pub companies_file: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
}

fn default_data_dir() -> String {
    ".workbrand".to_string()
}

fn default_companies_file() -> String {
    "company-data.json".to_string()
}

fn default_users_file() -> String {
    "users.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            companies_file: default_companies_file(),
            users_file: default_users_file(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Month (1-12) in which the fiscal year begins.
    #[serde(default = "default_fiscal_year_start")]
    pub fiscal_year_start: u32,
}

fn default_fiscal_year_start() -> u32 {
    1
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            fiscal_year_start: default_fiscal_year_start(),
        }
    }
}

impl WorkbrandConfig {
    pub fn data_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.storage.data_dir)
    }

    pub fn companies_path(&self, root: &Path) -> PathBuf {
        self.data_dir(root).join(&self.storage.companies_file)
    }

    pub fn users_path(&self, root: &Path) -> PathBuf {
        self.data_dir(root).join(&self.storage.users_file)
    }

    pub fn validate(&self) -> Result<(), WorkbrandError> {
        if !(1..=12).contains(&self.calendar.fiscal_year_start) {
            return Err(WorkbrandError::ConfigParse(format!(
                "calendar.fiscal_year_start must be between 1 and 12 (found {})",
                self.calendar.fiscal_year_start
            )));
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err(WorkbrandError::ConfigParse(
                "generator.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.generator.model.trim().is_empty() {
            return Err(WorkbrandError::ConfigParse(
                "generator.model must not be empty".to_string(),
            ));
        }
        if self.generator.endpoint.trim().is_empty() {
            return Err(WorkbrandError::ConfigParse(
                "generator.endpoint must not be empty".to_string(),
            ));
        }
        if self.storage.companies_file.trim().is_empty() || self.storage.users_file.trim().is_empty()
        {
            return Err(WorkbrandError::ConfigParse(
                "storage file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

use crate::domain::model::{Person, ShowcaseInputs};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_no_null_bytes, validate_range, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_SQUARE_COUNT: u32 = 10_000;

/// File-backed showcase inputs. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub greeting: GreetingConfig,
    pub summation: SummationConfig,
    pub squares: SquaresConfig,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: ShowcaseInputs::default().name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummationConfig {
    pub numbers: Vec<i64>,
}

impl Default for SummationConfig {
    fn default() -> Self {
        Self {
            numbers: ShowcaseInputs::default().numbers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquaresConfig {
    pub count: u32,
}

impl Default for SquaresConfig {
    fn default() -> Self {
        Self {
            count: ShowcaseInputs::default().square_count,
        }
    }
}

impl DemoConfig {
    /// Load a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from TOML text, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| DemoError::ConfigParseError {
            message: e.to_string(),
        })
    }

    pub fn into_inputs(self) -> ShowcaseInputs {
        ShowcaseInputs {
            name: self.greeting.name,
            numbers: self.summation.numbers,
            square_count: self.squares.count,
            person: self.person,
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_range("squares.count", self.squares.count, 0, MAX_SQUARE_COUNT)?;
        validate_no_null_bytes("person.name", &self.person.name)?;
        validate_no_null_bytes("person.city", &self.person.city)?;
        Ok(())
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

/// Replace `${VAR}` with the environment value; unset variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

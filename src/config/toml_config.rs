use crate::domain::model::Value;
use crate::utils::error::{GreeterError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_required_field, Validate};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub greeter: Option<GreeterConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GreeterConfig {
    pub values: Option<Vec<Value>>,
}

impl TomlConfig {
    /// Loads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses config text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GreeterError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Configured values, empty when none are set.
    pub fn values(&self) -> &[Value] {
        self.greeter
            .as_ref()
            .and_then(|g| g.values.as_deref())
            .unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let greeter = validate_required_field("greeter", &self.greeter)?;
        let values = validate_required_field("greeter.values", &greeter.values)?;
        validate_non_empty_list("greeter.values", values)
    }
}

/// Replaces `${VAR}` with the variable's value. Unset variables stay verbatim.
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

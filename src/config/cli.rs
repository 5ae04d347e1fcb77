use crate::config::toml_config::TomlConfig;
use crate::domain::model::Value;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

/// Greeted when neither positional values nor a config file supply any.
pub const DEFAULT_VALUE: &str = "world";

#[derive(Debug, Clone, Parser)]
#[command(name = "hello")]
#[command(about = "Prints a Hello World greeting for each value")]
pub struct CliConfig {
    /// Values to greet, in order
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,

    #[arg(long, help = "Parse each value as a JSON document")]
    pub json: bool,

    /// TOML file whose [greeter] values are greeted first
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn parse_value(&self, raw: &str) -> Result<Value> {
        if self.json {
            Ok(serde_json::from_str(raw)?)
        } else {
            Ok(Value::from(raw))
        }
    }

    /// Every value to greet: config file values, then positional ones.
    pub fn resolve_values(&self) -> Result<Vec<Value>> {
        let mut values = Vec::new();

        if let Some(path) = &self.config {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            tracing::debug!(
                "Loaded {} value(s) from {}",
                file_config.values().len(),
                path
            );
            values.extend_from_slice(file_config.values());
        }

        for raw in &self.values {
            values.push(self.parse_value(raw)?);
        }

        if values.is_empty() {
            values.push(Value::from(DEFAULT_VALUE));
        }
        Ok(values)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GreeterError;

    #[test]
    fn test_defaults_to_world() {
        let config = CliConfig::parse_from(["hello"]);
        assert_eq!(config.resolve_values().unwrap(), vec![Value::from("world")]);
    }

    #[test]
    fn test_positional_values_are_text() {
        let config = CliConfig::parse_from(["hello", "42", ""]);
        assert_eq!(
            config.resolve_values().unwrap(),
            vec![Value::from("42"), Value::from("")]
        );
    }

    #[test]
    fn test_json_values() {
        let config = CliConfig::parse_from(["hello", "--json", "42", r#""""#, "[1,null]"]);
        assert_eq!(
            config.resolve_values().unwrap(),
            vec![
                Value::Integer(42),
                Value::from(""),
                Value::List(vec![Value::Integer(1), Value::Nil])
            ]
        );
    }

    #[test]
    fn test_hyphenated_values() {
        let config = CliConfig::parse_from(["hello", "--json", "-5"]);
        assert!(config.json);
        assert_eq!(config.resolve_values().unwrap(), vec![Value::Integer(-5)]);

        let config = CliConfig::parse_from(["hello", "-v", "-x"]);
        assert!(config.verbose);
        assert_eq!(config.resolve_values().unwrap(), vec![Value::from("-x")]);
    }

    #[test]
    fn test_invalid_json_value() {
        let config = CliConfig::parse_from(["hello", "--json", "world"]);
        assert!(matches!(
            config.resolve_values(),
            Err(GreeterError::SerializationError(_))
        ));
    }

    #[test]
    fn test_empty_config_path_rejected() {
        let config = CliConfig::parse_from(["hello", "--config", ""]);
        assert!(config.validate().is_err());
    }
}

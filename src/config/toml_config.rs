use crate::core::report::OutputFormat;
use crate::domain::model::{SortKey, SortOrder};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub rates: Option<String>,
    pub funds: Option<String>,
    pub history: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub days: Option<u32>,
    pub simple_interest: Option<bool>,
    pub order: Option<SortOrder>,
    pub sort_by: Option<SortKey>,
    pub fund_order: Option<SortOrder>,
    pub fund_sort_by: Option<SortKey>,
    pub limit: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(rates) = &self.sources.rates {
            crate::utils::validation::validate_source("sources.rates", rates)?;
        }
        if let Some(funds) = &self.sources.funds {
            crate::utils::validation::validate_source("sources.funds", funds)?;
        }
        if let Some(history) = &self.sources.history {
            crate::utils::validation::validate_source("sources.history", history)?;
        }
        if let Some(timeout) = self.sources.timeout_seconds {
            crate::utils::validation::validate_range("sources.timeout_seconds", timeout, 1, 300)?;
        }
        if let Some(days) = self.defaults.days {
            crate::utils::validation::validate_positive_number("defaults.days", days as usize, 1)?;
        }
        if let Some(limit) = self.defaults.limit {
            crate::utils::validation::validate_positive_number("defaults.limit", limit, 1)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[sources]
rates = "data/tasas_bancos.json"
funds = "https://example.com/fondos.json"
history = "data/fci_data.json"
timeout_seconds = 10

[defaults]
days = 45
simple_interest = true
order = "asc"
sort_by = "interest"
fund_sort_by = "capital"
limit = 5
format = "csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.sources.rates.as_deref(), Some("data/tasas_bancos.json"));
        assert_eq!(config.sources.timeout_seconds, Some(10));
        assert_eq!(config.defaults.days, Some(45));
        assert_eq!(config.defaults.order, Some(SortOrder::Ascending));
        assert_eq!(config.defaults.sort_by, Some(SortKey::InterestEarned));
        assert_eq!(config.defaults.fund_sort_by, Some(SortKey::FinalCapital));
        assert_eq!(config.defaults.format, Some(OutputFormat::Csv));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.sources.rates.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TASA_CALC_TEST_RATES_URL", "https://test.api.com/tasas.json");

        let toml_content = r#"
[sources]
rates = "${TASA_CALC_TEST_RATES_URL}"
funds = "${TASA_CALC_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.sources.rates.as_deref(),
            Some("https://test.api.com/tasas.json")
        );
        assert_eq!(
            config.sources.funds.as_deref(),
            Some("${TASA_CALC_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("TASA_CALC_TEST_RATES_URL");
    }

    #[test]
    fn test_config_validation() {
        let bad_scheme = TomlConfig::from_toml_str("[sources]\nrates = \"ftp://example.com/tasas.json\"\n").unwrap();
        assert!(bad_scheme.validate().is_err());

        let zero_days = TomlConfig::from_toml_str("[defaults]\ndays = 0\n").unwrap();
        assert!(zero_days.validate().is_err());

        let long_timeout = TomlConfig::from_toml_str("[sources]\ntimeout_seconds = 3600\n").unwrap();
        assert!(long_timeout.validate().is_err());
    }

    #[test]
    fn test_unknown_sort_order_is_rejected() {
        assert!(TomlConfig::from_toml_str("[defaults]\norder = \"sideways\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[sources]\nrates = \"tasas.json\"\n\n[defaults]\ndays = 30\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.defaults.days, Some(30));
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::domain::model::{CalculationInput, RankingOptions, SortKey, SortOrder};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_source, Validate,
};
use toml_config::TomlConfig;

pub const DEFAULT_RATES_SOURCE: &str = "tasas_bancos.json";
pub const DEFAULT_FUNDS_SOURCE: &str = "fondos.json";
pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Values given explicitly for one run. They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub amount: Option<f64>,
    pub days: Option<u32>,
    pub simple_interest: Option<bool>,
    pub rates: Option<String>,
    pub funds: Option<String>,
    pub history: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub order: Option<SortOrder>,
    pub sort_by: Option<SortKey>,
    pub fund_order: Option<SortOrder>,
    pub fund_sort_by: Option<SortKey>,
    pub limit: Option<usize>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for a calculation run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rates: String,
    pub funds: String,
    pub history: Option<String>,
    pub timeout_seconds: u64,
    pub input: CalculationInput,
    pub deposit_ranking: RankingOptions,
    pub fund_ranking: RankingOptions,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: &TomlConfig) -> Result<Self> {
        let amount = *validate_required_field("amount", &overrides.amount)?;
        let defaults = &file.defaults;

        let order = overrides.order.or(defaults.order).unwrap_or_default();
        let sort_by = overrides.sort_by.or(defaults.sort_by).unwrap_or_default();
        let limit = overrides.limit.or(defaults.limit);

        // fund ranking falls back to the deposit ranking
        let fund_order = overrides.fund_order.or(defaults.fund_order).unwrap_or(order);
        let fund_sort_by = overrides
            .fund_sort_by
            .or(defaults.fund_sort_by)
            .unwrap_or(sort_by);

        Ok(Self {
            rates: overrides
                .rates
                .or_else(|| file.sources.rates.clone())
                .unwrap_or_else(|| DEFAULT_RATES_SOURCE.to_string()),
            funds: overrides
                .funds
                .or_else(|| file.sources.funds.clone())
                .unwrap_or_else(|| DEFAULT_FUNDS_SOURCE.to_string()),
            history: overrides.history.or_else(|| file.sources.history.clone()),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.sources.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            input: CalculationInput {
                principal: amount,
                days: overrides.days.or(defaults.days).unwrap_or(DEFAULT_DAYS),
                use_simple_interest_for_funds: overrides
                    .simple_interest
                    .or(defaults.simple_interest)
                    .unwrap_or(false),
            },
            deposit_ranking: RankingOptions {
                order,
                key: sort_by,
                limit,
            },
            fund_ranking: RankingOptions {
                order: fund_order,
                key: fund_sort_by,
                limit,
            },
            format: overrides.format.or(defaults.format).unwrap_or_default(),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("rates", &self.rates)?;
        validate_non_empty_string("funds", &self.funds)?;
        validate_source("rates", &self.rates)?;
        validate_source("funds", &self.funds)?;
        if let Some(history) = &self.history {
            validate_source("history", history)?;
        }
        crate::utils::validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        if let Some(limit) = self.deposit_ranking.limit {
            crate::utils::validation::validate_positive_number("limit", limit, 1)?;
        }
        self.input.validate()
    }
}

impl ConfigProvider for Settings {
    fn rates_source(&self) -> &str {
        &self.rates
    }

    fn funds_source(&self) -> &str {
        &self.funds
    }

    fn history_source(&self) -> Option<&str> {
        self.history.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[sources]
rates = "data/tasas_bancos.json"
funds = "data/fondos.json"

[defaults]
days = 60
order = "asc"
sort_by = "interest"
limit = 5
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_file_values_fill_gaps() {
        let settings = Settings::resolve(
            Overrides {
                amount: Some(50_000.0),
                ..Overrides::default()
            },
            &file_config(),
        )
        .unwrap();

        assert_eq!(settings.rates, "data/tasas_bancos.json");
        assert_eq!(settings.input.days, 60);
        assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(settings.deposit_ranking.order, SortOrder::Ascending);
        assert_eq!(settings.fund_ranking.key, SortKey::InterestEarned);
        assert_eq!(settings.fund_ranking.limit, Some(5));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::resolve(
            Overrides {
                amount: Some(1_000.0),
                days: Some(7),
                simple_interest: Some(true),
                funds: Some("https://example.com/fondos.json".to_string()),
                fund_order: Some(SortOrder::Descending),
                format: Some(OutputFormat::Json),
                ..Overrides::default()
            },
            &file_config(),
        )
        .unwrap();

        assert_eq!(settings.input.days, 7);
        assert!(settings.input.use_simple_interest_for_funds);
        assert_eq!(settings.funds, "https://example.com/fondos.json");
        assert_eq!(settings.deposit_ranking.order, SortOrder::Ascending);
        assert_eq!(settings.fund_ranking.order, SortOrder::Descending);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_compound_flag_beats_file_simple_interest() {
        let file = TomlConfig::from_toml_str("[defaults]\nsimple_interest = true\n").unwrap();

        let compound = Settings::resolve(
            Overrides {
                amount: Some(1_000.0),
                simple_interest: Some(false),
                ..Overrides::default()
            },
            &file,
        )
        .unwrap();
        assert!(!compound.input.use_simple_interest_for_funds);

        let from_file = Settings::resolve(
            Overrides {
                amount: Some(1_000.0),
                ..Overrides::default()
            },
            &file,
        )
        .unwrap();
        assert!(from_file.input.use_simple_interest_for_funds);
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(
            Overrides {
                amount: Some(100_000.0),
                ..Overrides::default()
            },
            &TomlConfig::default(),
        )
        .unwrap();

        assert_eq!(settings.rates, DEFAULT_RATES_SOURCE);
        assert_eq!(settings.funds, DEFAULT_FUNDS_SOURCE);
        assert_eq!(settings.input.days, DEFAULT_DAYS);
        assert_eq!(settings.deposit_ranking, RankingOptions::default());
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_missing_amount() {
        let err = Settings::resolve(Overrides::default(), &TomlConfig::default()).unwrap_err();
        assert!(matches!(err, CalcError::MissingConfigError { ref field } if field == "amount"));
    }

    #[test]
    fn test_invalid_amount_fails_validation() {
        let settings = Settings::resolve(
            Overrides {
                amount: Some(-10.0),
                ..Overrides::default()
            },
            &TomlConfig::default(),
        )
        .unwrap();
        assert!(matches!(
            settings.validate(),
            Err(CalcError::InvalidInputError { .. })
        ));
    }
}

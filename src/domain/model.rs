use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One bank's fixed-term deposit offer, quoted as TNA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    #[serde(rename = "banco", alias = "name", alias = "institutionName")]
    pub institution_name: String,
    #[serde(rename = "tna", alias = "annualNominalRatePct")]
    pub annual_nominal_rate_pct: f64,
}

/// One mutual fund (FCI) and its estimated monthly yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundEntry {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(
        rename = "logo",
        alias = "logoUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<String>,
    #[serde(
        rename = "rendimiento_mensual_estimado",
        alias = "monthlyEstimatedYieldPct"
    )]
    pub monthly_estimated_yield_pct: f64,
}

/// Bank rate document (`tasas_bancos.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultima_actualizacion: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tasas: Vec<RateEntry>,
}

/// Fund yield document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundTable {
    #[serde(default)]
    pub fondos: Vec<FundEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub principal: f64,
    pub days: u32,
    pub use_simple_interest_for_funds: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    Deposit,
    Fund,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Deposit => "deposit",
            InstrumentKind::Fund => "fund",
        }
    }
}

/// Interest and capital projected for a single instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub interest_earned: f64,
    pub final_capital: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub name: String,
    pub kind: InstrumentKind,
    pub interest_earned: f64,
    pub final_capital: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortOrder {
    #[serde(rename = "asc", alias = "ascending")]
    #[cfg_attr(feature = "cli", value(name = "asc", alias = "ascending"))]
    Ascending,
    #[default]
    #[serde(rename = "desc", alias = "descending")]
    #[cfg_attr(feature = "cli", value(name = "desc", alias = "descending"))]
    Descending,
}

/// Which figure a ranking compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortKey {
    #[serde(rename = "interest", alias = "interest_earned")]
    #[cfg_attr(feature = "cli", value(name = "interest"))]
    InterestEarned,
    #[default]
    #[serde(rename = "capital", alias = "final_capital")]
    #[cfg_attr(feature = "cli", value(name = "capital"))]
    FinalCapital,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingOptions {
    pub order: SortOrder,
    pub key: SortKey,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub principal: f64,
    pub days: u32,
    pub simple_interest_for_funds: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates_updated_at: Option<DateTime<Utc>>,
    pub deposits: Vec<CalculationResult>,
    pub funds: Vec<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_deposit: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_fund: Option<CalculationResult>,
}

/// One published FCI unit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePoint {
    #[serde(rename = "Fecha")]
    pub date: NaiveDate,
    #[serde(rename = "Valor Cuota Parte")]
    pub unit_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyVariation {
    pub date: NaiveDate,
    pub change_pct: f64,
}

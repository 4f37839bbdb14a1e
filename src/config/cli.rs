use crate::config::Overrides;
use crate::core::report::OutputFormat;
use crate::domain::model::{SortKey, SortOrder};
use crate::utils::error::Result;
use crate::utils::format::parse_amount;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tasa-calc")]
#[command(about = "Compare fixed-term deposit and mutual fund (FCI) returns")]
pub struct CliConfig {
    /// Amount to invest, e.g. 100.000 or 1.500,50
    #[arg(short, long)]
    pub amount: String,

    /// Investment horizon in days
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Use simple instead of compound interest for funds
    #[arg(long, conflicts_with = "compound")]
    pub simple: bool,

    /// Use compound interest for funds, even if the config file says simple
    #[arg(long)]
    pub compound: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bank rates dataset (path or URL)
    #[arg(long)]
    pub rates: Option<String>,

    /// Fund yields dataset (path or URL)
    #[arg(long)]
    pub funds: Option<String>,

    /// FCI quote history (fci_data.json)
    #[arg(long)]
    pub history: Option<String>,

    #[arg(long, help = "HTTP timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    #[arg(long, value_enum)]
    pub sort_by: Option<SortKey>,

    /// Fund table order, defaults to --order
    #[arg(long, value_enum)]
    pub fund_order: Option<SortOrder>,

    /// Fund table sort key, defaults to --sort-by
    #[arg(long, value_enum)]
    pub fund_sort_by: Option<SortKey>,

    /// Keep only the first N entries of each table
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the rendered report to this file
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Result<Overrides> {
        Ok(Overrides {
            amount: Some(parse_amount(&self.amount)?),
            days: self.days,
            simple_interest: match (self.simple, self.compound) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            rates: self.rates.clone(),
            funds: self.funds.clone(),
            history: self.history.clone(),
            timeout_seconds: self.timeout,
            order: self.order,
            sort_by: self.sort_by,
            fund_order: self.fund_order,
            fund_sort_by: self.fund_sort_by,
            limit: self.limit,
            format: self.format,
        })
    }
}

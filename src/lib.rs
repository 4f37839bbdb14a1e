pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{loader::DatasetLoader, storage::LocalStorage};
pub use config::{toml_config::TomlConfig, Overrides, Settings};
pub use crate::core::{
    calculator::{compute_deposit_interest, compute_fund_interest, rank_results},
    engine::CalculatorEngine,
    history::FundHistory,
};
pub use utils::error::{CalcError, Result};

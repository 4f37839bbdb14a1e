pub mod calculator;
pub mod engine;
pub mod history;
pub mod report;

pub use crate::domain::model::{
    CalculationInput, CalculationReport, CalculationResult, FundEntry, FundTable, InstrumentKind,
    Projection, RankingOptions, RateEntry, RateTable, SortKey, SortOrder,
};
pub use crate::domain::ports::{ConfigProvider, RateSource, Storage};
pub use crate::utils::error::Result;

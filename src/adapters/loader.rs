use crate::adapters::http::{build_client, fetch_bytes};
use crate::core::history::FundHistory;
use crate::domain::model::{FundEntry, FundTable, RateEntry, RateTable};
use crate::domain::ports::{ConfigProvider, RateSource, Storage};
use crate::utils::error::Result;
use crate::utils::validation::is_remote;
use reqwest::Client;
use serde::Deserialize;

/// Either the full scraper document or just its entry list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RateDocument {
    Table(RateTable),
    Entries(Vec<RateEntry>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FundDocument {
    Table(FundTable),
    Entries(Vec<FundEntry>),
}

pub fn parse_rate_table(bytes: &[u8]) -> Result<RateTable> {
    Ok(match serde_json::from_slice::<RateDocument>(bytes)? {
        RateDocument::Table(table) => table,
        RateDocument::Entries(tasas) => RateTable {
            ultima_actualizacion: None,
            tasas,
        },
    })
}

pub fn parse_fund_table(bytes: &[u8]) -> Result<FundTable> {
    Ok(match serde_json::from_slice::<FundDocument>(bytes)? {
        FundDocument::Table(table) => table,
        FundDocument::Entries(fondos) => FundTable { fondos },
    })
}

/// Loads datasets from local files or http(s) URLs, as the config says.
pub struct DatasetLoader<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> DatasetLoader<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = build_client(config.timeout_seconds())?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }

    async fn read(&self, location: &str) -> Result<Vec<u8>> {
        if is_remote(location) {
            fetch_bytes(&self.client, location).await
        } else {
            self.storage.read_file(location).await
        }
    }

    /// FCI quote history, when a history source is configured.
    pub async fn load_history(&self) -> Result<Option<FundHistory>> {
        match self.config.history_source() {
            Some(location) => {
                let bytes = self.read(location).await?;
                let history = FundHistory::from_json_slice(&bytes)?;
                tracing::debug!("Loaded {} FCI quotes", history.points().len());
                Ok(Some(history))
            }
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> RateSource for DatasetLoader<S, C> {
    async fn load_rates(&self) -> Result<RateTable> {
        let bytes = self.read(self.config.rates_source()).await?;
        parse_rate_table(&bytes)
    }

    async fn load_funds(&self) -> Result<FundTable> {
        let bytes = self.read(self.config.funds_source()).await?;
        parse_fund_table(&bytes)
    }
}

use crate::domain::model::{FundTable, RateTable};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn rates_source(&self) -> &str;
    fn funds_source(&self) -> &str;
    fn history_source(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

/// Where the bank rate and fund yield datasets come from.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn load_rates(&self) -> Result<RateTable>;
    async fn load_funds(&self) -> Result<FundTable>;
}

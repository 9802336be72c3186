use crate::domain::model::{BreedSelection, BreedTaxonomy};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read access to a Dog CEO style breed catalog.
#[async_trait]
pub trait BreedSource: Send + Sync {
    async fn list_all_breeds(&self) -> Result<BreedTaxonomy>;
    async fn random_image_for(&self, selection: &BreedSelection) -> Result<String>;
    async fn random_image(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn concurrent_fetch(&self) -> bool;
}

use crate::domain::model::{BreedSelection, RandomBreedImage, RenderContext};
use crate::domain::ports::BreedSource;
use crate::domain::services::{derive_breed_name, flatten_taxonomy};
use crate::utils::error::Result;

/// Translates page intents into upstream calls. Holds no per-request state.
pub struct BreedGateway<S: BreedSource> {
    source: S,
    concurrent_fetch: bool,
}

impl<S: BreedSource> BreedGateway<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            concurrent_fetch: false,
        }
    }

    /// Issue the breed list and the route-specific call together instead of
    /// one after the other.
    pub fn with_concurrent_fetch(mut self, enabled: bool) -> Self {
        self.concurrent_fetch = enabled;
        self
    }

    pub async fn fetch_breed_list(&self) -> Result<Vec<String>> {
        let taxonomy = self.source.list_all_breeds().await?;
        let entries = flatten_taxonomy(&taxonomy);
        tracing::debug!(
            "Fetched {} breeds ({} display entries)",
            taxonomy.breeds.len(),
            entries.len()
        );
        Ok(entries)
    }

    pub async fn fetch_breed_image(&self, selection: &str) -> Result<String> {
        let parsed = BreedSelection::parse(selection)?;
        tracing::debug!("Fetching image for {}", parsed.image_path());
        self.source.random_image_for(&parsed).await
    }

    pub async fn fetch_random_breed_image(&self) -> Result<RandomBreedImage> {
        let image_url = self.source.random_image().await?;
        let breed_name = derive_breed_name(&image_url)?;
        Ok(RandomBreedImage {
            image_url,
            breed_name,
        })
    }

    pub async fn load_breed_page(&self) -> Result<RenderContext> {
        Ok(RenderContext::breed_list(self.fetch_breed_list().await?))
    }

    pub async fn load_selected_breed_page(&self, selection: &str) -> Result<RenderContext> {
        let (breeds, image_url) = if self.concurrent_fetch {
            tokio::try_join!(self.fetch_breed_list(), self.fetch_breed_image(selection))?
        } else {
            let breeds = self.fetch_breed_list().await?;
            (breeds, self.fetch_breed_image(selection).await?)
        };
        Ok(RenderContext::selected(breeds, image_url, selection))
    }

    pub async fn load_random_breed_page(&self) -> Result<RenderContext> {
        let (breeds, image) = if self.concurrent_fetch {
            tokio::try_join!(self.fetch_breed_list(), self.fetch_random_breed_image())?
        } else {
            let breeds = self.fetch_breed_list().await?;
            (breeds, self.fetch_random_breed_image().await?)
        };
        Ok(RenderContext::random(breeds, image))
    }
}

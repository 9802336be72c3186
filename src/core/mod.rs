pub mod gateway;

pub use crate::domain::model::{BreedSelection, BreedTaxonomy, RandomBreedImage, RenderContext};
pub use crate::domain::ports::{BreedSource, ConfigProvider};
pub use crate::utils::error::Result;
pub use gateway::BreedGateway;

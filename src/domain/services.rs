use crate::domain::model::{Breed, BreedSelection, BreedTaxonomy};
use crate::utils::error::{GalleryError, Result};
use serde_json::Value;

impl BreedTaxonomy {
    /// Parses the `message` object of `breeds/list/all`, keeping key order.
    pub fn from_message(message: Value) -> Result<Self> {
        let Value::Object(map) = message else {
            return Err(GalleryError::MalformedResponse {
                message: format!("expected breed object, got {}", message),
            });
        };

        let mut breeds = Vec::with_capacity(map.len());
        for (name, subs) in map {
            let Value::Array(items) = subs else {
                return Err(GalleryError::MalformedResponse {
                    message: format!("sub-breeds of '{}' are not an array", name),
                });
            };

            let sub_breeds = items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(GalleryError::MalformedResponse {
                        message: format!("sub-breed of '{}' is not a string: {}", name, other),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;

            breeds.push(Breed { name, sub_breeds });
        }

        Ok(Self { breeds })
    }

    /// Number of entries `flatten_taxonomy` will produce.
    pub fn leaf_count(&self) -> usize {
        self.breeds
            .iter()
            .map(|b| b.sub_breeds.len().max(1))
            .sum()
    }
}

/// One display entry per breed without sub-breeds, otherwise one per
/// `"<breed> <sub>"` pair.
pub fn flatten_taxonomy(taxonomy: &BreedTaxonomy) -> Vec<String> {
    let mut entries = Vec::with_capacity(taxonomy.leaf_count());
    for breed in &taxonomy.breeds {
        if breed.sub_breeds.is_empty() {
            entries.push(breed.name.clone());
        } else {
            for sub in &breed.sub_breeds {
                entries.push(format!("{} {}", breed.name, sub));
            }
        }
    }
    entries
}

impl BreedSelection {
    /// Only the first space separates breed from sub-breed, so
    /// "american water spaniel" becomes breed "american", sub "water spaniel".
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(GalleryError::InvalidSelection {
                value: raw.to_string(),
            });
        }

        Ok(match raw.split_once(' ') {
            Some((breed, sub)) => Self {
                breed: breed.to_string(),
                sub_breed: Some(sub.to_string()),
            },
            None => Self {
                breed: raw.to_string(),
                sub_breed: None,
            },
        })
    }

    /// Path segments of the upstream "random image for breed" endpoint.
    pub fn image_path_segments(&self) -> Vec<&str> {
        let mut segments = vec!["breed", self.breed.as_str()];
        if let Some(sub) = &self.sub_breed {
            segments.push(sub.as_str());
        }
        segments.extend(["images", "random"]);
        segments
    }

    pub fn image_path(&self) -> String {
        self.image_path_segments().join("/")
    }
}

/// Breed name is the second-to-last `/` segment of an image URL,
/// e.g. `.../breeds/retriever-golden/n123.jpg`.
pub fn derive_breed_name(image_url: &str) -> Result<String> {
    let parts: Vec<&str> = image_url.split('/').collect();
    if parts.len() < 2 {
        return Err(GalleryError::MalformedResponse {
            message: format!("image URL has no breed segment: {}", image_url),
        });
    }

    let name = parts[parts.len() - 2];
    if name.is_empty() {
        return Err(GalleryError::MalformedResponse {
            message: format!("image URL has an empty breed segment: {}", image_url),
        });
    }
    Ok(name.to_string())
}

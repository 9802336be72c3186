use serde::{Deserialize, Serialize};

/// One top-level breed and its sub-breeds, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    pub sub_breeds: Vec<String>,
}

/// The breed catalog as returned by `breeds/list/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedTaxonomy {
    pub breeds: Vec<Breed>,
}

/// A user's choice from the breed list, split on its first space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedSelection {
    pub breed: String,
    pub sub_breed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomBreedImage {
    pub image_url: String,
    pub breed_name: String,
}

/// Values handed to the page template. Unused fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub breeds: Vec<String>,
    pub selected_image: Option<String>,
    pub selected_name: Option<String>,
    pub random_image: Option<String>,
    pub random_name: Option<String>,
}

impl RenderContext {
    pub fn breed_list(breeds: Vec<String>) -> Self {
        Self {
            breeds,
            ..Default::default()
        }
    }

    pub fn selected(breeds: Vec<String>, image_url: String, selection: &str) -> Self {
        Self {
            breeds,
            selected_image: Some(image_url),
            selected_name: Some(selection.to_string()),
            random_image: None,
            random_name: None,
        }
    }

    pub fn random(breeds: Vec<String>, image: RandomBreedImage) -> Self {
        Self {
            breeds,
            selected_image: None,
            selected_name: None,
            random_image: Some(image.image_url),
            random_name: Some(image.breed_name),
        }
    }
}

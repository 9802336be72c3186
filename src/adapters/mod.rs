// Adapters layer: concrete implementations of the domain ports.

pub mod http;

pub use http::{DogApiClient, DEFAULT_API_BASE_URL};

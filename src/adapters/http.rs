use crate::domain::model::{BreedSelection, BreedTaxonomy};
use crate::domain::ports::{BreedSource, ConfigProvider};
use crate::utils::error::{GalleryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://dog.ceo/api";

/// Every Dog CEO response wraps its payload in `message`.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    message: Value,
    status: Option<String>,
}

/// `BreedSource` backed by the Dog CEO REST API.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    base_url: Url,
    client: Client,
}

impl DogApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(config.api_base_url(), builder.build()?)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| GalleryError::InvalidConfigValueError {
            field: "upstream.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GalleryError::InvalidConfigValueError {
                field: "upstream.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self { base_url, client })
    }

    /// Appends percent-encoded segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_message(&self, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(segments);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {} ({})", status, url);

        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            return Err(GalleryError::UpstreamFetchError {
                status: status.as_u16(),
                payload,
            });
        }

        let body = response.text().await?;
        let envelope: ApiEnvelope =
            serde_json::from_str(&body).map_err(|e| GalleryError::MalformedResponse {
                message: format!("{} from {}", e, url),
            })?;

        match envelope.status.as_deref() {
            None | Some("success") => Ok(envelope.message),
            Some(_) => Err(GalleryError::UpstreamFetchError {
                status: status.as_u16(),
                payload: body,
            }),
        }
    }

    async fn get_image_url(&self, segments: &[&str]) -> Result<String> {
        match self.get_message(segments).await? {
            Value::String(url) => Ok(url),
            other => Err(GalleryError::MalformedResponse {
                message: format!("expected image URL, got {}", other),
            }),
        }
    }
}

#[async_trait]
impl BreedSource for DogApiClient {
    async fn list_all_breeds(&self) -> Result<BreedTaxonomy> {
        let message = self.get_message(&["breeds", "list", "all"]).await?;
        BreedTaxonomy::from_message(message)
    }

    async fn random_image_for(&self, selection: &BreedSelection) -> Result<String> {
        self.get_image_url(&selection.image_path_segments()).await
    }

    async fn random_image(&self) -> Result<String> {
        self.get_image_url(&["breeds", "image", "random"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = DogApiClient::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(
            client.endpoint(&["breeds", "list", "all"]).as_str(),
            "https://dog.ceo/api/breeds/list/all"
        );

        let trailing = DogApiClient::new("https://dog.ceo/api/").unwrap();
        assert_eq!(
            trailing.endpoint(&["breeds", "image", "random"]).as_str(),
            "https://dog.ceo/api/breeds/image/random"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = DogApiClient::new("http://localhost:3000").unwrap();
        let selection = BreedSelection::parse("american water spaniel").unwrap();
        assert_eq!(
            client.endpoint(&selection.image_path_segments()).path(),
            "/breed/american/water%20spaniel/images/random"
        );
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(DogApiClient::new("not a url").is_err());
        assert!(DogApiClient::new("mailto:dogs@example.com").is_err());
    }

    #[tokio::test]
    async fn test_list_all_breeds() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/breeds/list/all");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "message": {"bulldog": [], "terrier": ["boston", "yorkshire"]},
                    "status": "success"
                }));
        });

        let client = DogApiClient::new(&server.base_url()).unwrap();
        let taxonomy = client.list_all_breeds().await.unwrap();

        api_mock.assert();
        assert_eq!(taxonomy.breeds.len(), 2);
        assert_eq!(taxonomy.breeds[0].name, "bulldog");
        assert_eq!(taxonomy.breeds[1].sub_breeds, vec!["boston", "yorkshire"]);
    }

    #[tokio::test]
    async fn test_random_image_for_sub_breed() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/breed/hound/afghan/images/random");
            then.status(200).json_body(json!({
                "message": "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg",
                "status": "success"
            }));
        });

        let client = DogApiClient::new(&server.base_url()).unwrap();
        let selection = BreedSelection::parse("hound afghan").unwrap();
        let url = client.random_image_for(&selection).await.unwrap();

        api_mock.assert();
        assert!(url.ends_with("hound-afghan/n02088094_1003.jpg"));
    }

    #[tokio::test]
    async fn test_error_status_carries_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/breed/unicorn/images/random");
            then.status(404).json_body(json!({
                "status": "error",
                "message": "Breed not found (master breed does not exist)",
                "code": 404
            }));
        });

        let client = DogApiClient::new(&server.base_url()).unwrap();
        let selection = BreedSelection::parse("unicorn").unwrap();
        let err = client.random_image_for(&selection).await.unwrap_err();

        match err {
            GalleryError::UpstreamFetchError { status, payload } => {
                assert_eq!(status, 404);
                assert!(payload.contains("Breed not found"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_in_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/breeds/image/random");
            then.status(200)
                .json_body(json!({"status": "error", "message": "maintenance"}));
        });

        let client = DogApiClient::new(&server.base_url()).unwrap();
        let err = client.random_image().await.unwrap_err();

        assert!(matches!(err, GalleryError::UpstreamFetchError { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_malformed_bodies() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/breeds/list/all");
            then.status(200).body("<html>not json</html>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/breeds/image/random");
            then.status(200)
                .json_body(json!({"status": "success", "message": ["a", "b"]}));
        });

        let client = DogApiClient::new(&server.base_url()).unwrap();

        assert!(matches!(
            client.list_all_breeds().await,
            Err(GalleryError::MalformedResponse { .. })
        ));
        assert!(matches!(
            client.random_image().await,
            Err(GalleryError::MalformedResponse { .. })
        ));
    }
}

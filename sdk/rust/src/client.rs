//! HTTP client for the PlantDesk API

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{
    CareGuideline, Category, Color, Fertilizer, FertilizerSchedule, Plant, SizeProfile, Tag,
    TagGroup, Variant, VariantTag,
};

/// Delay before the single retry on a server error
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Response body for successful deletes
#[derive(Debug, serde::Deserialize)]
pub struct Deleted {
    pub message: String,
}

/// PlantDesk API client
///
/// Cheap to clone; the connection pool and the read cache are shared.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Arc<String>,
    cache: Arc<RwLock<HashMap<(String, String), serde_json::Value>>>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::new(base_url),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn plants(&self) -> Resource<'_, Plant> {
        self.resource("/api/plants")
    }

    pub fn categories(&self) -> Resource<'_, Category> {
        self.resource("/api/categories")
    }

    pub fn colors(&self) -> Resource<'_, Color> {
        self.resource("/api/colors")
    }

    pub fn tag_groups(&self) -> Resource<'_, TagGroup> {
        self.resource("/api/tag-groups")
    }

    pub fn tags(&self) -> Resource<'_, Tag> {
        self.resource("/api/tags")
    }

    pub fn fertilizers(&self) -> Resource<'_, Fertilizer> {
        self.resource("/api/fertilizers")
    }

    pub fn variants(&self) -> Resource<'_, Variant> {
        self.resource("/api/variants")
    }

    pub fn size_profiles(&self) -> Resource<'_, SizeProfile> {
        self.resource("/api/size-profiles")
    }

    pub fn care_guidelines(&self) -> Resource<'_, CareGuideline> {
        self.resource("/api/care-guidelines")
    }

    pub fn fertilizer_schedules(&self) -> Resource<'_, FertilizerSchedule> {
        self.resource("/api/fertilizer-schedules")
    }

    pub fn variant_tags(&self) -> Resource<'_, VariantTag> {
        self.resource("/api/variant-tags")
    }

    fn resource<T>(&self, path: &'static str) -> Resource<'_, T> {
        Resource {
            client: self,
            path,
            _marker: PhantomData,
        }
    }

    /// GET with read cache. A hit never touches the network.
    async fn get_cached<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, ClientError> {
        let key = (path.to_string(), query.to_string());
        if let Some(value) = self.cache.read().get(&key).cloned() {
            return Ok(serde_json::from_value(value)?);
        }

        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };
        let value: serde_json::Value = self.request(Method::GET, &url, None::<&()>).await?;
        self.cache.write().insert(key, value.clone());
        Ok(serde_json::from_value(value)?)
    }

    /// Mutating request; clears the read cache on success.
    async fn mutate<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let value: serde_json::Value = self.request(method, &url, body).await?;
        self.cache.write().clear();
        Ok(serde_json::from_value(value)?)
    }

    /// Send a request, retrying once after a short delay on a 5xx
    /// response. A request that never produced a response is not
    /// re-sent; the server may already have applied a mutation.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ClientError> {
        match self.send_once(method.clone(), url, body).await {
            Ok(value) => Ok(value),
            Err(e) if is_retryable(&e) => {
                tracing::debug!(%url, error = %e, "Retrying request");
                tokio::time::sleep(RETRY_DELAY).await;
                self.send_once(method, url, body).await
            }
            Err(e) => Err(e),
        }
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ClientError> {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &bytes));
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn is_retryable(e: &ClientError) -> bool {
    match e {
        ClientError::Api { status, .. } => *status >= 500,
        ClientError::Transport(_) | ClientError::Decode(_) => false,
    }
}

/// Typed handle for one API resource
pub struct Resource<'a, T> {
    client: &'a Client,
    path: &'static str,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Resource<'_, T> {
    /// List all records
    pub async fn list(&self) -> Result<Vec<T>, ClientError> {
        self.client.get_cached(self.path, "").await
    }

    /// List records filtered by a query parameter, e.g. `("plantId", id)`
    pub async fn list_by(&self, key: &str, value: &str) -> Result<Vec<T>, ClientError> {
        let query = format!("{}={}", key, value);
        self.client.get_cached(self.path, &query).await
    }

    /// Fetch one record by ID
    pub async fn get(&self, id: &str) -> Result<T, ClientError> {
        let path = format!("{}/{}", self.path, id);
        self.client.get_cached(&path, "").await
    }

    /// Create a record
    pub async fn create(&self, body: &impl Serialize) -> Result<T, ClientError> {
        self.client.mutate(Method::POST, self.path, Some(body)).await
    }

    /// Partially update a record
    pub async fn update(&self, id: &str, body: &impl Serialize) -> Result<T, ClientError> {
        let path = format!("{}/{}", self.path, id);
        self.client.mutate(Method::PUT, &path, Some(body)).await
    }

    /// Delete a record
    pub async fn delete(&self, id: &str) -> Result<Deleted, ClientError> {
        let path = format!("{}/{}", self.path, id);
        self.client.mutate(Method::DELETE, &path, None::<&()>).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn plant_json(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "isActive": true,
            "isFeatured": false,
            "biodiversityBooster": false,
            "carbonAbsorber": false,
            "createdAt": "2026-01-15T09:30:00Z"
        })
    }

    #[tokio::test]
    async fn list_hits_cache_on_second_read() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/plants");
                then.status(200).json_body(json!([plant_json("p1", "Monstera")]));
            })
            .await;

        let client = Client::new(server.base_url());
        let first = client.plants().list().await.unwrap();
        let second = client.plants().list().await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second[0].name, "Monstera");
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn mutation_invalidates_cache() {
        let server = MockServer::start_async().await;
        let list_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/plants");
                then.status(200).json_body(json!([plant_json("p1", "Monstera")]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/plants");
                then.status(201).json_body(plant_json("p2", "Tulsi"));
            })
            .await;

        let client = Client::new(server.base_url());
        client.plants().list().await.unwrap();
        client
            .plants()
            .create(&json!({"name": "Tulsi"}))
            .await
            .unwrap();
        client.plants().list().await.unwrap();

        // cache was cleared by the create, so the list was fetched twice
        list_mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn server_error_is_retried_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/plants/p1");
                then.status(500).json_body(json!({
                    "error": "internal_error",
                    "code": "INTERNAL",
                    "message": "boom"
                }));
            })
            .await;

        let client = Client::new(server.base_url());
        let result = client.plants().get("p1").await;

        assert!(matches!(
            result,
            Err(ClientError::Api { status: 500, .. })
        ));
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn transport_failure_is_not_retried() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        use tokio::io::AsyncReadExt;

        // A server that accepts, reads the request, and hangs up without
        // answering. Re-sending here could double-apply a mutation the
        // server already committed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let seen = connections.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                seen.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
            }
        });

        let client = Client::new(format!("http://{}", addr));
        let result = client.plants().list().await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
        assert_eq!(connections.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn api_error_carries_code_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/plants/missing");
                then.status(404).json_body(json!({
                    "error": "not_found",
                    "code": "PLANT_NOT_FOUND",
                    "message": "Plant not found: missing"
                }));
            })
            .await;

        let client = Client::new(server.base_url());
        let err = client.plants().get("missing").await.unwrap_err();

        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "PLANT_NOT_FOUND");
                assert!(message.contains("missing"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn delete_returns_confirmation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/categories/c1");
                then.status(200)
                    .json_body(json!({"message": "Category deleted successfully"}));
            })
            .await;

        let client = Client::new(server.base_url());
        let deleted = client.categories().delete("c1").await.unwrap();
        assert_eq!(deleted.message, "Category deleted successfully");
    }

    #[tokio::test]
    async fn filtered_list_uses_query_string() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/variants")
                    .query_param("plantId", "p1");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = Client::new(server.base_url());
        let variants = client.variants().list_by("plantId", "p1").await.unwrap();
        assert!(variants.is_empty());
        mock.assert_async().await;
    }
}

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::domain::model::{Fact, FactPayload, Group, GroupPayload, Health, Person, PersonPayload};
use crate::utils::error::{ApiError, Result};

// Body-less requests still need a concrete Serialize type for fetch_json.
const NO_BODY: Option<&()> = None;

/// Stateless client for the social-circle service. Holds no entity data;
/// every call returns a fresh snapshot from the remote service.
pub struct CircleClient {
    http: Client,
    base_url: String,
}

impl CircleClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            // Paths below start with '/', so the base must not end with one.
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single transport path for every operation: issue the request, check
    /// the status, decode the JSON body into the caller's type. The decoded
    /// shape is trusted; serde surfaces mismatches as errors.
    async fn fetch_json<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Request to {} failed: {}", url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("API error on {}: {}, body: {}", url, status, body);
            return Err(ApiError::Status(status));
        }

        if status == StatusCode::NO_CONTENT {
            // 204 carries no body; unit result types decode from JSON null.
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to read response from {}: {}", url, e);
                return Err(e.into());
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("Failed to decode response from {}: {}", url, e);
                Err(e.into())
            }
        }
    }

    // Groups

    pub async fn get_groups(&self) -> Result<Vec<Group>> {
        self.fetch_json(Method::GET, "/groups", NO_BODY).await
    }

    pub async fn get_group(&self, id: &str) -> Result<Group> {
        self.fetch_json(Method::GET, &format!("/groups/{}", id), NO_BODY)
            .await
    }

    pub async fn create_group(&self, group: &GroupPayload) -> Result<Group> {
        self.fetch_json(Method::POST, "/groups", Some(group)).await
    }

    pub async fn update_group(&self, id: &str, group: &GroupPayload) -> Result<()> {
        self.fetch_json(Method::PUT, &format!("/groups/{}", id), Some(group))
            .await
    }

    // People

    pub async fn get_people_by_group(&self, group_id: &str) -> Result<Vec<Person>> {
        self.fetch_json(Method::GET, &format!("/groups/{}/people", group_id), NO_BODY)
            .await
    }

    pub async fn get_person(&self, id: &str) -> Result<Person> {
        self.fetch_json(Method::GET, &format!("/people/{}", id), NO_BODY)
            .await
    }

    pub async fn create_person(&self, person: &PersonPayload) -> Result<Person> {
        self.fetch_json(Method::POST, "/people", Some(person)).await
    }

    pub async fn update_person(&self, id: &str, person: &PersonPayload) -> Result<()> {
        self.fetch_json(Method::PUT, &format!("/people/{}", id), Some(person))
            .await
    }

    // Facts

    pub async fn add_fact(&self, person_id: &str, content: &str) -> Result<Fact> {
        let payload = FactPayload {
            content: content.to_string(),
        };
        self.fetch_json(
            Method::POST,
            &format!("/people/{}/facts", person_id),
            Some(&payload),
        )
        .await
    }

    pub async fn delete_fact(&self, person_id: &str, fact_id: &str) -> Result<()> {
        self.fetch_json(
            Method::DELETE,
            &format!("/people/{}/facts/{}", person_id, fact_id),
            NO_BODY,
        )
        .await
    }

    pub async fn health(&self) -> Result<Health> {
        self.fetch_json(Method::GET, "/health", NO_BODY).await
    }
}

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{classify, ErrorBody, StoreError};

static STORE: OnceLock<StoreClient> = OnceLock::new();

/// Thin client for the hosted relational store's REST layer
/// (PostgREST-compatible). Holds no state beyond the connection settings;
/// every repository call is one independent round trip.
pub struct StoreClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

/// Read connection settings from the environment and stash the client in a
/// process-wide slot, mirroring how the server initializes its other
/// singletons at startup.
pub fn init_store() -> Result<(), StoreError> {
    let base_url = std::env::var("STORE_URL")
        .map_err(|_| StoreError::Config("STORE_URL is not set".to_string()))?;
    let api_key = std::env::var("STORE_API_KEY")
        .map_err(|_| StoreError::Config("STORE_API_KEY is not set".to_string()))?;

    let client = StoreClient {
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key,
        http: reqwest::Client::new(),
    };

    STORE
        .set(client)
        .map_err(|_| StoreError::Config("store client already initialized".to_string()))
}

pub fn store() -> Result<&'static StoreClient, StoreError> {
    STORE
        .get()
        .ok_or_else(|| StoreError::Config("store client not initialized".to_string()))
}

impl StoreClient {
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_rows<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(classify(status.as_u16(), &body));
        }
        Ok(response.json::<Vec<T>>().await?)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .request(reqwest::Method::GET, table)
            .query(query)
            .send()
            .await?;
        Self::read_rows(response).await
    }

    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let mut rows: Vec<T> = Self::read_rows(response).await?;
        rows.pop().ok_or_else(|| StoreError::Remote {
            status: 200,
            message: "insert returned no row".to_string(),
        })
    }

    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        query: &[(String, String)],
        body: &B,
    ) -> Result<T, StoreError> {
        let response = self
            .request(reqwest::Method::PATCH, table)
            .header("Prefer", "return=representation")
            .query(query)
            .json(body)
            .send()
            .await?;
        let mut rows: Vec<T> = Self::read_rows(response).await?;
        rows.pop().ok_or_else(|| StoreError::Remote {
            status: 200,
            message: "update matched no row".to_string(),
        })
    }

    pub async fn delete(&self, table: &str, query: &[(String, String)]) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::DELETE, table)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(classify(status.as_u16(), &body));
        }
        Ok(())
    }
}

//! Todo API Client
//!
//! Async wrapper around the `/todos` REST endpoints. Every request carries
//! the configured identity in the `X-User-Id` header.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::{Item, USER_ID_HEADER};

/// Errors returned by the todo API client
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Todo not found")]
    NotFound,

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// A request the client state hands to the network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    List,
    Create(Item),
    Update(Item),
    Delete { id: String },
}

/// Successful outcome of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Items(Vec<Item>),
    Created(Item),
    Updated,
    Deleted,
}

impl ApiResponse {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiResponse::Items(_) => "items",
            ApiResponse::Created(_) => "created",
            ApiResponse::Updated => "updated",
            ApiResponse::Deleted => "deleted",
        }
    }
}

/// Todo API client
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    config: Config,
    client: Client,
}

impl TodoApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch every todo of the configured user
    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        let response = self.request(Method::GET, self.todos_url()?).send().await?;
        let response = check(response).await?;
        Ok(response.json::<Vec<Item>>().await?)
    }

    /// Fetch a single todo; `None` when the server has no such item
    pub async fn get(&self, id: &str) -> Result<Option<Item>, ApiError> {
        let response = self.request(Method::GET, self.item_url(id)?).send().await?;
        match check(response).await {
            Ok(response) => Ok(Some(response.json::<Item>().await?)),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create a todo and return the stored version
    pub async fn create(&self, item: &Item) -> Result<Item, ApiError> {
        let response = self
            .request(Method::POST, self.todos_url()?)
            .json(item)
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json::<Item>().await?)
    }

    /// Replace an existing todo
    pub async fn update(&self, item: &Item) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, self.item_url(&item.id)?)
            .json(item)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, self.item_url(id)?).send().await?;
        check(response).await?;
        Ok(())
    }

    /// Perform a request produced by the todo store
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        match request {
            ApiRequest::List => self.list().await.map(ApiResponse::Items),
            ApiRequest::Create(item) => self.create(&item).await.map(ApiResponse::Created),
            ApiRequest::Update(item) => self.update(&item).await.map(|_| ApiResponse::Updated),
            ApiRequest::Delete { id } => self.delete(&id).await.map(|_| ApiResponse::Deleted),
        }
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(USER_ID_HEADER, self.config.user_id())
    }

    fn todos_url(&self) -> Result<Url, ApiError> {
        let url = self.config.api_url("/todos");
        Url::parse(&url).map_err(|e| ApiError::Network(format!("invalid URL {}: {}", url, e)))
    }

    fn item_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.todos_url()?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network(format!("cannot append to {}", self.config.server_url())))?
            .push(id);
        Ok(url)
    }
}

/// Map non-success statuses to errors, using the server's `error` field
/// when the body has one
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.to_string()
            } else {
                body
            }
        });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

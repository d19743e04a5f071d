//! HTTP client for the remote product collection.
//!
//! Wire format (JSON): records are `{_id, nome, descricao, quantidade,
//! foto}`, with `_id` assigned by the store. The client maps `_id` onto the
//! local identifier and keeps `quantidade` as text whether the server sends
//! a string or a number.

use reqwest::{Client, Response};
use serde::{Deserialize, Deserializer, Serialize};

use crate::store::error::StoreError;
use crate::store::product::{Product, ProductPayload};

/// Path of the product collection on the server.
const COLLECTION_PATH: &str = "/produtos";

/// Performs the list/insert/replace/remove calls against the collection
/// endpoint.
pub struct RemoteStore {
    client: Client,
    collection_url: String,
}

impl RemoteStore {
    /// Create a client for the collection at `base_url`.
    ///
    /// No request timeout is configured: an outstanding call is awaited
    /// until the server answers.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            collection_url: format!("{}{}", base_url.trim_end_matches('/'), COLLECTION_PATH),
        }
    }

    /// URL of the collection endpoint.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// `GET /produtos` — the full collection, in server order.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let response = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(|e| StoreError::Transport { source: e })?;
        let response = check_status(response).await?;

        let items: Vec<RemoteProduct> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode { source: e })?;
        Ok(items.into_iter().map(Product::from).collect())
    }

    /// `POST /produtos` — insert a record, returning the assigned id.
    pub async fn insert(&self, payload: &ProductPayload) -> Result<String, StoreError> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(&ProductBody::from(payload))
            .send()
            .await
            .map_err(|e| StoreError::Transport { source: e })?;
        let response = check_status(response).await?;

        let created: CreatedProduct = response
            .json()
            .await
            .map_err(|e| StoreError::Decode { source: e })?;
        Ok(created.id)
    }

    /// `PUT /produtos/{id}` — replace the record addressed by `id`.
    ///
    /// The response body is ignored: the caller keeps the locally-held
    /// identifier rather than reading back server-assigned fields.
    pub async fn replace(&self, id: &str, payload: &ProductPayload) -> Result<(), StoreError> {
        let response = self
            .client
            .put(format!("{}/{}", self.collection_url, id))
            .json(&ProductBody::from(payload))
            .send()
            .await
            .map_err(|e| StoreError::Transport { source: e })?;
        check_status(response).await?;
        Ok(())
    }

    /// `DELETE /produtos/{id}` — remove the record addressed by `id`.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/{}", self.collection_url, id))
            .send()
            .await
            .map_err(|e| StoreError::Transport { source: e })?;
        check_status(response).await?;
        Ok(())
    }
}

/// Map a non-2xx response to `Rejected`, extracting the JSON `{message}`
/// field when the server provides one.
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .and_then(|body| body.message);

    Err(StoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// A record as the server returns it.
#[derive(Debug, Deserialize)]
struct RemoteProduct {
    #[serde(rename = "_id")]
    id: String,
    nome: String,
    descricao: String,
    #[serde(default, deserialize_with = "quantity_as_text")]
    quantidade: String,
    #[serde(default)]
    foto: Option<String>,
}

impl From<RemoteProduct> for Product {
    fn from(remote: RemoteProduct) -> Self {
        Self {
            id: remote.id,
            name: remote.nome,
            description: remote.descricao,
            quantity: remote.quantidade,
            photo: remote.foto,
        }
    }
}

/// Request body for insert/replace. `foto` is omitted entirely when the
/// session has no photo.
#[derive(Debug, Serialize)]
struct ProductBody<'a> {
    nome: &'a str,
    descricao: &'a str,
    quantidade: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    foto: Option<&'a str>,
}

impl<'a> From<&'a ProductPayload> for ProductBody<'a> {
    fn from(payload: &'a ProductPayload) -> Self {
        Self {
            nome: &payload.name,
            descricao: &payload.description,
            quantidade: &payload.quantity,
            foto: payload.photo.as_deref(),
        }
    }
}

/// The only field read out of a create response.
#[derive(Debug, Deserialize)]
struct CreatedProduct {
    #[serde(rename = "_id")]
    id: String,
}

/// Failure bodies are `{message: …}` when the server explains itself.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Servers echo `quantidade` back as either a string or a number.
fn quantity_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(serde::de::Error::custom(
            "quantidade must be a string or a number",
        )),
    }
}

//! Typed payloads and the HTTP client for the RAG backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

// --- Backend API types (mirror what the RAG server exposes) ---

/// Root status endpoint body. Fetched on demand, never cached.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusSnapshot {
    pub vector_store_loaded: bool,
}

/// One file handed to the upload flow. Contents are opaque to the panel;
/// each file is forwarded intact in its own request.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }
}

/// Body of a successful `/upload` response.
///
/// The server reports more than the batch flow consumes — the receipt is
/// returned to the caller and logged, not displayed.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_id: Option<i64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Body of a `/query` response. Only `answer` reaches the answer region;
/// the retrieval stats are optional and logged at debug level when present.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub documents_used: Option<u32>,
    #[serde(default)]
    pub chunks_retrieved: Option<u32>,
}

/// One entry of the server's document listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInfo {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub processed: bool,
    #[serde(default)]
    pub chunks_created: Option<u32>,
    #[serde(default)]
    pub processing_status: Option<String>,
}

/// Body of a `DELETE /api/documents/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub message: String,
}

// --- Backend seam ---

/// The network dependency injected into the panel controller.
///
/// The production implementation is [`ApiClient`]; tests substitute scripted
/// fakes so the flows can be exercised without a server.
#[async_trait]
pub trait Backend {
    /// GET the root status endpoint.
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError>;

    /// POST one file as multipart form data under field name `file`.
    async fn upload_file(&self, file: &UploadFile) -> Result<UploadReceipt, PanelError>;

    /// POST a JSON `{question}` body and decode the answer.
    async fn submit_query(&self, question: &str) -> Result<QueryResponse, PanelError>;

    /// GET the server's document listing.
    async fn list_documents(&self) -> Result<Vec<DocumentInfo>, PanelError>;

    /// DELETE one indexed document by id.
    async fn delete_document(&self, id: i64) -> Result<DeleteReceipt, PanelError>;
}

// --- reqwest client ---

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend HTTP API (e.g. `http://127.0.0.1:8000`).
    pub base_url: String,
    /// TCP connection timeout.
    pub connect_timeout: Duration,
    /// Per-request read timeout.
    pub request_timeout: Duration,
}

impl ApiClientConfig {
    /// Create a config with sensible defaults.
    ///
    /// - connect_timeout: 3 s
    /// - request_timeout: 10 s
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(3),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the RAG backend. Use [`ApiClientBuilder`] for construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    client: reqwest::Client,
}

impl ApiClient {
    /// Start building a client aimed at `base_url`.
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, PanelError> {
        let url = self.url(path);
        let resp = self.client.get(&url).send().await.map_err(|e| PanelError::Connect {
            url: url.clone(),
            detail: e.to_string(),
        })?;

        if !resp.status().is_success() {
            return Err(PanelError::Api { status: resp.status().as_u16() });
        }

        let bytes = resp.bytes().await.map_err(|e| PanelError::Decode {
            url: url.clone(),
            detail: e.to_string(),
        })?;

        serde_json::from_slice::<T>(&bytes).map_err(|e| PanelError::Decode {
            url,
            detail: e.to_string(),
        })
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError> {
        self.get_json("/").await
    }

    async fn upload_file(&self, file: &UploadFile) -> Result<UploadReceipt, PanelError> {
        let url = self.url("/upload");
        let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PanelError::Connect {
                url: url.clone(),
                detail: e.to_string(),
            })?;

        if !resp.status().is_success() {
            // A rejected upload surfaces the server's body text verbatim.
            let reason = resp.text().await.map_err(|e| PanelError::Decode {
                url: url.clone(),
                detail: e.to_string(),
            })?;
            return Err(PanelError::Rejected { reason });
        }

        let bytes = resp.bytes().await.map_err(|e| PanelError::Decode {
            url: url.clone(),
            detail: e.to_string(),
        })?;

        serde_json::from_slice::<UploadReceipt>(&bytes).map_err(|e| PanelError::Decode {
            url,
            detail: e.to_string(),
        })
    }

    async fn submit_query(&self, question: &str) -> Result<QueryResponse, PanelError> {
        let url = self.url("/query");
        let body = QueryRequest { question: question.to_string() };

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PanelError::Connect {
                url: url.clone(),
                detail: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(PanelError::Api { status: resp.status().as_u16() });
        }

        let bytes = resp.bytes().await.map_err(|e| PanelError::Decode {
            url: url.clone(),
            detail: e.to_string(),
        })?;

        serde_json::from_slice::<QueryResponse>(&bytes).map_err(|e| PanelError::Decode {
            url,
            detail: e.to_string(),
        })
    }

    async fn list_documents(&self) -> Result<Vec<DocumentInfo>, PanelError> {
        self.get_json("/api/documents").await
    }

    async fn delete_document(&self, id: i64) -> Result<DeleteReceipt, PanelError> {
        let url = self.url(&format!("/api/documents/{id}"));
        let resp = self.client.delete(&url).send().await.map_err(|e| PanelError::Connect {
            url: url.clone(),
            detail: e.to_string(),
        })?;

        if !resp.status().is_success() {
            return Err(PanelError::Api { status: resp.status().as_u16() });
        }

        let bytes = resp.bytes().await.map_err(|e| PanelError::Decode {
            url: url.clone(),
            detail: e.to_string(),
        })?;

        serde_json::from_slice::<DeleteReceipt>(&bytes).map_err(|e| PanelError::Decode {
            url,
            detail: e.to_string(),
        })
    }
}

/// Builder for [`ApiClient`].
///
/// # Example
/// ```rust
/// use std::time::Duration;
/// use ragpanel::api::ApiClient;
///
/// let client = ApiClient::builder("http://127.0.0.1:8000")
///     .request_timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(client.base_url(), "http://127.0.0.1:8000");
/// ```
pub struct ApiClientBuilder {
    config: ApiClientConfig,
}

impl ApiClientBuilder {
    /// Create a builder targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { config: ApiClientConfig::new(base_url) }
    }

    /// Override the TCP connect timeout (default 3 s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Override the per-request read timeout (default 10 s).
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Consume the builder and construct an [`ApiClient`].
    pub fn build(self) -> ApiClient {
        // reqwest::Client::builder() can fail in extreme environments, but
        // unwrap_or_default() falls back to a default client instead of panicking.
        let client = reqwest::Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .timeout(self.config.request_timeout)
            .build()
            .unwrap_or_default();

        ApiClient { config: self.config, client }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Builder tests
    // -----------------------------------------------------------------------

    #[test]
    fn builder_default_timeouts() {
        let client = ApiClient::builder("http://localhost:8000").build();
        assert_eq!(client.config.connect_timeout, Duration::from_secs(3));
        assert_eq!(client.config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn builder_connect_timeout_set() {
        let client = ApiClient::builder("http://localhost:8000")
            .connect_timeout(Duration::from_secs(7))
            .build();
        assert_eq!(client.config.connect_timeout, Duration::from_secs(7));
    }

    #[test]
    fn builder_request_timeout_set() {
        let client = ApiClient::builder("http://localhost:8000")
            .request_timeout(Duration::from_secs(20))
            .build();
        assert_eq!(client.config.request_timeout, Duration::from_secs(20));
    }

    #[test]
    fn builder_stores_base_url() {
        let client = ApiClient::builder("http://example.com:9000").build();
        assert_eq!(client.base_url(), "http://example.com:9000");
    }

    #[test]
    fn config_new_has_defaults() {
        let cfg = ApiClientConfig::new("http://localhost:8000");
        assert_eq!(cfg.base_url, "http://localhost:8000");
        assert_eq!(cfg.connect_timeout, Duration::from_secs(3));
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    }

    // -----------------------------------------------------------------------
    // URL joining
    // -----------------------------------------------------------------------

    #[test]
    fn url_joins_root_path() {
        let client = ApiClient::builder("http://localhost:8000").build();
        assert_eq!(client.url("/"), "http://localhost:8000/");
    }

    #[test]
    fn url_tolerates_trailing_slash_in_base() {
        let client = ApiClient::builder("http://localhost:8000/").build();
        assert_eq!(client.url("/query"), "http://localhost:8000/query");
    }

    #[test]
    fn url_formats_document_delete_path() {
        let client = ApiClient::builder("http://localhost:8000").build();
        assert_eq!(client.url("/api/documents/42"), "http://localhost:8000/api/documents/42");
    }

    // -----------------------------------------------------------------------
    // Payload decoding
    // -----------------------------------------------------------------------

    #[test]
    fn status_snapshot_decodes_loaded() {
        let snap: StatusSnapshot =
            serde_json::from_str(r#"{"vector_store_loaded": true}"#).unwrap();
        assert!(snap.vector_store_loaded);
    }

    #[test]
    fn status_snapshot_decodes_with_extra_fields() {
        let snap: StatusSnapshot = serde_json::from_str(
            r#"{"message":"RAG API","vector_store_loaded":false,"version":"1.0"}"#,
        )
        .unwrap();
        assert!(!snap.vector_store_loaded);
    }

    #[test]
    fn status_snapshot_missing_field_is_an_error() {
        let result = serde_json::from_str::<StatusSnapshot>(r#"{"message":"RAG API"}"#);
        assert!(result.is_err(), "undecodable body must fail fast");
    }

    #[test]
    fn query_request_serializes_question_only() {
        let req = QueryRequest { question: "what is faiss?".to_string() };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"question":"what is faiss?"}"#);
    }

    #[test]
    fn query_response_decodes_answer_only() {
        let resp: QueryResponse = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        assert_eq!(resp.answer, "42");
        assert!(resp.processing_time.is_none());
        assert!(resp.documents_used.is_none());
        assert!(resp.chunks_retrieved.is_none());
    }

    #[test]
    fn query_response_decodes_retrieval_stats() {
        let resp: QueryResponse = serde_json::from_str(
            r#"{"answer":"yes","processing_time":0.82,"documents_used":3,"chunks_retrieved":5,"query_id":17}"#,
        )
        .unwrap();
        assert_eq!(resp.answer, "yes");
        assert_eq!(resp.documents_used, Some(3));
        assert_eq!(resp.chunks_retrieved, Some(5));
    }

    #[test]
    fn query_response_missing_answer_is_an_error() {
        let result = serde_json::from_str::<QueryResponse>(r#"{"processing_time":1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn upload_receipt_decodes_full_body() {
        let receipt: UploadReceipt = serde_json::from_str(
            r#"{"message":"File uploaded successfully","file_id":7,"filename":"notes.pdf","file_size":1048576}"#,
        )
        .unwrap();
        assert_eq!(receipt.message, "File uploaded successfully");
        assert_eq!(receipt.file_id, Some(7));
        assert_eq!(receipt.filename.as_deref(), Some("notes.pdf"));
        assert_eq!(receipt.file_size, Some(1_048_576));
    }

    #[test]
    fn upload_receipt_tolerates_empty_object() {
        let receipt: UploadReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.message.is_empty());
        assert!(receipt.file_id.is_none());
    }

    #[test]
    fn document_info_decodes_server_shape() {
        let doc: DocumentInfo = serde_json::from_str(
            r#"{"id":1,"filename":"a1b2_notes.pdf","original_filename":"notes.pdf",
                "file_type":"pdf","file_size":2048,"upload_date":"2024-01-01T00:00:00",
                "processed":true,"chunks_created":12,"processing_status":"completed"}"#,
        )
        .unwrap();
        assert_eq!(doc.id, 1);
        assert_eq!(doc.filename, "a1b2_notes.pdf");
        assert_eq!(doc.original_filename.as_deref(), Some("notes.pdf"));
        assert!(doc.processed);
        assert_eq!(doc.chunks_created, Some(12));
    }

    #[test]
    fn document_info_minimal_body() {
        let doc: DocumentInfo =
            serde_json::from_str(r#"{"id":9,"filename":"x.txt"}"#).unwrap();
        assert_eq!(doc.id, 9);
        assert!(!doc.processed);
        assert!(doc.processing_status.is_none());
    }

    #[test]
    fn delete_receipt_decodes_message() {
        let receipt: DeleteReceipt =
            serde_json::from_str(r#"{"message":"File 'notes.pdf' deleted successfully"}"#).unwrap();
        assert!(receipt.message.contains("deleted"));
    }

    #[test]
    fn upload_file_new_stores_name_and_bytes() {
        let file = UploadFile::new("report.pdf", vec![1, 2, 3]);
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }
}

//! Google Drive API connector implementation
//!
//! Implements the `RemoteStore` trait for Google Drive API v3.

use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
use bytes::Bytes;
use core_fetch::{
    Credential, FetchError, ListingResult, PageToken, RemoteStore, Result, Scope,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::types::FilesListResponse;

/// Google Drive API base URL
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Fixed page size: bounds memory and latency per listing call
const PAGE_SIZE: u32 = 20;

/// Fields to request for file resources
const FILE_FIELDS: &str = "id,name,mimeType,size";

/// Export target for Drive-native documents
pub const EXPORT_MIME_TYPE: &str = "application/pdf";

/// Timeout for listing calls
const LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for content transfers
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Google Drive API connector
///
/// Stateless adapter from the [`RemoteStore`] contract to Drive API v3. The
/// credential is passed into every call and never stored; the connector holds
/// only the HTTP client.
///
/// # Example
///
/// ```ignore
/// use provider_google_drive::DriveConnector;
/// use core_fetch::{Credential, RemoteStore, Scope};
///
/// let connector = DriveConnector::new(http_client);
/// let credential = Credential::new(access_token)?;
/// let page = connector.list_page(&credential, &Scope::Root, None).await?;
/// ```
pub struct DriveConnector {
    /// HTTP client for API requests
    http: Arc<dyn HttpClient>,
}

impl DriveConnector {
    /// Create a new Google Drive connector
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Build the files.list URL for a scope and optional continuation token
    fn list_url(scope: &Scope, page_token: Option<&PageToken>) -> String {
        let mut url = format!(
            "{}/files?pageSize={}&fields=nextPageToken,files({})",
            DRIVE_API_BASE, PAGE_SIZE, FILE_FIELDS
        );

        if let Some(folder_id) = scope.folder_id() {
            let query = format!("'{}' in parents", folder_id);
            url.push_str(&format!("&q={}", urlencoding::encode(&query)));
        }

        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(token.as_str())));
        }

        url
    }

    /// Execute a GET against the Drive API
    ///
    /// Transport failures surface as `Transient`; status classification is
    /// left to the caller. No retry happens here.
    async fn get(
        &self,
        credential: &Credential,
        url: String,
        timeout: Duration,
    ) -> Result<HttpResponse> {
        let request = HttpRequest::get(url)
            .bearer_token(credential.as_str())
            .accept_json()
            .timeout(timeout);

        self.http
            .execute(request)
            .await
            .map_err(|e| FetchError::Transient(e.to_string()))
    }

    /// Map a non-success Drive response onto the fetch error taxonomy
    fn classify_status(response: &HttpResponse, entity_id: &str) -> FetchError {
        let status = response.status;
        match status {
            401 | 403 => FetchError::CredentialRejected { status },
            404 => FetchError::NotFound {
                id: entity_id.to_string(),
            },
            429 => FetchError::Transient(format!("rate limited (status {})", status)),
            500..=599 => FetchError::Transient(format!("server error (status {})", status)),
            _ => FetchError::Api {
                status,
                message: response.text_lossy(),
            },
        }
    }
}

#[async_trait]
impl RemoteStore for DriveConnector {
    #[instrument(skip(self, credential), fields(scope = %scope, has_token = page_token.is_some()))]
    async fn list_page<'a>(
        &self,
        credential: &Credential,
        scope: &Scope,
        page_token: Option<&'a PageToken>,
    ) -> Result<ListingResult> {
        let url = Self::list_url(scope, page_token);
        let response = self.get(credential, url, LIST_TIMEOUT).await?;

        if !response.is_success() {
            let error = Self::classify_status(&response, scope.folder_id().unwrap_or("root"));
            warn!(status = response.status, %error, "Listing request failed");
            return Err(error);
        }

        let listing: FilesListResponse = serde_json::from_slice(&response.body)
            .map_err(|e| FetchError::MalformedResponse(format!("files.list payload: {}", e)))?;

        let entries = listing
            .files
            .into_iter()
            .map(|f| f.into_remote_entry())
            .collect::<Vec<_>>();

        debug!(
            entries = entries.len(),
            has_next = listing.next_page_token.is_some(),
            "Listed one page"
        );

        Ok(ListingResult {
            entries,
            next_page: listing.next_page_token.map(PageToken::new),
        })
    }

    #[instrument(skip(self, credential), fields(file_id = %id))]
    async fn fetch_content(&self, credential: &Credential, id: &str) -> Result<Bytes> {
        let url = format!("{}/files/{}?alt=media", DRIVE_API_BASE, id);
        let response = self.get(credential, url, DOWNLOAD_TIMEOUT).await?;

        if !response.is_success() {
            return Err(Self::classify_status(&response, id));
        }

        debug!(size_bytes = response.body.len(), "Fetched raw content");
        Ok(response.body)
    }

    #[instrument(skip(self, credential), fields(file_id = %id))]
    async fn export_content(&self, credential: &Credential, id: &str) -> Result<Bytes> {
        let url = format!(
            "{}/files/{}/export?mimeType={}",
            DRIVE_API_BASE,
            id,
            urlencoding::encode(EXPORT_MIME_TYPE)
        );
        let response = self.get(credential, url, DOWNLOAD_TIMEOUT).await?;

        if !response.is_success() {
            return Err(Self::classify_status(&response, id));
        }

        debug!(size_bytes = response.body.len(), "Fetched exported content");
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::http::RetryPolicy;
    use bridge_traits::BridgeError;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        HttpClient {}

        #[async_trait]
        impl HttpClient for HttpClient {
            async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse>;
            async fn execute_with_retry(
                &self,
                request: HttpRequest,
                policy: RetryPolicy,
            ) -> BridgeResult<HttpResponse>;
            async fn is_connected(&self) -> bool;
        }
    }

    fn ok_json(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.as_bytes().to_vec()),
        }
    }

    fn status_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            body: Bytes::from(body.as_bytes().to_vec()),
        }
    }

    fn credential() -> Credential {
        Credential::new("test_token").unwrap()
    }

    const LISTING_BODY: &str = r#"{
        "files": [
            {"id": "file1", "name": "song.mp3", "mimeType": "audio/mpeg", "size": "1024"},
            {"id": "dir1", "name": "Albums", "mimeType": "application/vnd.google-apps.folder"}
        ],
        "nextPageToken": "next_page"
    }"#;

    #[tokio::test]
    async fn test_list_page_first_page_of_root() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("pageSize=20"));
            assert!(req.url.contains("fields=nextPageToken,files(id,name,mimeType,size)"));
            assert!(!req.url.contains("pageToken"));
            assert!(!req.url.contains("&q="));
            assert_eq!(
                req.headers.get("Authorization"),
                Some(&"Bearer test_token".to_string())
            );
            Ok(ok_json(LISTING_BODY))
        });

        let connector = DriveConnector::new(Arc::new(mock_http));
        let result = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap();

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].id, "file1");
        assert_eq!(result.entries[0].size_bytes, Some(1024));
        assert!(result.entries[1].is_folder());
        assert_eq!(result.next_page, Some(PageToken::new("next_page")));
    }

    #[tokio::test]
    async fn test_list_page_folder_scope_filters_by_parent() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("&q=%27folder1%27%20in%20parents"));
            Ok(ok_json(r#"{"files": []}"#))
        });

        let connector = DriveConnector::new(Arc::new(mock_http));
        let result = connector
            .list_page(&credential(), &Scope::Folder("folder1".to_string()), None)
            .await
            .unwrap();

        assert!(result.entries.is_empty());
        assert!(result.next_page.is_none());
    }

    #[tokio::test]
    async fn test_list_page_forwards_continuation_token() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("pageToken=tok42"));
            Ok(ok_json(r#"{"files": []}"#))
        });

        let connector = DriveConnector::new(Arc::new(mock_http));
        let token = PageToken::new("tok42");
        connector
            .list_page(&credential(), &Scope::Root, Some(&token))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejected_credential_is_not_retried() {
        let mut mock_http = MockHttpClient::new();

        // times(1) asserts the core never retries an auth failure.
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(status_response(401, "Invalid Credentials")));

        let connector = DriveConnector::new(Arc::new(mock_http));
        let err = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::CredentialRejected { status: 401 }));
    }

    #[tokio::test]
    async fn test_server_error_is_transient() {
        let mut mock_http = MockHttpClient::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(status_response(503, "backend unavailable")));

        let connector = DriveConnector::new(Arc::new(mock_http));
        let err = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap_err();

        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_transport_failure_is_transient() {
        let mut mock_http = MockHttpClient::new();
        mock_http.expect_execute().times(1).returning(|_| {
            Err(BridgeError::OperationFailed("connection reset".to_string()))
        });

        let connector = DriveConnector::new(Arc::new(mock_http));
        let err = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap_err();

        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_malformed_listing_payload() {
        let mut mock_http = MockHttpClient::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(ok_json(r#"{"files": "not-an-array"}"#)));

        let connector = DriveConnector::new(Arc::new(mock_http));
        let err = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_listing_without_files_field_is_empty_page() {
        let mut mock_http = MockHttpClient::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(ok_json("{}")));

        let connector = DriveConnector::new(Arc::new(mock_http));
        let result = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap();

        assert!(result.entries.is_empty());
        assert!(result.next_page.is_none());
    }

    #[tokio::test]
    async fn test_fetch_content_uses_media_endpoint() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("/files/file1?alt=media"));
            assert!(req.headers.contains_key("Authorization"));
            Ok(HttpResponse {
                status: 200,
                headers: HashMap::new(),
                body: Bytes::from(vec![1, 2, 3, 4, 5]),
            })
        });

        let connector = DriveConnector::new(Arc::new(mock_http));
        let data = connector
            .fetch_content(&credential(), "file1")
            .await
            .unwrap();

        assert_eq!(&data[..], &[1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_fetch_content_vanished_entry() {
        let mut mock_http = MockHttpClient::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(status_response(404, "File not found")));

        let connector = DriveConnector::new(Arc::new(mock_http));
        let err = connector
            .fetch_content(&credential(), "gone")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::NotFound { id } if id == "gone"));
    }

    #[tokio::test]
    async fn test_export_content_uses_export_endpoint_with_fixed_format() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("/files/doc1/export?mimeType=application%2Fpdf"));
            assert!(!req.url.contains("alt=media"));
            Ok(HttpResponse {
                status: 200,
                headers: HashMap::new(),
                body: Bytes::from_static(b"%PDF-1.4"),
            })
        });

        let connector = DriveConnector::new(Arc::new(mock_http));
        let data = connector
            .export_content(&credential(), "doc1")
            .await
            .unwrap();

        assert_eq!(&data[..], b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_unexpected_status_maps_to_api_error() {
        let mut mock_http = MockHttpClient::new();
        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(status_response(400, "invalid query")));

        let connector = DriveConnector::new(Arc::new(mock_http));
        let err = connector
            .list_page(&credential(), &Scope::Root, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Api { status: 400, .. }));
    }
}

use std::{
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use futures::{FutureExt as _, StreamExt as _};
use reqwest::{Method, header::CONTENT_TYPE};
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt as _;
use tracing::{Span, debug, instrument, warn};

use crate::{
    Error, Result,
    params::QueryParams,
    types::{Envelope, PageInfo},
};

pub const PRODUCTION_BASE_URI: &str = "https://business-api.tiktok.com";
pub const SANDBOX_BASE_URI: &str = "https://sandbox-ads.tiktok.com";

const ACCESS_TOKEN_ENV: &str = "TIKTOK_ACCESS_TOKEN";
const SANDBOX_ENV: &str = "TIKTOK_AD_IS_SANDBOX";
const ACCESS_TOKEN_HEADER: &str = "Access-Token";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_OUTPUT_PATH: &str = ".";
const DEFAULT_FILE_NAME: &str = "video.mp4";
/// Largest page size the list endpoints accept
const MAX_PAGE_SIZE: i64 = 100;

/// A pending call to one endpoint
///
/// Derefs to the request so optional fields can be filled in before awaiting it.
pub struct Route<T> {
    client: Client,
    kind: T,
}

impl<T> Route<T> {
    fn new(client: &Client, kind: T) -> Self {
        Self {
            client: client.clone(),
            kind,
        }
    }

    pub fn into_inner(self) -> T {
        self.kind
    }
}

impl<T: Request> IntoFuture for Route<T> {
    type Output = Result<T::Model>;
    type IntoFuture = futures::future::BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        async move { self.client.execute(&self.kind).await }.boxed()
    }
}

impl<T> Deref for Route<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

impl<T> DerefMut for Route<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.kind
    }
}

impl<T: Paginated> Route<T> {
    /// Walks every page sequentially and collects the items
    ///
    /// Starts at page 1 with the largest page size. A failing page aborts the walk.
    pub async fn all(mut self) -> Result<Vec<T::Item>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            self.kind.set_page(page, MAX_PAGE_SIZE);
            let (list, page_info) = T::split(self.client.execute(&self.kind).await?);
            debug!(
                path = T::PATH,
                page,
                total_page = page_info.total_page,
                received = list.len(),
                "fetched page"
            );
            items.extend(list);

            if page >= page_info.total_page {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

/// Entry point for every endpoint
///
/// Cheap to clone, every clone shares the same connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn new(access_token: impl Into<SecretString>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Reads the access token from `TIKTOK_ACCESS_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_token_var(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// An unset or empty variable counts as a missing token
    fn from_token_var(token: Option<String>) -> Result<Self> {
        let token = token
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingToken)?;
        Self::new(token)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Binds any endpoint to this client
    pub fn request<T: Request>(&self, kind: T) -> Route<T> {
        Route::new(self, kind)
    }

    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Envelope> {
        self.send::<()>(Method::GET, path, query, None, self.client_token()?)
            .await
    }

    pub async fn post<B>(&self, path: &str, query: &QueryParams, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, query, Some(body), self.client_token()?)
            .await
    }

    pub async fn put<B>(&self, path: &str, query: &QueryParams, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, query, Some(body), self.client_token()?)
            .await
    }

    pub async fn delete(&self, path: &str, query: &QueryParams) -> Result<Envelope> {
        self.send::<()>(Method::DELETE, path, query, None, self.client_token()?)
            .await
    }

    /// GET `path` and decode the envelope `data` into `T`
    pub async fn do_get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> Result<T> {
        self.get(path, query).await?.decode()
    }

    /// POST `body` to `path` and decode the envelope `data` into `T`
    pub async fn do_post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post(path, &QueryParams::new(), body).await?.decode()
    }

    pub(crate) async fn execute<T: Request>(&self, request: &T) -> Result<T::Model> {
        let mut query = QueryParams::new();
        request.query(&mut query)?;

        let token = match request.auth() {
            Auth::Client => self.client_token()?,
            Auth::Token(token) => Some(token),
            Auth::Anonymous => None,
        };

        let body = request.body();
        self.send(T::METHOD, T::PATH, &query, body.as_ref(), token)
            .await?
            .decode()
    }

    /// Streams the file at `url` to `output_path/file_name`
    ///
    /// An empty `output_path` or `file_name` falls back to `.` and `video.mp4`.
    /// Media URLs are pre-signed, so no access token is sent along.
    #[instrument(skip_all, fields(url = %download.url))]
    pub async fn download(&self, download: &Download) -> Result<PathBuf> {
        if download.url.is_empty() {
            return Err(Error::Validation("URL cannot be empty".into()));
        }

        let response = self
            .downloader
            .get(&download.url)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::Status(status.as_u16()));
        }

        let output_path = if download.output_path.as_os_str().is_empty() {
            Path::new(DEFAULT_OUTPUT_PATH)
        } else {
            download.output_path.as_path()
        };
        let file_name = if download.file_name.is_empty() {
            DEFAULT_FILE_NAME
        } else {
            download.file_name.as_str()
        };

        tokio::fs::create_dir_all(output_path).await?;
        let target = output_path.join(file_name);
        let mut file = tokio::fs::File::create(&target).await?;

        let mut stream = response.bytes_stream();
        let mut written = 0;
        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len();
        }
        file.flush().await?;

        debug!(path = %target.display(), bytes = written, "download complete");
        Ok(target)
    }

    fn client_token(&self) -> Result<Option<&SecretString>> {
        self.access_token
            .as_ref()
            .map(Some)
            .ok_or(Error::MissingToken)
    }

    #[instrument(
        name = "tiktok_request",
        skip_all,
        fields(
            http.method = %method,
            http.path = path,
            api.code = tracing::field::Empty,
            api.request_id = tracing::field::Empty,
        )
    )]
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<&B>,
        token: Option<&SecretString>,
    ) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .reqwest
            .request(method, format!("{}{path}", self.base_url));

        if !query.is_empty() {
            request = request.query(query.as_pairs());
        }

        if let Some(token) = token {
            request = request.header(ACCESS_TOKEN_HEADER, token.expose_secret());
        }

        if let Some(body) = body {
            let json = serde_json::to_vec(body).map_err(Error::Body)?;
            request = request.header(CONTENT_TYPE, "application/json").body(json);
        }

        let request = request.build().map_err(Error::Build)?;
        debug!(url = %request.url(), "sending request");

        let response = self.reqwest.execute(request).await?;
        let status = response.status();
        let raw = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = raw.len(), "received response");

        let envelope: Envelope = serde_json::from_slice(&raw).map_err(Error::Decode)?;

        let span = Span::current();
        if let Some(code) = envelope.code {
            span.record("api.code", code);
        }
        if let Some(request_id) = &envelope.request_id {
            span.record("api.request_id", request_id.as_str());
        }

        envelope.into_result().inspect_err(|e| {
            if let Some(api_error) = e.api() {
                warn!(code = api_error.code, message = %api_error.message, "api returned an error");
            }
        })
    }
}

/// Only the exact value `true` selects the sandbox
fn sandbox_from(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Configures a [Client]
///
/// Unless overridden, the base URL is the production host, or the sandbox host
/// when `TIKTOK_AD_IS_SANDBOX=true`.
pub struct ClientBuilder {
    access_token: Option<SecretString>,
    base_url: Option<String>,
    sandbox: bool,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            access_token: None,
            base_url: None,
            sandbox: sandbox_from(std::env::var(SANDBOX_ENV).ok().as_deref()),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    pub fn access_token(mut self, access_token: impl Into<SecretString>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// An empty string keeps the default host
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Ignored when a custom client is supplied through [ClientBuilder::http_client]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Without an access token only the OAuth endpoints and downloads can be used
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url.filter(|url| !url.is_empty()) {
            Some(url) => url.trim_end_matches('/').into(),
            None if self.sandbox => SANDBOX_BASE_URI.into(),
            None => PRODUCTION_BASE_URI.into(),
        };

        let reqwest = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(Error::Build)?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                reqwest,
                downloader: reqwest::Client::builder().build().map_err(Error::Build)?,
                base_url,
                access_token: self.access_token,
            }),
        })
    }
}

pub struct ClientInner {
    reqwest: reqwest::Client,
    downloader: reqwest::Client,
    base_url: Box<str>,
    access_token: Option<SecretString>,
}

impl ClientInner {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Which access token goes into the `Access-Token` header
pub enum Auth<'a> {
    /// The token the client was built with
    Client,
    /// A token carried by the request itself
    Token(&'a SecretString),
    /// No header at all
    Anonymous,
}

/// One Business API endpoint
pub trait Request: Send + Sync + Sized + 'static {
    type Model: DeserializeOwned + Send + 'static;
    type Body: Serialize + Send + Sync;

    const METHOD: Method;
    const PATH: &'static str;

    fn query(&self, _query: &mut QueryParams) -> Result<()> {
        Ok(())
    }

    fn body(&self) -> Option<Self::Body> {
        None
    }

    fn auth(&self) -> Auth<'_> {
        Auth::Client
    }
}

/// An endpoint answering with `list` + `page_info`
pub trait Paginated: Request {
    type Item: Send;

    fn set_page(&mut self, page: i64, page_size: i64);

    fn split(model: Self::Model) -> (Vec<Self::Item>, PageInfo);
}

/// Implements [Paginated] for requests with `page`/`page_size` fields and a `Page` model
macro_rules! paginated {
    ($($request:ty => $item:ty),+ $(,)?) => {
        $(
            impl $crate::client::Paginated for $request {
                type Item = $item;

                fn set_page(&mut self, page: i64, page_size: i64) {
                    self.page = Some(page);
                    self.page_size = Some(page_size);
                }

                fn split(model: Self::Model) -> (Vec<$item>, $crate::types::PageInfo) {
                    (model.list, model.page_info)
                }
            }
        )+
    };
}
pub(crate) use paginated;

/// Where [Client::download] puts a file
#[derive(Debug, Clone)]
pub struct Download {
    pub url: String,
    pub output_path: PathBuf,
    pub file_name: String,
}

impl Download {
    /// Defaults to `./video.mp4`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            file_name: DEFAULT_FILE_NAME.into(),
        }
    }

    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestResponse {
        id: String,
        name: String,
    }

    fn ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "OK",
            "request_id": "req-123",
            "data": data,
        }))
    }

    async fn client(server: &MockServer) -> Client {
        Client::builder()
            .access_token("test-token")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_defaults_to_production() {
        let client = Client::builder()
            .sandbox(false)
            .access_token("t")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), PRODUCTION_BASE_URI);
    }

    #[test]
    fn builder_selects_sandbox() {
        let client = Client::builder().sandbox(true).build().unwrap();
        assert_eq!(client.base_url(), SANDBOX_BASE_URI);
    }

    #[test]
    fn explicit_base_url_wins_and_loses_trailing_slash() {
        let client = Client::builder()
            .sandbox(true)
            .base_url("https://custom-url.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://custom-url.com");
    }

    #[test]
    fn empty_base_url_keeps_default() {
        let client = Client::builder()
            .sandbox(false)
            .base_url("")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), PRODUCTION_BASE_URI);
    }

    #[test]
    fn sandbox_variable_must_be_exactly_true() {
        assert!(sandbox_from(Some("true")));
        assert!(!sandbox_from(Some("false")));
        assert!(!sandbox_from(Some("TRUE")));
        assert!(!sandbox_from(Some("1")));
        assert!(!sandbox_from(Some("")));
        assert!(!sandbox_from(None));
    }

    #[test]
    fn unset_token_variable_is_missing_token() {
        let err = Client::from_token_var(None).err().unwrap();
        assert!(matches!(err, Error::MissingToken));
    }

    #[test]
    fn empty_token_variable_is_missing_token() {
        let err = Client::from_token_var(Some(String::new())).err().unwrap();
        assert!(matches!(err, Error::MissingToken));
    }

    #[test]
    fn token_variable_builds_client() {
        use secrecy::ExposeSecret;

        let client = Client::from_token_var(Some("env-token".into())).unwrap();
        assert_eq!(
            client.access_token.as_ref().unwrap().expose_secret(),
            "env-token"
        );
    }

    #[tokio::test]
    async fn get_sends_token_header_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test/path"))
            .and(header("Access-Token", "test-token"))
            .and(query_param("test-param", "test-value"))
            .respond_with(ok(json!({"id": "1", "name": "x"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut query = QueryParams::new();
        query.set("test-param", "test-value");
        let envelope = client(&server).await.get("/test/path", &query).await.unwrap();

        assert_eq!(envelope.code, Some(0));
        assert_eq!(envelope.message.as_deref(), Some("OK"));
        assert_eq!(envelope.request_id.as_deref(), Some("req-123"));
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test/path"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"test-field": "test-value"})))
            .respond_with(ok(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let envelope = client(&server)
            .await
            .post(
                "/test/path",
                &QueryParams::new(),
                &json!({"test-field": "test-value"}),
            )
            .await
            .unwrap();
        assert!(envelope.is_success());
    }

    #[tokio::test]
    async fn put_and_delete_use_their_verbs() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/test/path"))
            .respond_with(ok(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/test/path"))
            .respond_with(ok(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let query = QueryParams::new();
        client.put("/test/path", &query, &json!({"a": 1})).await.unwrap();
        client.delete("/test/path", &query).await.unwrap();
    }

    #[tokio::test]
    async fn non_zero_code_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 40000,
                "message": "Invalid request",
                "request_id": "req-err",
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .get("/test/path", &QueryParams::new())
            .await
            .unwrap_err();
        let api = err.api().unwrap();
        assert_eq!(api.code, 40000);
        assert_eq!(api.message, "Invalid request");
        assert_eq!(api.request_id, "req-err");
    }

    #[tokio::test]
    async fn malformed_envelope_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .get("/test/path", &QueryParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn do_get_decodes_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test/path"))
            .and(query_param("key1", "value1"))
            .and(query_param("key2", "value2"))
            .respond_with(ok(json!({"id": "test-123", "name": "Test Name"})))
            .mount(&server)
            .await;

        let mut query = QueryParams::new();
        query.set("key1", "value1").set("key2", "value2");
        let result: TestResponse = client(&server)
            .await
            .do_get("/test/path", &query)
            .await
            .unwrap();
        assert_eq!(
            result,
            TestResponse {
                id: "test-123".into(),
                name: "Test Name".into()
            }
        );
    }

    #[tokio::test]
    async fn do_get_reports_data_mismatch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ok(json!("a string, not an object")))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .do_get::<TestResponse>("/test/path", &QueryParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[tokio::test]
    async fn do_post_decodes_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test/post"))
            .and(body_json(json!({"name": "test-name", "value": 42})))
            .respond_with(ok(json!({"id": "created-123", "name": "SUCCESS"})))
            .mount(&server)
            .await;

        let result: TestResponse = client(&server)
            .await
            .do_post("/test/post", &json!({"name": "test-name", "value": 42}))
            .await
            .unwrap();
        assert_eq!(result.id, "created-123");
    }

    #[tokio::test]
    async fn missing_token_fails_before_sending() {
        let server = MockServer::start().await;
        let client = Client::builder().base_url(server.uri()).build().unwrap();

        let err = client.get("/test/path", &QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, Error::MissingToken));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_token_header_is_a_build_error() {
        let server = MockServer::start().await;
        let client = Client::builder()
            .access_token("bad\ntoken")
            .base_url(server.uri())
            .build()
            .unwrap();

        let err = client.get("/test/path", &QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, Error::Build(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_http_error() {
        let client = Client::builder()
            .access_token("t")
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();

        let err = client.get("/test/path", &QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ok(json!({})).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = Client::builder()
            .access_token("t")
            .base_url(server.uri())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let err = client.get("/slow", &QueryParams::new()).await.unwrap_err();
        assert!(err.is_timeout());
    }
}

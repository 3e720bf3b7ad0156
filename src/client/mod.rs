//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    Email, LoginInfo, Phone, ReceiptDetail, ReceiptRef, SessionToken, SmsPassword, TotalAmount,
    ValidationError,
};
use crate::transport;

const DEFAULT_ENDPOINT: &str = "https://proverkacheka.nalog.ru:9999";

const SIGNUP_PATH: &str = "v1/mobile/users/signup";
const RESTORE_PATH: &str = "v1/mobile/users/restore";
const LOGIN_PATH: &str = "v1/mobile/users/login";

const AUTHORIZATION_HEADER: &str = "Authorization";
const DEVICE_ID_HEADER: &str = "device-id";
const DEVICE_OS_HEADER: &str = "device-os";

const REQUEST_CONTENT_TYPE: &str = "application/json";

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Raw HTTP response as seen by the client layer.
///
/// The body is kept as bytes so that error reporting can carry it unmodified.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Minimal HTTP seam used by [`TaxClient`].
///
/// The default implementation is backed by `reqwest`; supply your own through
/// [`TaxClientBuilder::transport`] to intercept traffic (tests do exactly
/// that). Implementations must fully read the response body on every path.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(&'static str, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(&'static str, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut request = self.client.get(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header("Content-Type", REQUEST_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TaxClient`].
///
/// Every request-path variant names the operation it came from, so a caller
/// can diagnose a failure without re-invoking. Nothing is retried.
pub enum TaxError {
    /// A construction option was rejected (bad endpoint URL, HTTP client
    /// build failure).
    #[error("invalid configuration: {0}")]
    Config(#[source] BoxError),

    /// Request marshalling failed. Not expected with validated domain inputs,
    /// but surfaced distinctly rather than folded into transport errors.
    #[error("{operation}: failed to build request")]
    RequestBuild {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("{operation}: transport error")]
    Transport {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// The server answered, but not with the documented success status.
    /// The body is carried unmodified for diagnostics, never parsed.
    #[error("{operation}: unexpected HTTP status {status} with body: {}", String::from_utf8_lossy(.body))]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
        body: Vec<u8>,
    },

    /// Response body is not valid JSON for the expected shape.
    #[error("{operation}: invalid response body")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`TaxClient`].
///
/// Options are applied in order; the first failing one aborts
/// [`TaxClientBuilder::build`] with [`TaxError::Config`].
pub struct TaxClientBuilder {
    phone: Phone,
    endpoint: String,
    session_token: SessionToken,
    http: Option<Arc<dyn HttpTransport>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TaxClientBuilder {
    /// Create a builder with the default endpoint and no overrides.
    pub fn new(phone: Phone) -> Self {
        Self {
            phone,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            session_token: SessionToken::default(),
            http: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the service base URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Pre-seed the session token, e.g. one obtained by an earlier login.
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = SessionToken::new(token);
        self
    }

    /// Supply a custom HTTP transport instead of the built-in `reqwest` one.
    ///
    /// When set, [`timeout`](Self::timeout) and
    /// [`user_agent`](Self::user_agent) have no effect.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http = Some(transport);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TaxClient`].
    pub fn build(self) -> Result<TaxClient, TaxError> {
        url::Url::parse(&self.endpoint).map_err(|err| TaxError::Config(Box::new(err)))?;
        let endpoint = self.endpoint.trim_end_matches('/').to_owned();

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| TaxError::Config(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(TaxClient {
            phone: self.phone,
            token: self.session_token,
            endpoint,
            http,
        })
    }
}

#[derive(Clone)]
/// Client for the proverkacheka.nalog.ru receipt-verification API.
///
/// Holds the account phone number and the current session token; every
/// authenticated call recomputes its `Authorization` header from that pair, so
/// a [`login`](TaxClient::login) immediately changes the credentials of
/// subsequent calls. [`login`](TaxClient::login) takes `&mut self` because it
/// is the only operation that mutates session state; to share one client
/// across tasks, wrap it in your own lock.
///
/// Each operation performs exactly one HTTP round trip and fully reads the
/// response body before returning, on success and on error alike.
pub struct TaxClient {
    phone: Phone,
    token: SessionToken,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TaxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxClient")
            .field("phone", &self.phone)
            .field("token", &self.token)
            .field("endpoint", &self.endpoint)
            .field("http", &"<dyn HttpTransport>")
            .finish()
    }
}

impl TaxClient {
    /// Create a client against the production endpoint.
    ///
    /// For more customization, use [`TaxClient::builder`].
    pub fn new(phone: Phone) -> Self {
        Self {
            phone,
            token: SessionToken::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(phone: Phone) -> TaxClientBuilder {
        TaxClientBuilder::new(phone)
    }

    /// The account phone number this client authenticates as.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Current session token (empty until a login or a builder pre-seed).
    pub fn session_token(&self) -> &SessionToken {
        &self.token
    }

    /// Register the phone/email pair with the service.
    ///
    /// The service answers with an SMS code to complete via
    /// [`login`](TaxClient::login). Success is HTTP 204 exactly; any other
    /// status, 2xx included, is [`TaxError::UnexpectedStatus`].
    pub async fn register(&self, email: Email) -> Result<(), TaxError> {
        const OPERATION: &str = "register";

        let body = transport::encode_signup_json(&email, &self.phone).map_err(|err| {
            TaxError::RequestBuild {
                operation: OPERATION,
                source: Box::new(err),
            }
        })?;

        let response = self
            .http
            .post_json(&self.url_for(SIGNUP_PATH), body)
            .await
            .map_err(|source| TaxError::Transport {
                operation: OPERATION,
                source,
            })?;

        expect_status(OPERATION, 204, response)?;
        Ok(())
    }

    /// Exchange the SMS code for a session, returning the account details.
    ///
    /// The SMS password becomes the session token *before* the request is
    /// issued, so a failed login still leaves the token replaced. The service
    /// treats the code as the Basic-auth password from the moment it is
    /// issued; a retry of any authenticated call after a transient login
    /// failure must already use it.
    pub async fn login(&mut self, sms_password: SmsPassword) -> Result<LoginInfo, TaxError> {
        const OPERATION: &str = "login";

        self.token = SessionToken::from(sms_password);

        let response = self
            .http
            .get(&self.url_for(LOGIN_PATH), self.auth_headers())
            .await
            .map_err(|source| TaxError::Transport {
                operation: OPERATION,
                source,
            })?;

        let body = expect_status(OPERATION, 200, response)?;
        transport::decode_login_json(&body).map_err(|source| TaxError::Decode {
            operation: OPERATION,
            source,
        })
    }

    /// Request a fresh SMS password for an already registered phone.
    pub async fn restore(&self) -> Result<(), TaxError> {
        const OPERATION: &str = "restore";

        let body =
            transport::encode_restore_json(&self.phone).map_err(|err| TaxError::RequestBuild {
                operation: OPERATION,
                source: Box::new(err),
            })?;

        let response = self
            .http
            .post_json(&self.url_for(RESTORE_PATH), body)
            .await
            .map_err(|source| TaxError::Transport {
                operation: OPERATION,
                source,
            })?;

        expect_status(OPERATION, 204, response)?;
        Ok(())
    }

    /// Check that a receipt with the given identifiers and total exists.
    ///
    /// HTTP 204 means the receipt is known to the service; any other status is
    /// [`TaxError::UnexpectedStatus`] with the response body attached.
    pub async fn bill_check(
        &self,
        receipt: &ReceiptRef,
        total: TotalAmount,
    ) -> Result<(), TaxError> {
        const OPERATION: &str = "bill_check";

        let path = transport::bill_check_path(receipt, total);
        let response = self
            .http
            .get(&self.url_for(&path), self.auth_headers())
            .await
            .map_err(|source| TaxError::Transport {
                operation: OPERATION,
                source,
            })?;

        expect_status(OPERATION, 204, response)?;
        Ok(())
    }

    /// Fetch the full receipt record for the given identifiers.
    ///
    /// Requires a logged-in session. The service insists on `device-id` and
    /// `device-os` headers being present even though it accepts them empty.
    pub async fn bill_detail(&self, receipt: &ReceiptRef) -> Result<ReceiptDetail, TaxError> {
        const OPERATION: &str = "bill_detail";

        let path = transport::bill_detail_path(receipt);
        let mut headers = self.auth_headers();
        headers.push((DEVICE_ID_HEADER, String::new()));
        headers.push((DEVICE_OS_HEADER, String::new()));

        let response = self
            .http
            .get(&self.url_for(&path), headers)
            .await
            .map_err(|source| TaxError::Transport {
                operation: OPERATION,
                source,
            })?;

        let body = expect_status(OPERATION, 200, response)?;
        transport::decode_receipt_json(&body).map_err(|source| TaxError::Decode {
            operation: OPERATION,
            source,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    // Recomputed per call so the header always reflects the current token.
    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![(
            AUTHORIZATION_HEADER,
            transport::basic_auth_value(&self.phone, &self.token),
        )]
    }
}

fn expect_status(
    operation: &'static str,
    expected: u16,
    response: HttpResponse,
) -> Result<Vec<u8>, TaxError> {
    if response.status != expected {
        return Err(TaxError::UnexpectedStatus {
            operation,
            status: response.status,
            body: response.body,
        });
    }
    Ok(response.body)
}

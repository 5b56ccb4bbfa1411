use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session_guard::SessionGuard;

/// Which credential an outgoing request carries.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Credential<'a> {
    /// Token of the stored session, read when the request is sent. A 401
    /// clears the session.
    Session,
    /// A token that has not been persisted yet. A 401 is reported as a
    /// plain server error and leaves the stored session alone.
    Explicit(&'a str),
    Anonymous,
}

/// HTTP client for the backend. Every call goes through `execute`.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: SessionGuard,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, session: SessionGuard) -> Self {
        Self {
            http: Client::new(),
            config,
            session,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionGuard {
        &self.session
    }

    /// Start a request against `path` relative to the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Endpoint` if the path does not form a valid URL.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.config.endpoint(path)?;
        Ok(self.http.request(method, url))
    }

    /// Send an authenticated request and run the response interceptor.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthExpired` on 401 (after clearing the session).
    /// A 401 for a token that was replaced while the request was in flight
    /// is reported as `ApiError::Server` and the newer session is kept.
    /// Any other non-success status is `ApiError::Server`, and a transport
    /// failure is `ApiError::Network`.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        self.dispatch(request, Credential::Session).await
    }

    pub(crate) async fn dispatch(
        &self,
        request: RequestBuilder,
        credential: Credential<'_>,
    ) -> Result<Response, ApiError> {
        let attached = match credential {
            Credential::Session => self.session.bearer_token(),
            Credential::Explicit(_) | Credential::Anonymous => None,
        };
        let request = match (credential, &attached) {
            (Credential::Session, Some(token)) => request.bearer_auth(token),
            (Credential::Explicit(token), _) => request.bearer_auth(token),
            _ => request,
        };

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            path = response.url().path(),
            status = status.as_u16(),
            "api response"
        );

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && matches!(credential, Credential::Session) {
            let current = match &attached {
                Some(token) => self.session.clear_session_if(token),
                None => self.session.clear_session().map(|()| true),
            };
            match current {
                Ok(true) => {
                    tracing::warn!(path = response.url().path(), "backend rejected token, session cleared");
                    return Err(ApiError::AuthExpired);
                }
                Ok(false) => {
                    tracing::debug!(
                        path = response.url().path(),
                        "401 for a token that was replaced in flight, newer session kept"
                    );
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to clear session after 401");
                    return Err(ApiError::AuthExpired);
                }
            }
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            detail: error_detail(status, &body),
        })
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See `execute`; additionally `ApiError::Decode` for unexpected bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        let response = self.execute(request).await?;
        decode(response).await
    }

    /// Send `body` as JSON and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// See `get_json`.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, path)?.json(body);
        let response = self.execute(request).await?;
        decode(response).await
    }

    /// `GET path` and return the raw body, for file downloads.
    ///
    /// # Errors
    ///
    /// See `execute`.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.request(Method::GET, path)?;
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Send a request whose answer body is irrelevant.
    ///
    /// # Errors
    ///
    /// See `execute`.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let request = self.request(method, path)?;
        self.execute(request).await?;
        Ok(())
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Human-readable message from an error body.
///
/// The backend sends `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "..."}, ...]}` for validation failures. Anything
/// else falls back to the status reason.
pub(crate) fn error_detail(status: StatusCode, body: &[u8]) -> String {
    let parsed = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .and_then(|detail| match detail {
            Value::String(message) => Some(message),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .map(str::to_owned)
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        })
        .filter(|message| !message.trim().is_empty());

    parsed.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned()
    })
}

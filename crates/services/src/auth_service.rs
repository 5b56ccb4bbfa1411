use reqwest::{Method, StatusCode};

use edu_core::{Credentials, Registration, Role, Route, landing_route_for};

use crate::api_client::{ApiClient, Credential, decode};
use crate::dto::{LoginResponse, NewUser, UserSummary};
use crate::error::{ApiError, AuthError};

/// Sign-in, sign-up and sign-out against the backend.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Authenticate, persist the session and return where to go next.
    ///
    /// Nothing is persisted unless the backend produced both a token and a
    /// known role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` for refused credentials,
    /// `AuthError::MalformedResponse` when the backend's answer lacks a token
    /// or a usable role, and `AuthError::Api` for transport or server errors.
    pub async fn login(&self, credentials: &Credentials) -> Result<Route, AuthError> {
        let request = self
            .api
            .request(Method::POST, "/auth/login")?
            .form(&[
                ("username", credentials.email()),
                ("password", credentials.password()),
            ]);
        let response = self
            .api
            .dispatch(request, Credential::Anonymous)
            .await
            .map_err(rejection)?;
        let body: LoginResponse = decode(response).await?;

        let token = body
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::MalformedResponse("missing access token".into()))?
            .to_owned();

        let (role, username) = match body.role.as_deref() {
            Some(raw) => (Role::parse(raw), body.username.clone()),
            None => {
                let me = self.current_user(&token).await?;
                (me.role, body.username.clone().or(Some(me.username)))
            }
        };
        if !role.is_assignable() {
            return Err(AuthError::MalformedResponse(format!(
                "unknown role `{}`",
                body.role.as_deref().unwrap_or(role.as_str())
            )));
        }

        let username = username.or_else(|| Some(credentials.email().to_owned()));
        let session = self
            .api
            .session()
            .set_session(&token, role, username.as_deref())?;
        tracing::info!(role = %session.role(), "signed in");
        Ok(landing_route_for(session.role()))
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` when the backend refuses the account (its
    /// message is in `ApiError::Server::detail`).
    pub async fn register(&self, registration: &Registration) -> Result<UserSummary, AuthError> {
        let payload = NewUser {
            username: registration.username(),
            email: registration.email(),
            password: registration.password(),
            role: registration.role(),
        };
        let request = self.api.request(Method::POST, "/users/")?.json(&payload);
        let response = self.api.dispatch(request, Credential::Anonymous).await?;
        let user: UserSummary = decode(response).await?;
        tracing::info!(user_id = user.id, role = %user.role, "account registered");
        Ok(user)
    }

    /// Forget the local session and return the login route.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if the session store refuses the removal.
    pub fn logout(&self) -> Result<Route, AuthError> {
        self.api.session().clear_session()?;
        tracing::info!("signed out");
        Ok(Route::Login)
    }

    async fn current_user(&self, token: &str) -> Result<UserSummary, AuthError> {
        let request = self.api.request(Method::GET, "/auth/me")?;
        let response = self
            .api
            .dispatch(request, Credential::Explicit(token))
            .await
            .map_err(rejection)?;
        Ok(decode(response).await?)
    }
}

fn rejection(err: ApiError) -> AuthError {
    match err {
        ApiError::Server { status, detail } if status == StatusCode::UNAUTHORIZED.as_u16() => {
            AuthError::Rejected(detail)
        }
        other => AuthError::Api(other),
    }
}

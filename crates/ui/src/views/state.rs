use dioxus::prelude::*;
use services::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The backend rejected the token; the session is already cleared.
    SessionExpired,
    Forbidden,
    Unavailable,
    Server(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::SessionExpired => "Your session has expired. Please sign in again.".into(),
            ViewError::Forbidden => "You do not have access to this page.".into(),
            ViewError::Unavailable => "Cannot reach the server. Please try again later.".into(),
            ViewError::Server(detail) => detail.clone(),
            ViewError::Unknown => "Something went wrong. Please try again.".into(),
        }
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        tracing::debug!(error = %err, "request failed");
        match err {
            ApiError::AuthExpired => ViewError::SessionExpired,
            ApiError::Server { status: 403, .. } => ViewError::Forbidden,
            ApiError::Server { detail, .. } => ViewError::Server(detail),
            ApiError::Network(_) => ViewError::Unavailable,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_token_maps_to_session_expired() {
        assert_eq!(ViewError::from(ApiError::AuthExpired), ViewError::SessionExpired);
    }

    #[test]
    fn server_detail_is_shown_to_the_user() {
        let err = ViewError::from(ApiError::Server {
            status: 404,
            detail: "Course not found".into(),
        });
        assert_eq!(err.message(), "Course not found");
        let err = ViewError::from(ApiError::Server {
            status: 403,
            detail: "Access denied".into(),
        });
        assert_eq!(err, ViewError::Forbidden);
    }
}

use crate::api_client::ApiClient;
use crate::dto::QuizResult;
use crate::error::ApiError;

/// Quiz results of the signed-in student.
#[derive(Clone)]
pub struct ResultService {
    api: ApiClient,
}

impl ResultService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn my_results(&self) -> Result<Vec<QuizResult>, ApiError> {
        self.api.get_json("/student/results").await
    }
}

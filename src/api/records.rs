use super::client::{ApiClient, ApiError};
use crate::models::{AddPayload, MutationResponse, TargetPayload};

impl ApiClient {
    /// Record a consumption event
    pub async fn add_consumption(&self, payload: &AddPayload) -> Result<MutationResponse, ApiError> {
        self.post("/api/add", payload).await
    }

    /// Update the daily target
    pub async fn update_target(&self, payload: &TargetPayload) -> Result<MutationResponse, ApiError> {
        self.post("/api/target", payload).await
    }

    /// Clear every record of the current day
    pub async fn reset_today(&self) -> Result<MutationResponse, ApiError> {
        self.post_empty("/api/reset_today").await
    }

    /// Delete a single consumption or bill record
    pub async fn delete_consumption(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete(&format!("/api/delete_consumption/{}", id)).await
    }
}

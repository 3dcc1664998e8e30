use super::client::{ApiClient, ApiError};
use crate::models::{Streak, Summary, TodayStatus};

impl ApiClient {
    /// Get today's total and the daily target
    pub async fn get_today_status(&self) -> Result<TodayStatus, ApiError> {
        self.get("/api/today_status").await
    }

    /// Get the current saving streak
    pub async fn get_streak(&self) -> Result<Streak, ApiError> {
        self.get("/api/streak").await
    }

    /// Get the precomputed weekly summary texts
    pub async fn get_summary(&self) -> Result<Summary, ApiError> {
        self.get("/api/summary").await
    }
}

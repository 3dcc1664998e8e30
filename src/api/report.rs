use super::client::{ApiClient, ApiError};
use crate::models::{Period, ReportData};

impl ApiClient {
    /// Get chart data and bill history for a reporting period
    pub async fn get_report_data(&self, period: Period) -> Result<ReportData, ApiError> {
        self.get(&format!("/api/report_data?period={}", period.as_str()))
            .await
    }
}

pub mod bills;
pub mod client;
pub mod records;
pub mod report;
pub mod status;
pub mod weather;

pub use client::{ApiClient, ApiError};

use crate::models::{
    AddPayload, CostRequest, CostResponse, EstimateRequest, MutationResponse, Period, ReportData,
    ReverseEstimate, Streak, Summary, TargetPayload, TodayStatus, WeatherAdvice,
};

/// Backend operations the dashboard depends on. `ApiClient` talks HTTP;
/// tests substitute an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn today_status(&self) -> Result<TodayStatus, ApiError>;
    async fn streak(&self) -> Result<Streak, ApiError>;
    async fn summary(&self) -> Result<Summary, ApiError>;
    async fn report(&self, period: Period) -> Result<ReportData, ApiError>;
    async fn add_consumption(&self, payload: &AddPayload) -> Result<MutationResponse, ApiError>;
    async fn update_target(&self, payload: &TargetPayload) -> Result<MutationResponse, ApiError>;
    async fn reset_today(&self) -> Result<MutationResponse, ApiError>;
    async fn delete_record(&self, id: i64) -> Result<MutationResponse, ApiError>;
    async fn weather_advice(&self) -> Result<WeatherAdvice, ApiError>;
    async fn estimate_usage(&self, request: &EstimateRequest) -> Result<ReverseEstimate, ApiError>;
    async fn calculate_cost(&self, request: &CostRequest) -> Result<CostResponse, ApiError>;
}

impl DashboardApi for ApiClient {
    async fn today_status(&self) -> Result<TodayStatus, ApiError> {
        self.get_today_status().await
    }

    async fn streak(&self) -> Result<Streak, ApiError> {
        self.get_streak().await
    }

    async fn summary(&self) -> Result<Summary, ApiError> {
        self.get_summary().await
    }

    async fn report(&self, period: Period) -> Result<ReportData, ApiError> {
        self.get_report_data(period).await
    }

    async fn add_consumption(&self, payload: &AddPayload) -> Result<MutationResponse, ApiError> {
        ApiClient::add_consumption(self, payload).await
    }

    async fn update_target(&self, payload: &TargetPayload) -> Result<MutationResponse, ApiError> {
        ApiClient::update_target(self, payload).await
    }

    async fn reset_today(&self) -> Result<MutationResponse, ApiError> {
        ApiClient::reset_today(self).await
    }

    async fn delete_record(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.delete_consumption(id).await
    }

    async fn weather_advice(&self) -> Result<WeatherAdvice, ApiError> {
        self.get_weather_advice().await
    }

    async fn estimate_usage(&self, request: &EstimateRequest) -> Result<ReverseEstimate, ApiError> {
        self.estimate_usage_from_price(request).await
    }

    async fn calculate_cost(&self, request: &CostRequest) -> Result<CostResponse, ApiError> {
        ApiClient::calculate_cost(self, request).await
    }
}

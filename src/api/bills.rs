use super::client::{ApiClient, ApiError};
use crate::models::{CostRequest, CostResponse, EstimateRequest, ReverseEstimate};

impl ApiClient {
    /// Estimate usage from a bill amount
    pub async fn estimate_usage_from_price(
        &self,
        request: &EstimateRequest,
    ) -> Result<ReverseEstimate, ApiError> {
        self.post("/api/estimate_usage_from_price", request).await
    }

    /// Itemise the bill for a usage volume
    pub async fn calculate_cost(&self, request: &CostRequest) -> Result<CostResponse, ApiError> {
        self.post("/api/calculate_cost", request).await
    }
}

use super::client::{ApiClient, ApiError};
use crate::models::WeatherAdvice;

impl ApiClient {
    /// Get the weather and the matching water-saving advice
    pub async fn get_weather_advice(&self) -> Result<WeatherAdvice, ApiError> {
        self.get("/weather-advice").await
    }
}

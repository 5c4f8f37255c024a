use reqwest::Client;

use crate::{
    error::GenerationError,
    models::plan::{GeneratePlanRequest, GeneratePlanResponse},
};

pub const GENERIC_FAILURE: &str = "Failed to generate travel plan";

/// Anything that can turn trip + preference data into itinerary text.
#[allow(async_fn_in_trait)]
pub trait PlanGenerator {
    async fn generate(&self, request: &GeneratePlanRequest) -> Result<String, GenerationError>;
}

/// Calls the generation endpoint over HTTP.
#[derive(Clone)]
pub struct HttpPlanClient {
    http_client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpPlanClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// Key sent as `apikey` and bearer token, for deployments that gate the function.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl PlanGenerator for HttpPlanClient {
    async fn generate(&self, request: &GeneratePlanRequest) -> Result<String, GenerationError> {
        log::info!(
            "Calling generate-travel-plan for {}",
            request.trip_data.route_summary()
        );

        let mut builder = self.http_client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key).header("apikey", key);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<GeneratePlanResponse>(&body) {
            Ok(GeneratePlanResponse::Success(plan)) if plan.success => Ok(plan.travel_plan),
            Ok(GeneratePlanResponse::Failure(failure)) if !failure.error.is_empty() => {
                log::warn!("Plan generation failed ({}): {}", status, failure.error);
                Err(GenerationError::Upstream(failure.error))
            }
            _ => {
                log::warn!("Unexpected generate-travel-plan response ({}): {}", status, body);
                Err(GenerationError::InvalidResponse(GENERIC_FAILURE.to_string()))
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{
    null_as_default,
    preferences::{Budget, PreferenceSet},
    trip::TripRequest,
};

/// Body of a generation request, as sent by the client and read by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratePlanRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub trip_data: TripRequest,
    #[serde(deserialize_with = "null_as_default")]
    pub preferences: PreferenceSet,
}

/// Reply of the generation endpoint. Variants are told apart by `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratePlanResponse {
    Success(PlanSuccess),
    Failure(PlanFailure),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSuccess {
    pub success: bool,
    pub travel_plan: String,
    #[serde(default)]
    pub trip_data: TripRequest,
    #[serde(default)]
    pub preferences: PreferenceSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFailure {
    pub success: bool,
    pub error: String,
}

impl GeneratePlanResponse {
    pub fn success(travel_plan: String, request: GeneratePlanRequest) -> Self {
        GeneratePlanResponse::Success(PlanSuccess {
            success: true,
            travel_plan,
            trip_data: request.trip_data,
            preferences: request.preferences,
        })
    }

    pub fn failure(error: impl Into<String>) -> Self {
        GeneratePlanResponse::Failure(PlanFailure {
            success: false,
            error: error.into(),
        })
    }
}

/// Header card shown above a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub route: String,
    pub duration_days: Option<i64>,
    pub travelers: u32,
    pub budget: Option<Budget>,
}

impl TripSummary {
    pub fn new(trip: &TripRequest, preferences: &PreferenceSet) -> Self {
        Self {
            route: trip.route_summary(),
            duration_days: trip.duration_days(),
            travelers: preferences.travelers,
            budget: preferences.budget,
        }
    }

    pub fn duration_label(&self) -> String {
        match self.duration_days {
            Some(days) => format!("{} days", days),
            None => "Dates not set".to_string(),
        }
    }

    pub fn budget_label(&self) -> &'static str {
        self.budget.map(|budget| budget.label()).unwrap_or("Not specified")
    }
}

/// A successfully generated plan together with its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedItinerary {
    pub text: String,
    pub summary: TripSummary,
}

impl GeneratedItinerary {
    pub fn new(text: String, request: &GeneratePlanRequest) -> Self {
        Self {
            summary: TripSummary::new(&request.trip_data, &request.preferences),
            text,
        }
    }
}

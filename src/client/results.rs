use uuid::Uuid;

use crate::{
    error::GenerationError,
    models::plan::{GeneratePlanRequest, GeneratedItinerary},
    services::plan_formatter::{format_plan, PlanBlock},
};

use super::plan_client::{PlanGenerator, GENERIC_FAILURE};

#[derive(Debug, Clone, PartialEq)]
pub enum ResultState {
    Loading,
    Ready(GeneratedItinerary),
    Failed { message: String },
}

/// Short toast-style message raised when a generation settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const READY_NOTICE: Notice = Notice {
    title: "Travel Plan Ready! ✨",
    description: "Your personalized itinerary has been generated.",
};

pub const FAILED_NOTICE: Notice = Notice {
    title: "Error",
    description: "Failed to generate your travel plan. Please try again.",
};

/// A generation request handed out by a results view. The ticket fields tie
/// the eventual result back to the view and attempt that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingGeneration {
    pub view_id: Uuid,
    pub attempt: u32,
    pub request: GeneratePlanRequest,
}

/// Result of a finished generation, still tagged with its ticket.
#[derive(Debug)]
pub struct CompletedGeneration {
    pub view_id: Uuid,
    pub attempt: u32,
    pub outcome: Result<String, GenerationError>,
}

pub async fn run_generation<G: PlanGenerator>(
    generator: &G,
    pending: PendingGeneration,
) -> CompletedGeneration {
    let outcome = generator.generate(&pending.request).await;
    CompletedGeneration {
        view_id: pending.view_id,
        attempt: pending.attempt,
        outcome,
    }
}

/// The mounted results stage for one trip + preference pair.
#[derive(Debug, Clone)]
pub struct ResultsView {
    id: Uuid,
    request: GeneratePlanRequest,
    attempt: u32,
    state: ResultState,
    notice: Option<Notice>,
}

impl ResultsView {
    pub fn new(request: GeneratePlanRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            attempt: 0,
            state: ResultState::Loading,
            notice: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn request(&self) -> &GeneratePlanRequest {
        &self.request
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResultState::Loading)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ResultState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn itinerary(&self) -> Option<&GeneratedItinerary> {
        match &self.state {
            ResultState::Ready(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// Rendered blocks of the generated plan, once there is one.
    pub fn blocks(&self) -> Option<Vec<PlanBlock>> {
        self.itinerary().map(|itinerary| format_plan(&itinerary.text))
    }

    /// Starts a new attempt: back to loading, any error cleared.
    pub fn begin(&mut self) -> PendingGeneration {
        self.attempt += 1;
        self.state = ResultState::Loading;
        self.notice = None;
        PendingGeneration {
            view_id: self.id,
            attempt: self.attempt,
            request: self.request.clone(),
        }
    }

    /// Re-issues the identical request after a failure.
    pub fn retry(&mut self) -> Option<PendingGeneration> {
        match self.state {
            ResultState::Failed { .. } => Some(self.begin()),
            _ => None,
        }
    }

    pub(crate) fn accepts(&self, view_id: Uuid, attempt: u32) -> bool {
        self.id == view_id && self.attempt == attempt && self.is_loading()
    }

    pub(crate) fn settle(&mut self, outcome: Result<String, GenerationError>) {
        match outcome {
            Ok(text) => {
                log::info!("Travel plan ready ({} chars)", text.len());
                self.state = ResultState::Ready(GeneratedItinerary::new(text, &self.request));
                self.notice = Some(READY_NOTICE);
            }
            Err(err) => {
                log::warn!("Error generating travel plan: {}", err);
                let message = err.to_string();
                self.state = ResultState::Failed {
                    message: if message.is_empty() {
                        GENERIC_FAILURE.to_string()
                    } else {
                        message
                    },
                };
                self.notice = Some(FAILED_NOTICE);
            }
        }
    }
}

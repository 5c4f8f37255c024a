use crate::{
    error::WorkflowError,
    models::{plan::GeneratePlanRequest, preferences::PreferenceSet, trip::TripRequest},
};

use super::{
    intake::TripIntakeForm,
    questionnaire::PreferenceQuestionnaire,
    results::{CompletedGeneration, PendingGeneration, ResultsView},
};

/// The one stage currently on screen, with the data it was entered with.
#[derive(Debug, Clone)]
pub enum Stage {
    Landing(TripIntakeForm),
    Questionnaire {
        trip: TripRequest,
        form: PreferenceQuestionnaire,
    },
    Results {
        trip: TripRequest,
        preferences: PreferenceSet,
        view: ResultsView,
    },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Landing(_) => "landing",
            Stage::Questionnaire { .. } => "questionnaire",
            Stage::Results { .. } => "results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// The view that asked is gone or has started a newer attempt.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct WorkflowController {
    stage: Stage,
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowController {
    pub fn new() -> Self {
        Self {
            stage: Stage::Landing(TripIntakeForm::new()),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_name(&self) -> &'static str {
        self.stage.name()
    }

    fn invalid(&self, action: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            from: self.stage.name(),
            action,
        }
    }

    pub fn intake_mut(&mut self) -> Option<&mut TripIntakeForm> {
        match &mut self.stage {
            Stage::Landing(form) => Some(form),
            _ => None,
        }
    }

    pub fn questionnaire_mut(&mut self) -> Option<&mut PreferenceQuestionnaire> {
        match &mut self.stage {
            Stage::Questionnaire { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsView> {
        match &self.stage {
            Stage::Results { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn results_mut(&mut self) -> Option<&mut ResultsView> {
        match &mut self.stage {
            Stage::Results { view, .. } => Some(view),
            _ => None,
        }
    }

    /// landing → questionnaire, carrying the submitted trip.
    pub fn submit_intake(&mut self) -> Result<TripRequest, WorkflowError> {
        let trip = match &self.stage {
            Stage::Landing(form) => form.submit()?,
            _ => return Err(self.invalid("submit the trip")),
        };

        log::info!("Trip submitted: {}", trip.route_summary());
        self.stage = Stage::Questionnaire {
            trip: trip.clone(),
            form: PreferenceQuestionnaire::new(),
        };
        Ok(trip)
    }

    /// questionnaire → results. Mounts a fresh results view and hands back
    /// the generation request it issues on entry.
    pub fn complete_questionnaire(&mut self) -> Result<PendingGeneration, WorkflowError> {
        let (trip, preferences) = match &self.stage {
            Stage::Questionnaire { trip, form } => (trip.clone(), form.complete()?),
            _ => return Err(self.invalid("complete the questionnaire")),
        };

        let mut view = ResultsView::new(GeneratePlanRequest {
            trip_data: trip.clone(),
            preferences: preferences.clone(),
        });
        let pending = view.begin();
        log::info!("Entering results view {}", view.id());

        self.stage = Stage::Results {
            trip,
            preferences,
            view,
        };
        Ok(pending)
    }

    /// questionnaire or results → landing. The intake form comes back filled
    /// with the last trip; the questionnaire is not resumable.
    pub fn back(&mut self) -> Result<(), WorkflowError> {
        let form = match &self.stage {
            Stage::Questionnaire { trip, .. } | Stage::Results { trip, .. } => {
                TripIntakeForm::from_trip(trip)
            }
            Stage::Landing(_) => return Err(self.invalid("go back")),
        };
        self.stage = Stage::Landing(form);
        Ok(())
    }

    /// Retry from a failed results view.
    pub fn retry(&mut self) -> Result<PendingGeneration, WorkflowError> {
        match self.results_mut().and_then(ResultsView::retry) {
            Some(pending) => Ok(pending),
            None => Err(self.invalid("retry")),
        }
    }

    /// Applies a finished generation if the view that requested it is still
    /// mounted and waiting on that attempt.
    pub fn deliver(&mut self, completed: CompletedGeneration) -> Delivery {
        match &mut self.stage {
            Stage::Results { view, .. } if view.accepts(completed.view_id, completed.attempt) => {
                view.settle(completed.outcome);
                Delivery::Applied
            }
            _ => {
                log::debug!(
                    "Discarding generation result for view {} attempt {}",
                    completed.view_id,
                    completed.attempt
                );
                Delivery::Discarded
            }
        }
    }
}

//! Traveler-facing side of the planner: form state for each stage, the stage
//! machine that moves between them, and the results pipeline that calls the
//! generation endpoint. Rendering is left to whatever front end drives it.

pub mod intake;
pub mod plan_client;
pub mod questionnaire;
pub mod results;
pub mod workflow;

pub use plan_client::{HttpPlanClient, PlanGenerator};
pub use workflow::{Delivery, Stage, WorkflowController};

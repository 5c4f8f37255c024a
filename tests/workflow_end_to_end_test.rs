mod common;

use common::{chat_error, chat_reply, start_backend, MockUpstream};
use tripmate_api::{
    client::{
        plan_client::GENERIC_FAILURE,
        results::{run_generation, ResultState},
        Delivery, HttpPlanClient, PlanGenerator, WorkflowController,
    },
    error::GenerationError,
    models::preferences::{Accommodation, Budget, Pace, Vibe},
    services::plan_formatter::PlanBlock,
};

fn plan_trip(controller: &mut WorkflowController) {
    let intake = controller.intake_mut().unwrap();
    intake.start_country.set_query("austral");
    assert_eq!(intake.start_country.suggestions(), &["Australia"]);
    intake.start_country.select(0);
    intake.end_country.set_query("Japan");
    intake.set_start_date(chrono::NaiveDate::from_ymd_opt(2025, 3, 1));
    assert!(intake.set_end_date(chrono::NaiveDate::from_ymd_opt(2025, 3, 10)));
    controller.submit_intake().unwrap();

    let questionnaire = controller.questionnaire_mut().unwrap();
    questionnaire.increment_travelers();
    questionnaire.set_budget(Budget::MidRange);
    questionnaire.set_pace(Pace::Balanced);
    questionnaire.toggle_vibe(Vibe::Nature);
    questionnaire.set_accommodation(Accommodation::Hotel);
    questionnaire.toggle_interest("Food");
}

#[actix_rt::test]
async fn test_full_flow_renders_itinerary() {
    let upstream =
        MockUpstream::start(vec![chat_reply("# Australia to Japan\n\n## Day 1\n- Fly to Tokyo")])
            .await;
    let (endpoint, backend) = start_backend(upstream.config()).await;
    let client = HttpPlanClient::new(endpoint);

    let mut controller = WorkflowController::new();
    plan_trip(&mut controller);
    let pending = controller.complete_questionnaire().unwrap();
    assert!(controller.results().unwrap().is_loading());

    let completed = run_generation(&client, pending).await;
    assert_eq!(controller.deliver(completed), Delivery::Applied);

    let view = controller.results().unwrap();
    let itinerary = view.itinerary().unwrap();
    assert_eq!(itinerary.summary.duration_label(), "9 days");
    assert_eq!(
        view.blocks().unwrap(),
        vec![
            PlanBlock::Heading1("Australia to Japan".into()),
            PlanBlock::Gap,
            PlanBlock::Heading2("Day 1".into()),
            PlanBlock::ListItem("Fly to Tokyo".into()),
        ]
    );

    let prompt = upstream.requests()[0].body["messages"][1]["content"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(prompt.contains("- Duration: 9 days"));
    assert!(prompt.contains("- Number of travelers: 2"));

    backend.stop(false).await;
    upstream.stop().await;
}

#[actix_rt::test]
async fn test_upstream_failure_then_retry() {
    let upstream = MockUpstream::start(vec![
        (500, chat_error("The server had an error while processing your request")),
        chat_reply("# Recovered plan"),
    ])
    .await;
    let (endpoint, backend) = start_backend(upstream.config()).await;
    let client = HttpPlanClient::new(endpoint);

    let mut controller = WorkflowController::new();
    plan_trip(&mut controller);
    let pending = controller.complete_questionnaire().unwrap();
    let completed = run_generation(&client, pending).await;
    controller.deliver(completed);

    assert_eq!(
        controller.results().unwrap().error_message(),
        Some("OpenAI API error: The server had an error while processing your request")
    );

    let pending = controller.retry().unwrap();
    assert_eq!(controller.results().unwrap().state(), &ResultState::Loading);

    let completed = run_generation(&client, pending).await;
    controller.deliver(completed);
    assert_eq!(
        controller.results().unwrap().itinerary().unwrap().text,
        "# Recovered plan"
    );

    let received = upstream.requests();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].body, received[1].body);

    backend.stop(false).await;
    upstream.stop().await;
}

#[actix_rt::test]
async fn test_unreachable_backend_is_retryable() {
    // Nothing listens on the discard port.
    let client = HttpPlanClient::new("http://127.0.0.1:9/functions/v1/generate-travel-plan");

    let mut controller = WorkflowController::new();
    plan_trip(&mut controller);
    let pending = controller.complete_questionnaire().unwrap();

    let request = pending.request.clone();
    assert!(matches!(
        client.generate(&request).await,
        Err(GenerationError::Transport(_))
    ));

    let completed = run_generation(&client, pending).await;
    controller.deliver(completed);
    let message = controller.results().unwrap().error_message().unwrap().to_string();
    assert!(message.starts_with("Network error"));
    assert!(controller.retry().is_ok());
}

#[actix_rt::test]
async fn test_non_plan_response_uses_generic_message() {
    let upstream = MockUpstream::start(vec![]).await;
    // Point the client at the upstream mock itself: its reply is not a plan.
    let client = HttpPlanClient::new(format!("{}/chat/completions", upstream.base_url));

    let mut controller = WorkflowController::new();
    plan_trip(&mut controller);
    let pending = controller.complete_questionnaire().unwrap();
    let completed = run_generation(&client, pending).await;
    controller.deliver(completed);

    assert_eq!(
        controller.results().unwrap().error_message(),
        Some(GENERIC_FAILURE)
    );
    upstream.stop().await;
}

use actix_web::{web, HttpResponse, Responder};

use crate::{
    error::GenerationError,
    models::plan::{GeneratePlanRequest, GeneratePlanResponse},
    services::{openai_service::ChatCompletionClient, prompt_service::build_travel_prompt},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/*
    OPTIONS /functions/v1/generate-travel-plan
*/
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

/*
    POST /functions/v1/generate-travel-plan
*/
pub async fn generate(
    client: web::Data<ChatCompletionClient>,
    body: web::Bytes,
) -> impl Responder {
    match generate_plan(&client, &body).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Error in generate-travel-plan: {}", err);
            HttpResponse::InternalServerError().json(GeneratePlanResponse::failure(err.to_string()))
        }
    }
}

async fn generate_plan(
    client: &ChatCompletionClient,
    body: &[u8],
) -> Result<GeneratePlanResponse, GenerationError> {
    let request: GeneratePlanRequest = serde_json::from_slice(body)?;
    log::debug!("Received trip data: {:?}", request.trip_data);
    log::debug!("Received preferences: {:?}", request.preferences);

    let prompt = build_travel_prompt(&request.trip_data, &request.preferences);
    let travel_plan = client.complete(&prompt).await?;

    log::info!(
        "Generated travel plan for {} ({} chars)",
        request.trip_data.route_summary(),
        travel_plan.len()
    );

    Ok(GeneratePlanResponse::success(travel_plan, request))
}

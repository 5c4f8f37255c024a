#![allow(dead_code)]

use actix_web::{
    dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    web, App, HttpRequest, HttpResponse, HttpServer,
};
use serde_json::{json, Value};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use tripmate_api::{
    config::AppConfig,
    models::{
        plan::GeneratePlanRequest,
        preferences::{Accommodation, Budget, Pace, PreferenceSet, Vibe},
        trip::TripRequest,
    },
    routes,
    services::openai_service::ChatCompletionClient,
};

pub const TEST_API_KEY: &str = "sk-test-0123456789";

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct Script {
    replies: Mutex<VecDeque<(u16, Value)>>,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Stand-in for the chat-completion API. Replies are served in order; once
/// they run out every call gets a 500.
pub struct MockUpstream {
    pub base_url: String,
    pub received: Arc<Mutex<Vec<ReceivedRequest>>>,
    handle: ServerHandle,
}

async fn chat_completions(
    req: HttpRequest,
    body: web::Json<Value>,
    script: web::Data<Script>,
) -> HttpResponse {
    script.received.lock().unwrap().push(ReceivedRequest {
        authorization: req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: body.into_inner(),
    });

    let (status, reply) = script
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((500, chat_error("mock upstream has no reply left")));
    HttpResponse::build(StatusCode::from_u16(status).unwrap()).json(reply)
}

impl MockUpstream {
    pub async fn start(replies: Vec<(u16, Value)>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let script = web::Data::new(Script {
            replies: Mutex::new(replies.into()),
            received: received.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(script.clone())
                .route("/v1/chat/completions", web::post().to(chat_completions))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock upstream");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base_url: format!("http://{}/v1", addr),
            received,
            handle,
        }
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::for_upstream(self.base_url.clone(), TEST_API_KEY)
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

pub fn chat_reply(text: &str) -> (u16, Value) {
    (
        200,
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }]
        }),
    )
}

pub fn chat_error(message: &str) -> Value {
    json!({"error": {"message": message, "type": "invalid_request_error"}})
}

pub fn backend_app(
    config: AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let chat_client = ChatCompletionClient::new(&config);
    App::new()
        .wrap(routes::cors_headers())
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(chat_client))
        .configure(routes::configure)
}

/// Runs the real backend on an ephemeral port and returns its generation URL.
pub async fn start_backend(config: AppConfig) -> (String, ServerHandle) {
    let chat_client = web::Data::new(ChatCompletionClient::new(&config));
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(routes::cors_headers())
            .app_data(config.clone())
            .app_data(chat_client.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind backend");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_rt::spawn(server);

    (format!("http://{}{}", addr, routes::GENERATE_PLAN_PATH), handle)
}

pub fn australia_to_japan() -> GeneratePlanRequest {
    GeneratePlanRequest {
        trip_data: TripRequest {
            start_country: "Australia".to_string(),
            end_country: "Japan".to_string(),
            intermediate_countries: vec![],
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10),
        },
        preferences: PreferenceSet {
            travelers: 2,
            budget: Some(Budget::MidRange),
            pace: Some(Pace::Balanced),
            vibes: vec![Vibe::Nature],
            accommodation: Some(Accommodation::Hotel),
            interests: vec!["Food".to_string()],
            ..Default::default()
        },
    }
}

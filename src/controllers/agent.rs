//! Agent invocation endpoint.
//!
//! The serving-layer contract around the orchestrator: prompt limits on the
//! way in, a response cap on the way out. The handler never touches the
//! filesystem itself; everything behind the runner goes through the bounded
//! file-op pool.

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::config::{MAX_PROMPT_CHARS, MAX_RESPONSE_CHARS, TRUNCATION_NOTICE};

#[derive(Debug, Deserialize, Serialize)]
pub struct AgentRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AgentResponse {
    pub response: String,
}

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/agent").route(web::post().to(invoke_agent)));
}

async fn invoke_agent(
    state: web::Data<AppState>,
    body: web::Json<AgentRequest>,
) -> impl Responder {
    if body.prompt.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Prompt cannot be empty"
        }));
    }
    if body.prompt.chars().count() > MAX_PROMPT_CHARS {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!(
                "Prompt is too long. Maximum length is {} characters.",
                MAX_PROMPT_CHARS
            )
        }));
    }

    let mut response = state.agent_runner.run(&body.prompt).await;

    if response.chars().count() > MAX_RESPONSE_CHARS {
        response = response.chars().take(MAX_RESPONSE_CHARS).collect();
        response.push_str(TRUNCATION_NOTICE);
    }

    HttpResponse::Ok().json(AgentResponse { response })
}

//! Tool schema and direct invocation endpoints.
//!
//! `GET /api/tools` publishes the tool definitions an orchestrator needs to
//! decide invocations; `POST /api/tools/invoke` runs one by name.

use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::Value;

use crate::AppState;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/tools").route(web::get().to(list_tools)));
    cfg.service(web::resource("/api/tools/invoke").route(web::post().to(invoke_tool)));
}

async fn list_tools(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "tools": state.tool_registry.definitions()
    }))
}

#[derive(Debug, Deserialize)]
struct InvokeRequest {
    name: String,
    #[serde(default)]
    arguments: Value,
}

async fn invoke_tool(
    state: web::Data<AppState>,
    body: web::Json<InvokeRequest>,
) -> impl Responder {
    let arguments = if body.arguments.is_null() {
        serde_json::json!({})
    } else {
        body.arguments.clone()
    };

    let result = state
        .tool_registry
        .execute(&body.name, arguments, &state.tool_context)
        .await;
    HttpResponse::Ok().json(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_list_tools_publishes_schema() {
        let dir = tempfile::tempdir().unwrap();
        let state = crate::test_state(dir.path());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(config_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/tools").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let tools = body["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 4);
        assert_eq!(tools[0]["name"], "delete_note");
        assert_eq!(tools[3]["name"], "write_note");
        assert_eq!(
            tools[3]["input_schema"]["required"],
            json!(["filename", "content"])
        );
        assert_eq!(
            tools[3]["input_schema"]["properties"]["filename"]["type"],
            "string"
        );
    }

    #[actix_web::test]
    async fn test_invoke_tool_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let state = crate::test_state(dir.path());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(config_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/tools/invoke")
            .set_json(json!({
                "name": "write_note",
                "arguments": {"filename": "x.txt", "content": "hi"}
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["output"], "Successfully wrote 2 characters to 'x.txt'.");

        let req = test::TestRequest::post()
            .uri("/api/tools/invoke")
            .set_json(json!({"name": "list_notes"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["output"], "Found 1 note: x.txt");
    }
}

//! Notes REST API — the direct, non-agent path to the store.
//!
//! Same sandbox and same pool as the tool path; only the presentation
//! differs (JSON bodies and HTTP status codes instead of prose).

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::dispatch::PoolError;
use crate::notes::render::{self, NoteOp};
use crate::notes::{ReadOutcome, StoreError};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/notes").route(web::get().to(list_notes)));
    cfg.service(
        web::resource("/api/notes/{name}")
            .route(web::get().to(read_note))
            .route(web::put().to(write_note))
            .route(web::delete().to(delete_note)),
    );
}

#[derive(Debug, Serialize)]
struct NoteContentResponse {
    filename: String,
    content: String,
    empty: bool,
}

#[derive(Debug, Deserialize)]
struct WriteNoteBody {
    content: String,
}

fn store_error_response(op: NoteOp, err: &StoreError) -> HttpResponse {
    let body = serde_json::json!({ "error": render::describe_error(op, err) });
    match err {
        StoreError::Name(_) => HttpResponse::BadRequest().json(body),
        StoreError::NotFound { .. } => HttpResponse::NotFound().json(body),
        StoreError::Permission { .. } => HttpResponse::Forbidden().json(body),
        StoreError::NotUtf8 { .. } => HttpResponse::UnprocessableEntity().json(body),
        StoreError::Io { .. } => HttpResponse::InternalServerError().json(body),
    }
}

fn pool_error_response(err: &PoolError) -> HttpResponse {
    match err {
        PoolError::Saturated => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": err.to_string()
        })),
        PoolError::Panicked => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": err.to_string()
        })),
    }
}

async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    let store = state.tool_context.notes.clone();
    match state.tool_context.file_ops.run(move || store.list()).await {
        Ok(Ok(notes)) => HttpResponse::Ok().json(serde_json::json!({
            "count": notes.len(),
            "notes": notes,
        })),
        Ok(Err(e)) => store_error_response(NoteOp::List, &e),
        Err(e) => pool_error_response(&e),
    }
}

async fn read_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let store = state.tool_context.notes.clone();
    let op_name = name.clone();
    match state
        .tool_context
        .file_ops
        .run(move || store.read(&op_name))
        .await
    {
        Ok(Ok(ReadOutcome::Content(content))) => HttpResponse::Ok().json(NoteContentResponse {
            filename: name,
            content,
            empty: false,
        }),
        Ok(Ok(ReadOutcome::Blank)) => HttpResponse::Ok().json(NoteContentResponse {
            filename: name,
            content: String::new(),
            empty: true,
        }),
        Ok(Err(e)) => store_error_response(NoteOp::Read, &e),
        Err(e) => pool_error_response(&e),
    }
}

async fn write_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<WriteNoteBody>,
) -> impl Responder {
    let name = path.into_inner();
    let store = state.tool_context.notes.clone();
    let op_name = name.clone();
    let content = body.into_inner().content;
    match state
        .tool_context
        .file_ops
        .run(move || store.write(&op_name, &content))
        .await
    {
        Ok(Ok(chars)) => HttpResponse::Ok().json(serde_json::json!({
            "filename": name,
            "characters": chars,
        })),
        Ok(Err(e)) => store_error_response(NoteOp::Write, &e),
        Err(e) => pool_error_response(&e),
    }
}

async fn delete_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let store = state.tool_context.notes.clone();
    let op_name = name.clone();
    match state
        .tool_context
        .file_ops
        .run(move || store.delete(&op_name))
        .await
    {
        Ok(Ok(())) => HttpResponse::Ok().json(serde_json::json!({
            "filename": name,
            "deleted": true,
        })),
        Ok(Err(e)) => store_error_response(NoteOp::Delete, &e),
        Err(e) => pool_error_response(&e),
    }
}

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::sync::Arc;
use std::time::Instant;

mod agents;
mod config;
mod controllers;
mod dispatch;
mod notes;
mod tools;

use agents::{AgentRunner, ToolCallRunner};
use dispatch::FileOpPool;
use notes::NoteStore;
use tools::{ToolContext, ToolRegistry};

pub struct AppState {
    pub tool_registry: Arc<ToolRegistry>,
    pub tool_context: ToolContext,
    pub agent_runner: Arc<dyn AgentRunner>,
    /// Server start time for uptime reporting
    pub started_at: Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = config::port();
    let workers = config::file_workers();
    let max_pending = config::max_pending();

    let store = Arc::new(NoteStore::new(config::notes_dir())?);
    let file_ops = Arc::new(FileOpPool::new(workers, max_pending));
    let registry = Arc::new(ToolRegistry::with_builtin_tools());
    let context = ToolContext::new(store.clone(), file_ops);
    let runner: Arc<dyn AgentRunner> =
        Arc::new(ToolCallRunner::new(registry.clone(), context.clone()));

    log::info!("Notes directory: {}", store.root().display());
    log::info!(
        "File op pool: {} workers, {} pending slots",
        workers,
        max_pending
    );
    log::info!("Starting jotbot server on port {}", port);

    let started_at = Instant::now();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                tool_registry: Arc::clone(&registry),
                tool_context: context.clone(),
                agent_runner: Arc::clone(&runner),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::agent::config_routes)
            .configure(controllers::tools::config_routes)
            .configure(controllers::notes::config_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

/// AppState over a throwaway notes root, for controller tests.
#[cfg(test)]
pub fn test_state(root: &std::path::Path) -> AppState {
    let store = Arc::new(NoteStore::new(root).expect("test notes root"));
    let file_ops = Arc::new(FileOpPool::new(2, 8));
    let registry = Arc::new(ToolRegistry::with_builtin_tools());
    let context = ToolContext::new(store, file_ops);
    let runner: Arc<dyn AgentRunner> =
        Arc::new(ToolCallRunner::new(registry.clone(), context.clone()));
    AppState {
        tool_registry: registry,
        tool_context: context,
        agent_runner: runner,
        started_at: Instant::now(),
    }
}

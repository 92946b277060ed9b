use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::{DatabaseManager, StudentRepository};
use crate::handlers::{self, students};
use crate::services::{ExportService, QueryService, StudentService};

/// Request-scoped handle to everything the handlers need, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub database: DatabaseManager,
    pub queries: QueryService,
    pub students: StudentService,
    pub exports: ExportService,
}

impl AppState {
    pub fn new(config: AppConfig, database: DatabaseManager) -> Self {
        let repository = StudentRepository::new(database.pool().clone());
        Self {
            config: Arc::new(config),
            queries: QueryService::new(repository.clone()),
            students: StudentService::new(repository.clone()),
            exports: ExportService::new(repository),
            database,
        }
    }
}

pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let router = Router::new()
        .route("/", get(students::list))
        .route("/health", get(handlers::health))
        .route("/add_student", get(students::add_form).post(students::add_submit))
        .route("/edit_student/:id", get(students::edit_form).post(students::edit_submit))
        .route("/delete_student/:id", post(students::delete))
        .route("/export_csv", get(students::export_csv))
        .fallback(students::not_found)
        .with_state(state);

    // Global middleware
    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use app::{app, AppState};

/// Install the global fmt subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("student_registry=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

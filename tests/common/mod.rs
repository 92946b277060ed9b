#![allow(dead_code)]

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::redirect::Policy;
use tokio::task::JoinHandle;

use student_registry::config::AppConfig;
use student_registry::database::{DatabaseManager, StudentForm};
use student_registry::services::seed;
use student_registry::{app, AppState};

/// The real router served on a free port, backed by a private in-memory database
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::for_tests();
        config.api.port = port;

        let database = DatabaseManager::connect(&config.database).await?;
        database.migrate().await?;

        let bind_addr = config.bind_addr();
        let state = AppState::new(config, database);
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", bind_addr))?;

        let router = app(state.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self { port, base_url, state, handle })
    }

    /// Server preloaded with the five sample students
    pub async fn spawn_seeded() -> Result<Self> {
        let server = Self::spawn().await?;
        seed::seed_if_empty(&server.state.students).await?;
        Ok(server)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn insert(&self, form: StudentForm) -> Result<i64> {
        Ok(self.state.students.create(&form).await?.id)
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.state.students.count().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client that reports redirects instead of following them
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("failed to build http client")
}

/// The `flash=...` pair a response left behind, ready to send back as a Cookie header
pub fn flash_cookie(res: &reqwest::Response) -> Option<String> {
    res.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with("flash=") && pair.len() > "flash=".len())
        .map(str::to_string)
}

/// Follow a flash-carrying redirect to the list view and return its JSON body
pub async fn follow_flash(server: &TestServer, res: &reqwest::Response) -> Result<serde_json::Value> {
    let cookie = flash_cookie(res).context("response carried no flash cookie")?;
    let page = client()
        .get(server.url("/"))
        .header(COOKIE, cookie)
        .send()
        .await?;
    Ok(page.json::<serde_json::Value>().await?)
}

pub fn names(payload: &serde_json::Value) -> Vec<String> {
    payload["data"]["students"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .filter_map(|s| s["student_name"].as_str().map(str::to_string))
        .collect()
}

/// Parse an RFC3339 timestamp field out of a serialized student
pub fn timestamp(student: &serde_json::Value, field: &str) -> DateTime<Utc> {
    student[field]
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| panic!("{} is not a timestamp: {}", field, student))
}

pub fn student_form(name: &str, college: &str, status: &str) -> [(&'static str, String); 5] {
    [
        ("student_name", name.to_string()),
        ("batch_year", "2023-24".to_string()),
        ("course_program", "BCA".to_string()),
        ("college_university", college.to_string()),
        ("current_status", status.to_string()),
    ]
}

use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::database::StudentRepository;
use crate::services::{seed, StudentService};

pub async fn handle(repository: StudentRepository, output_format: OutputFormat) -> anyhow::Result<()> {
    let added = seed::seed_if_empty(&StudentService::new(repository)).await?;

    let message = if added == 0 {
        "Registry already has students; nothing seeded".to_string()
    } else {
        format!("Added {} sample students", added)
    };
    output_success(&output_format, &message, Some(json!({ "added": added })))
}
